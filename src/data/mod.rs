//! Export of generated fonts
//!
//! Every format walks the generator's repertoire once and writes the result
//! under an output directory, named after the font's file stem.

pub mod conversions;
pub mod json;
pub mod svg;
pub mod ufo;

use crate::font::{Font, Glyph};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Output format of an export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// A UFO 3 source directory
    #[default]
    Ufo,
    /// One SVG file per glyph
    Svg,
    /// A JSON dump of every glyph outline
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Ufo => "ufo",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        })
    }
}

/// Build every glyph of `font` in registration order.
///
/// A registered character whose builder reports no glyph is skipped with a
/// warning; a builder error aborts the export.
pub fn collect_glyphs(font: &Font) -> Result<Vec<(char, Glyph)>> {
    let mut glyphs = Vec::new();
    for character in font.generator.chars() {
        match font.generator.glyph(character)? {
            Some(glyph) => glyphs.push((character, glyph)),
            None => warn!(%character, "registered character produced no glyph"),
        }
    }
    Ok(glyphs)
}

/// Write `font` in `format` under `output_dir` and return the written path.
pub fn export(font: &Font, format: ExportFormat, output_dir: &Path) -> Result<PathBuf> {
    let path = match format {
        ExportFormat::Ufo => ufo::write_ufo(font, output_dir)?,
        ExportFormat::Svg => svg::write_svg_dir(font, output_dir)?,
        ExportFormat::Json => json::write_json(font, output_dir)?,
    };
    info!(font = %font.full_name(), %format, path = %path.display(), "exported");
    Ok(path)
}
