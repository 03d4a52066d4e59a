//! JSON dump of a generated font

use super::collect_glyphs;
use super::conversions::glyph_name;
use crate::core::errors::FontgenContext;
use crate::font::{Font, FontStyle, Glyph, Metrics};
use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct FontDump {
    pub family_name: String,
    pub full_name: String,
    pub postscript_name: String,
    pub version: String,
    pub copyright: String,
    pub style: FontStyle,
    pub metrics: Metrics,
    pub glyphs: Vec<GlyphDump>,
}

#[derive(Debug, Serialize)]
pub struct GlyphDump {
    pub character: char,
    pub name: String,
    #[serde(flatten)]
    pub glyph: Glyph,
}

pub fn dump_font(font: &Font) -> Result<FontDump> {
    let glyphs = collect_glyphs(font)?
        .into_iter()
        .map(|(character, glyph)| GlyphDump { character, name: glyph_name(character), glyph })
        .collect();
    Ok(FontDump {
        family_name: font.extended_family_name(),
        full_name: font.full_name(),
        postscript_name: font.postscript_name(),
        version: font.version().to_string(),
        copyright: font.copyright().to_string(),
        style: font.style,
        metrics: font.generator.metrics(),
        glyphs,
    })
}

/// Write the dump to `<output_dir>/<file-stem>.json`.
pub fn write_json(font: &Font, output_dir: &Path) -> Result<PathBuf> {
    let contents = serde_json::to_string_pretty(&dump_font(font)?)?;
    fs::create_dir_all(output_dir).with_file_context("create", output_dir)?;
    let path = output_dir.join(format!("{}.json", font.file_stem()));
    fs::write(&path, contents).with_file_context("write", &path)?;
    Ok(path)
}
