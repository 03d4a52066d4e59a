//! UFO file output

use super::collect_glyphs;
use super::conversions::{font_info, glyph_to_norad};
use crate::core::errors::FontgenContext;
use crate::font::Font;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The whole font as an in-memory norad font.
pub fn build_ufo(font: &Font) -> Result<norad::Font> {
    let mut ufo = norad::Font::new();
    ufo.font_info = font_info(font)?;
    let layer = ufo.default_layer_mut();
    for (character, glyph) in collect_glyphs(font)? {
        layer.insert_glyph(glyph_to_norad(character, &glyph));
    }
    debug!(glyphs = layer.len(), "built ufo");
    Ok(ufo)
}

/// Save the font to `<output_dir>/<file-stem>.ufo`, replacing an older copy.
pub fn write_ufo(font: &Font, output_dir: &Path) -> Result<PathBuf> {
    let ufo = build_ufo(font)?;
    fs::create_dir_all(output_dir).with_file_context("create", output_dir)?;
    let path = output_dir.join(format!("{}.ufo", font.file_stem()));
    if path.exists() {
        fs::remove_dir_all(&path).with_file_context("replace", &path)?;
    }
    ufo.save(&path).with_file_context("save", &path)?;
    Ok(path)
}

/// Load a UFO back from disk.
pub fn load_ufo(path: &Path) -> Result<norad::Font> {
    norad::Font::load(path).with_file_context("load", path)
}
