//! Per-glyph SVG output
//!
//! Each glyph becomes `<codepoint>.svg` in a directory named after the font.
//! SVG is y-down like the design space, so outlines are written as they are
//! and the view box spans one em from the ascent line. The advance width
//! rides along in a `glyph-width` attribute on the root element.

use super::collect_glyphs;
use crate::core::errors::FontgenContext;
use crate::font::{Font, Glyph};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// SVG document for one glyph.
pub fn glyph_svg(glyph: &Glyph) -> String {
    let metrics = glyph.metrics;
    let data: Vec<String> = glyph.outline.to_bezpaths().iter().map(|path| path.to_svg()).collect();
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#,
            r#"width="{em}" height="{em}" viewBox="0 {top} {em} {em}" glyph-width="{width}">"#,
            r#"<path d="{data}" fill="black" fill-rule="nonzero"/>"#,
            "</svg>\n",
        ),
        em = metrics.em,
        top = -metrics.ascent,
        width = glyph.width,
        data = data.join(" "),
    )
}

/// Write every glyph to `<output_dir>/<file-stem>/<codepoint>.svg`.
pub fn write_svg_dir(font: &Font, output_dir: &Path) -> Result<PathBuf> {
    let dir = output_dir.join(font.file_stem());
    fs::create_dir_all(&dir).with_file_context("create", &dir)?;
    for (character, glyph) in collect_glyphs(font)? {
        let path = dir.join(format!("{}.svg", character as u32));
        fs::write(&path, glyph_svg(&glyph)).with_file_context("write", &path)?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Bearings, Metrics};
    use crate::part::Part;

    #[test]
    fn root_carries_the_advance_width() {
        let metrics = Metrics { em: 1000.0, ascent: 760.0, descent: 240.0 };
        let part = Part::rect(100.0, 500.0).translate((0.0, -500.0));
        let glyph = Glyph::by_bearings(part, metrics, Bearings::symmetric(20.0));
        let svg = glyph_svg(&glyph);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"glyph-width="140""#));
        assert!(svg.contains(r#"viewBox="0 -760 1000 1000""#));
        assert!(svg.contains("<path d=\"M"));
    }

    #[test]
    fn empty_glyph_has_an_empty_path() {
        let metrics = Metrics { em: 1000.0, ascent: 760.0, descent: 240.0 };
        let glyph = Glyph::by_bearings(Part::empty(), metrics, Bearings::symmetric(50.0));
        assert!(glyph_svg(&glyph).contains(r#"<path d="""#));
    }
}
