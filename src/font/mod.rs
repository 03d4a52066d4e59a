//! Font level records
//!
//! A [`Font`] pairs a family's identity (names, style, copyright, version)
//! with the [`Generator`] that draws its glyphs.

pub mod glyph;
pub mod metrics;
pub mod style;

pub use glyph::Glyph;
pub use metrics::{Bearings, Metrics};
pub use style::{FontSlant, FontStretch, FontStyle, FontWeight};

use crate::generator::Generator;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub copyright: String,
    pub version: String,
}

impl FontInfo {
    pub fn new(copyright: impl Into<String>, version: impl Into<String>) -> Self {
        Self { copyright: copyright.into(), version: version.into() }
    }
}

/// One style of one family, ready to be exported.
#[derive(Clone)]
pub struct Font {
    pub family_name: String,
    pub style: FontStyle,
    pub info: FontInfo,
    pub generator: Arc<dyn Generator>,
}

impl Font {
    pub fn new(family_name: impl Into<String>, style: FontStyle, info: FontInfo, generator: Arc<dyn Generator>) -> Self {
        Self { family_name: family_name.into(), style, info, generator }
    }

    /// Family name including any non-normal stretch, e.g. "Vekos Condensed".
    pub fn extended_family_name(&self) -> String {
        match self.style.stretch {
            FontStretch::Normal => self.family_name.clone(),
            stretch => format!("{} {}", self.family_name, stretch.name()),
        }
    }

    /// e.g. "Vekos Condensed Bold"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.extended_family_name(), self.style.style_name())
    }

    /// e.g. "VekosCondensed-Bold"
    pub fn postscript_name(&self) -> String {
        let family: String = self.extended_family_name().split_whitespace().collect();
        let style: String = self.style.style_name().split_whitespace().collect();
        format!("{family}-{style}")
    }

    /// File name stem, e.g. "vekos-condensed-bold".
    pub fn file_stem(&self) -> String {
        self.full_name()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn version(&self) -> &str {
        &self.info.version
    }

    pub fn copyright(&self) -> &str {
        &self.info.copyright
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family_name", &self.family_name)
            .field("style", &self.style)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    struct NoGlyphs;

    impl Generator for NoGlyphs {
        fn chars(&self) -> Vec<char> {
            Vec::new()
        }

        fn glyph(&self, _: char) -> Result<Option<Glyph>> {
            Ok(None)
        }

        fn metrics(&self) -> Metrics {
            Metrics::from_design(500.0, 250.0, 10.0, 40.0)
        }
    }

    fn font(weight: FontWeight, stretch: FontStretch) -> Font {
        Font::new(
            "Vekos",
            FontStyle::upright(weight, stretch),
            FontInfo::new("Copyright", "1.0.0"),
            Arc::new(NoGlyphs),
        )
    }

    #[test]
    fn names_for_normal_stretch() {
        let font = font(FontWeight::Regular, FontStretch::Normal);
        assert_eq!(font.extended_family_name(), "Vekos");
        assert_eq!(font.full_name(), "Vekos Regular");
        assert_eq!(font.postscript_name(), "Vekos-Regular");
        assert_eq!(font.file_stem(), "vekos-regular");
    }

    #[test]
    fn names_include_stretch() {
        let font = font(FontWeight::Bold, FontStretch::Condensed);
        assert_eq!(font.extended_family_name(), "Vekos Condensed");
        assert_eq!(font.full_name(), "Vekos Condensed Bold");
        assert_eq!(font.postscript_name(), "VekosCondensed-Bold");
    }
}
