//! Style descriptors: weight, slant and stretch

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Heavy,
}

impl FontWeight {
    /// CSS-style weight class.
    pub fn number(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Heavy => 900,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontWeight::Thin => "Thin",
            FontWeight::ExtraLight => "Extra Light",
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi Bold",
            FontWeight::Bold => "Bold",
            FontWeight::ExtraBold => "Extra Bold",
            FontWeight::Heavy => "Heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSlant {
    #[default]
    Upright,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStretch {
    UltraCondensed,
    Condensed,
    Normal,
    Expanded,
    UltraExpanded,
}

impl FontStretch {
    pub fn number(self) -> u16 {
        match self {
            FontStretch::UltraCondensed => 100,
            FontStretch::Condensed => 200,
            FontStretch::Normal => 300,
            FontStretch::Expanded => 400,
            FontStretch::UltraExpanded => 500,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontStretch::UltraCondensed => "Ultra Condensed",
            FontStretch::Condensed => "Condensed",
            FontStretch::Normal => "Normal",
            FontStretch::Expanded => "Expanded",
            FontStretch::UltraExpanded => "Ultra Expanded",
        }
    }

    /// OS/2 width class (1 to 9, 5 is normal).
    pub fn width_class(self) -> u16 {
        match self {
            FontStretch::UltraCondensed => 1,
            FontStretch::Condensed => 3,
            FontStretch::Normal => 5,
            FontStretch::Expanded => 7,
            FontStretch::UltraExpanded => 9,
        }
    }
}

/// Weight, slant and stretch of one font in a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub stretch: FontStretch,
}

impl FontStyle {
    pub fn new(weight: FontWeight, slant: FontSlant, stretch: FontStretch) -> Self {
        Self { weight, slant, stretch }
    }

    pub fn upright(weight: FontWeight, stretch: FontStretch) -> Self {
        Self::new(weight, FontSlant::Upright, stretch)
    }

    pub fn weight_number(&self) -> u16 {
        self.weight.number()
    }

    pub fn stretch_number(&self) -> u16 {
        self.stretch.number()
    }

    /// Style name within an extended family, e.g. "Bold Italic".
    pub fn style_name(&self) -> String {
        match self.slant {
            FontSlant::Upright => self.weight.name().to_string(),
            FontSlant::Italic if self.weight == FontWeight::Regular => "Italic".to_string(),
            FontSlant::Italic => format!("{} Italic", self.weight.name()),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_numbers() {
        assert_eq!(FontWeight::Thin.number(), 100);
        assert_eq!(FontWeight::Regular.number(), 400);
        assert_eq!(FontWeight::Bold.number(), 700);
        assert_eq!(FontWeight::Heavy.number(), 900);
    }

    #[test]
    fn stretch_numbers() {
        assert_eq!(FontStretch::Condensed.number(), 200);
        assert_eq!(FontStretch::Normal.number(), 300);
        assert_eq!(FontStretch::Expanded.number(), 400);
    }

    #[test]
    fn style_names() {
        let bold = FontStyle::upright(FontWeight::Bold, FontStretch::Normal);
        assert_eq!(bold.style_name(), "Bold");
        let italic = FontStyle::new(FontWeight::Regular, FontSlant::Italic, FontStretch::Normal);
        assert_eq!(italic.style_name(), "Italic");
    }
}
