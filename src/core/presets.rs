//! Named font presets
//!
//! Short ids select one style of one family on the command line and in the
//! settings file, e.g. `vkcb` for Vekos Condensed Bold.

use crate::families::kaleg::{self, EdgeJoin};
use crate::families::vekos;
use crate::font::{Font, FontStretch, FontStyle, FontWeight};

/// Family-specific parameters of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Vekos { high_contrast: bool },
    Kaleg { edge_join: EdgeJoin, beaked: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub weight: FontWeight,
    pub stretch: FontStretch,
    pub kind: PresetKind,
}

impl Preset {
    const fn vekos(id: &'static str, weight: FontWeight, stretch: FontStretch, high_contrast: bool) -> Self {
        Self { id, weight, stretch, kind: PresetKind::Vekos { high_contrast } }
    }

    const fn kaleg(id: &'static str, weight: FontWeight, edge_join: EdgeJoin, beaked: bool) -> Self {
        Self { id, weight, stretch: FontStretch::Normal, kind: PresetKind::Kaleg { edge_join, beaked } }
    }

    pub fn style(&self) -> FontStyle {
        FontStyle::upright(self.weight, self.stretch)
    }

    /// Build the font this preset names.
    pub fn create(&self) -> Font {
        match self.kind {
            PresetKind::Vekos { high_contrast } => vekos::create_font(self.style(), high_contrast),
            PresetKind::Kaleg { edge_join, beaked } => kaleg::create_font(self.style(), edge_join, beaked),
        }
    }
}

use EdgeJoin::{Bevel, Miter, Round};
use FontStretch::{Condensed, Expanded, Normal};
use FontWeight::{Bold, Regular, Thin};

const PRESETS: &[Preset] = &[
    Preset::vekos("vkr", Regular, Normal, false),
    Preset::vekos("vkb", Bold, Normal, false),
    Preset::vekos("vkt", Thin, Normal, false),
    Preset::vekos("vkcr", Regular, Condensed, false),
    Preset::vekos("vkcb", Bold, Condensed, false),
    Preset::vekos("vkct", Thin, Condensed, false),
    Preset::vekos("vker", Regular, Expanded, false),
    Preset::vekos("vkeb", Bold, Expanded, false),
    Preset::vekos("vket", Thin, Expanded, false),
    Preset::vekos("vkhr", Regular, Normal, true),
    Preset::vekos("vkhb", Bold, Normal, true),
    Preset::kaleg("klm", Regular, Miter, false),
    Preset::kaleg("klb", Regular, Bevel, false),
    Preset::kaleg("klr", Regular, Round, false),
    Preset::kaleg("klmb", Regular, Miter, true),
    Preset::kaleg("klbb", Regular, Bevel, true),
    Preset::kaleg("klrb", Regular, Round, true),
    Preset::kaleg("klbm", Bold, Miter, false),
];

/// Every preset in table order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

pub fn by_id(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

pub fn ids() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.id).collect()
}
