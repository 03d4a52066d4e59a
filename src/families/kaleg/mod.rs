//! Kaleg: a squared constructed script
//!
//! Letters are built from a few open frames (a cup, a side bracket and an
//! ell) whose outer corners follow the configured [`EdgeJoin`], a squarish
//! bowl, and plain stems and bars. The beaked variants add small flags at
//! stem ends and curl the descenders.

mod frames;
mod letters;
mod punctuation;

use crate::font::{Bearings, Font, FontInfo, FontStyle, Glyph, Metrics};
use crate::generator::{build_glyph, Generator, Memo, Registry};
use crate::part::Part;
use crate::stroke::ThicknessModel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const FAMILY_NAME: &str = "Kaleg";

const DESCENT: f64 = 250.0;
const MEAN: f64 = 500.0;
const EXTRA_DESCENT: f64 = 40.0;
const EXTRA_ASCENT: f64 = 10.0;
const OVERSHOOT: f64 = 10.0;

/// Height of ascending strokes above the baseline.
const ASCENDER: f64 = MEAN + DESCENT;

/// Shape of the outer corner where a stem turns into a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeJoin {
    Miter,
    Bevel,
    Round,
}

impl EdgeJoin {
    pub fn name(self) -> &'static str {
        match self {
            EdgeJoin::Miter => "Miter",
            EdgeJoin::Bevel => "Bevel",
            EdgeJoin::Round => "Round",
        }
    }
}

impl fmt::Display for EdgeJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style parameters of one Kaleg font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalegConfig {
    pub weight_const: f64,
    pub contrast_ratio: f64,
    /// Size of the corner treatment relative to the stem thickness.
    pub edge_ratio: f64,
    pub edge_contrast_ratio: f64,
    /// Handle length of bowl curves relative to their extent.
    pub bowl_ratio: f64,
    pub beak_ratio: f64,
    pub leg_ratio: f64,
    pub tail_ratio: f64,
    pub edge_join: EdgeJoin,
}

impl KalegConfig {
    pub fn from_style(style: &FontStyle, edge_join: EdgeJoin, beaked: bool) -> Self {
        let weight = f64::from(style.weight_number());
        let contrast_ratio = 0.75;
        Self {
            weight_const: (weight * 0.45 + 100.0) / 300.0,
            contrast_ratio,
            edge_ratio: contrast_ratio,
            edge_contrast_ratio: 1.0,
            bowl_ratio: 0.8,
            beak_ratio: if beaked { 0.2 } else { 0.0 },
            leg_ratio: 0.0,
            tail_ratio: if beaked { 0.3 } else { 0.0 },
            edge_join,
        }
    }
}

/// "Kaleg Miter", "Kaleg Round Beaked", ...
pub fn family_name(edge_join: EdgeJoin, beaked: bool) -> String {
    let mut name = format!("{FAMILY_NAME} {edge_join}");
    if beaked {
        name.push_str(" Beaked");
    }
    name
}

/// Build a Kaleg font. Kaleg is always upright.
pub fn create_font(style: FontStyle, edge_join: EdgeJoin, beaked: bool) -> Font {
    let style = FontStyle::upright(style.weight, style.stretch);
    let generator = KalegGenerator::new(KalegConfig::from_style(&style, edge_join, beaked));
    let info = FontInfo::new("Ziphil", "1.0.0");
    Font::new(family_name(edge_join, beaked), style, info, Arc::new(generator))
}

#[derive(Debug)]
pub struct KalegGenerator {
    config: KalegConfig,
    memo: Memo,
    registry: Registry<KalegGenerator>,
}

impl KalegGenerator {
    pub fn new(config: KalegConfig) -> Self {
        let mut registry = Registry::new();
        registry
            .register(&['o', 'O'], Self::glyph_o)
            .register(&['u', 'U'], Self::glyph_u)
            .register(&['n', 'N'], Self::glyph_n)
            .register(&['c', 'C'], Self::glyph_c)
            .register(&['z', 'Z'], Self::glyph_z)
            .register(&['e', 'E'], Self::glyph_e)
            .register(&['v', 'V'], Self::glyph_v)
            .register(&['r', 'R'], Self::glyph_r)
            .register(&['y', 'Y'], Self::glyph_y)
            .register(&['f', 'F'], Self::glyph_f)
            .register(&['l', 'L'], Self::glyph_l)
            .register(&['i', 'I'], Self::glyph_i)
            .register(&['j', 'J'], Self::glyph_j)
            .register(&['t', 'T'], Self::glyph_t)
            .register(&['h', 'H'], Self::glyph_h)
            .register(&['b', 'B'], Self::glyph_b)
            .register(&['d', 'D'], Self::glyph_d)
            .register(&['p', 'P'], Self::glyph_p)
            .register(&['q', 'Q'], Self::glyph_q)
            .register(&['m', 'M'], Self::glyph_m)
            .register(&['w', 'W'], Self::glyph_w)
            .register(&['a', 'A'], Self::glyph_a)
            .register(&['g', 'G'], Self::glyph_g)
            .register(&['s', 'S'], Self::glyph_s)
            .register(&['.'], Self::glyph_period)
            .register(&[','], Self::glyph_comma)
            .register(&['-'], Self::glyph_hyphen)
            .register(&[' '], Self::glyph_space);
        Self { config, memo: Memo::new(), registry }
    }

    pub fn config(&self) -> &KalegConfig {
        &self.config
    }

    pub(crate) fn memo(&self) -> &Memo {
        &self.memo
    }

    fn kaleg_metrics(&self) -> Metrics {
        Metrics::from_design(MEAN, DESCENT, EXTRA_ASCENT, EXTRA_DESCENT)
    }

    pub fn hor_thickness(&self) -> f64 {
        self.memo.metric("hor_thickness", || self.config.weight_const * 100.0)
    }

    pub fn ver_thickness(&self) -> f64 {
        self.memo.metric("ver_thickness", || self.hor_thickness() * self.config.contrast_ratio)
    }

    /// Width of the standard letter frame and bowl.
    pub fn frame_width(&self) -> f64 {
        self.memo.metric("frame_width", || self.config.weight_const * 60.0 + 380.0)
    }

    fn bearing(&self) -> f64 {
        self.memo.metric("bearing", || self.frame_width() * 0.08)
    }

    fn thickness(&self) -> ThicknessModel {
        ThicknessModel::new(self.hor_thickness(), self.config.contrast_ratio)
    }

    /// Thinning applied to a stroke on the side where it overlaps a bowl.
    fn join_correction(&self) -> f64 {
        self.memo.metric("join_correction", || self.hor_thickness() * 0.3)
    }

    fn finish(&self, parts: impl IntoIterator<Item = Part>) -> Result<Glyph> {
        self.finish_with(parts, Bearings::symmetric(self.bearing()))
    }

    fn finish_with(&self, parts: impl IntoIterator<Item = Part>, bearings: Bearings) -> Result<Glyph> {
        let outline = Part::union(parts)?;
        Ok(Glyph::by_bearings(outline, self.kaleg_metrics(), bearings))
    }
}

impl Generator for KalegGenerator {
    fn chars(&self) -> Vec<char> {
        self.registry.chars()
    }

    fn glyph(&self, character: char) -> Result<Option<Glyph>> {
        build_glyph(self, &self.registry, FAMILY_NAME, character)
    }

    fn metrics(&self) -> Metrics {
        self.kaleg_metrics()
    }
}

#[cfg(test)]
mod tests;
