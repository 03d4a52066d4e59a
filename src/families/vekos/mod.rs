//! Vekos: a rounded constructed script
//!
//! Nearly every letter is a bowl, a narrow bowl or a bowl with a beak,
//! combined with tails, legs and a "transphone" tick that marks the voiced
//! partner of a consonant. Vowels carry acute, grave and circumflex marks.

mod consonants;
mod numerals;
mod punctuation;
mod vowels;

use crate::font::{Bearings, Font, FontInfo, FontStyle, Glyph, Metrics};
use crate::geometry::{handle, pt};
use crate::generator::{build_glyph, Generator, Memo, Registry};
use crate::part::Part;
use crate::stroke::ThicknessModel;
use anyhow::Result;
use std::sync::Arc;

pub const FAMILY_NAME: &str = "Vekos";

const DESCENT: f64 = 250.0;
const MEAN: f64 = 500.0;
const EXTRA_DESCENT: f64 = 40.0;
const EXTRA_ASCENT: f64 = 10.0;
const OVERSHOOT: f64 = 10.0;

/// Style parameters of one Vekos font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VekosConfig {
    pub weight_const: f64,
    pub stretch_const: f64,
    pub contrast_ratio: f64,
}

impl VekosConfig {
    /// Derive the config from a style; `high_contrast` thins horizontals.
    pub fn from_style(style: &FontStyle, high_contrast: bool) -> Self {
        let weight = f64::from(style.weight_number());
        let stretch = f64::from(style.stretch_number());
        let weight_const = (weight * 0.5 + 100.0) / 300.0;
        let stretch_const = if stretch < 300.0 {
            (stretch * 0.15 + 55.0) / 100.0
        } else {
            (stretch * 0.25 + 25.0) / 100.0
        };
        let contrast_ratio = if high_contrast { 0.2 } else { 0.75 };
        Self { weight_const, stretch_const, contrast_ratio }
    }
}

/// Build a Vekos font for `style`.
pub fn create_font(style: FontStyle, high_contrast: bool) -> Font {
    let generator = VekosGenerator::new(VekosConfig::from_style(&style, high_contrast));
    let info = FontInfo::new("Copyright 2019 Ziphil", "1.2.0");
    Font::new(FAMILY_NAME, style, info, Arc::new(generator))
}

#[derive(Debug)]
pub struct VekosGenerator {
    config: VekosConfig,
    memo: Memo,
    registry: Registry<VekosGenerator>,
}

impl VekosGenerator {
    pub fn new(config: VekosConfig) -> Self {
        let mut registry = Registry::new();
        registry
            .register(&['l', 'L'], Self::glyph_les)
            .register(&['r', 'R'], Self::glyph_res)
            .register(&['p', 'P'], Self::glyph_pal)
            .register(&['b', 'B'], Self::glyph_bol)
            .register(&['c', 'C'], Self::glyph_cal)
            .register(&['q', 'Q'], Self::glyph_qol)
            .register(&['k', 'K'], Self::glyph_kal)
            .register(&['g', 'G'], Self::glyph_gol)
            .register(&['y', 'Y'], Self::glyph_yes)
            .register(&['h', 'H'], Self::glyph_hes)
            .register(&['s', 'S'], Self::glyph_sal)
            .register(&['z', 'Z'], Self::glyph_zol)
            .register(&['t', 'T'], Self::glyph_tal)
            .register(&['d', 'D'], Self::glyph_dol)
            .register(&['f', 'F'], Self::glyph_fal)
            .register(&['v', 'V'], Self::glyph_vol)
            .register(&['x', 'X'], Self::glyph_xal)
            .register(&['j', 'J'], Self::glyph_jol)
            .register(&['n', 'N'], Self::glyph_nes)
            .register(&['m', 'M'], Self::glyph_mes)
            .register(&['a', 'A'], Self::glyph_at)
            .register(&['á', 'Á'], Self::glyph_at_acute)
            .register(&['à', 'À'], Self::glyph_at_grave)
            .register(&['â', 'Â'], Self::glyph_at_circumflex)
            .register(&['i', 'I'], Self::glyph_it)
            .register(&['í', 'Í'], Self::glyph_it_acute)
            .register(&['ì', 'Ì'], Self::glyph_it_grave)
            .register(&['î', 'Î'], Self::glyph_it_circumflex)
            .register(&['e', 'E'], Self::glyph_et)
            .register(&['é', 'É'], Self::glyph_et_acute)
            .register(&['è', 'È'], Self::glyph_et_grave)
            .register(&['ê', 'Ê'], Self::glyph_et_circumflex)
            .register(&['u', 'U'], Self::glyph_ut)
            .register(&['ú', 'Ú'], Self::glyph_ut_acute)
            .register(&['ù', 'Ù'], Self::glyph_ut_grave)
            .register(&['û', 'Û'], Self::glyph_ut_circumflex)
            .register(&['o', 'O'], Self::glyph_ot)
            .register(&['ó', 'Ó'], Self::glyph_ot_acute)
            .register(&['ò', 'Ò'], Self::glyph_ot_grave)
            .register(&['ô', 'Ô'], Self::glyph_ot_circumflex)
            .register(&['6'], Self::glyph_rac)
            .register(&['4'], Self::glyph_pav)
            .register(&['2'], Self::glyph_qic)
            .register(&['8'], Self::glyph_keq)
            .register(&['0'], Self::glyph_nuf)
            .register(&['5'], Self::glyph_xef)
            .register(&['1'], Self::glyph_tas)
            .register(&['9'], Self::glyph_vun)
            .register(&['3'], Self::glyph_yus)
            .register(&['7'], Self::glyph_siz)
            .register(&[','], Self::glyph_tadek)
            .register(&['.'], Self::glyph_dek)
            .register(&[':'], Self::glyph_kaltak)
            .register(&['·'], Self::glyph_middot)
            .register(&['!'], Self::glyph_badek)
            .register(&['?'], Self::glyph_padek)
            .register(&['\''], Self::glyph_nok)
            .register(&['ʻ'], Self::glyph_dikak)
            .register(&['-'], Self::glyph_fek)
            .register(&['…'], Self::glyph_fohak)
            .register(&['—'], Self::glyph_dash)
            .register(&['[', '«'], Self::glyph_opening_rakut)
            .register(&[']', '»'], Self::glyph_closing_rakut)
            .register(&[' '], Self::glyph_space);
        Self { config, memo: Memo::new(), registry }
    }

    pub fn config(&self) -> &VekosConfig {
        &self.config
    }

    pub(crate) fn memo(&self) -> &Memo {
        &self.memo
    }

    fn vekos_metrics(&self) -> Metrics {
        Metrics::from_design(MEAN, DESCENT, EXTRA_ASCENT, EXTRA_DESCENT)
    }

    fn bearing(&self) -> f64 {
        self.memo.metric("bearing", || self.bowl_width() * 0.09)
    }

    fn bearings(&self) -> Bearings {
        Bearings::symmetric(self.bearing())
    }

    pub fn hor_thickness(&self) -> f64 {
        self.memo.metric("hor_thickness", || self.config.weight_const * 100.0)
    }

    pub fn ver_thickness(&self) -> f64 {
        self.memo.metric("ver_thickness", || self.hor_thickness() * self.config.contrast_ratio)
    }

    pub fn bowl_width(&self) -> f64 {
        self.memo.metric("bowl_width", || {
            (self.config.weight_const * 80.0 + 370.0) * self.config.stretch_const
        })
    }

    fn thickness(&self) -> ThicknessModel {
        ThicknessModel::new(self.hor_thickness(), self.config.contrast_ratio)
    }

    /// Union `parts` into one outline with the default bearings.
    fn finish(&self, parts: impl IntoIterator<Item = Part>) -> Result<Glyph> {
        self.finish_with(parts, self.bearings())
    }

    fn finish_with(&self, parts: impl IntoIterator<Item = Part>, bearings: Bearings) -> Result<Glyph> {
        let outline = Part::union(parts)?;
        Ok(Glyph::by_bearings(outline, self.vekos_metrics(), bearings))
    }
}

/// Quarter curve from the left end of a round stroke up to its top.
///
/// The left handle rises by `height * handle_ratio`; the top handle spans
/// the whole width.
fn quarter(width: f64, height: f64, handle_ratio: f64) -> Part {
    Part::bezier(
        pt(0.0, 0.0),
        handle(0.0, -height * handle_ratio),
        handle(-width, 0.0),
        pt(width, -height),
    )
}

impl Generator for VekosGenerator {
    fn chars(&self) -> Vec<char> {
        self.registry.chars()
    }

    fn glyph(&self, character: char) -> Result<Option<Glyph>> {
        build_glyph(self, &self.registry, FAMILY_NAME, character)
    }

    fn metrics(&self) -> Metrics {
        self.vekos_metrics()
    }
}

#[cfg(test)]
mod tests;
