//! Punctuation and the space

use super::{VekosGenerator, DESCENT, MEAN, OVERSHOOT};
use crate::families::band;
use crate::font::{Bearings, Glyph};
use crate::geometry::{handle, pt};
use crate::part::Part;
use anyhow::Result;

impl VekosGenerator {
    fn dot_width(&self) -> f64 {
        self.memo.metric("dot_width", || {
            let weight_const = self.config.weight_const;
            (weight_const * 150.0).min(weight_const * 100.0 + 30.0)
        })
    }

    fn dot_gap(&self) -> f64 {
        self.memo.metric("dot_gap", || self.bowl_width() * 0.09)
    }

    /// A dot resting on the baseline, origin at its bottom left.
    pub fn part_dot(&self) -> Result<Part> {
        self.memo.part("dot", || {
            let radius = self.dot_width() / 2.0;
            Ok(Part::circle(pt(0.0, 0.0), radius).move_origin((-radius, radius - OVERSHOOT)))
        })
    }

    /// A dot whose origin is its left middle, for placing at a height.
    fn part_floating_dot(&self) -> Result<Part> {
        self.memo.part("floating_dot", || {
            let radius = self.dot_width() / 2.0;
            Ok(Part::circle(pt(0.0, 0.0), radius).move_origin((-radius, 0.0)))
        })
    }

    pub(super) fn glyph_tadek(&self) -> Result<Glyph> {
        self.finish([self.part_dot()?])
    }

    pub(super) fn glyph_dek(&self) -> Result<Glyph> {
        let dot = self.part_dot()?;
        let step = self.dot_width() + self.dot_gap();
        self.finish([dot.clone(), dot.translate((step, 0.0))])
    }

    pub(super) fn glyph_kaltak(&self) -> Result<Glyph> {
        let bearings = Bearings::symmetric(self.bearing() * 1.8);
        self.finish_with(
            [self.part_dot()?, self.part_floating_dot()?.translate((0.0, -MEAN * 0.7))],
            bearings,
        )
    }

    pub(super) fn glyph_middot(&self) -> Result<Glyph> {
        self.finish([self.part_floating_dot()?.translate((0.0, -MEAN / 2.0))])
    }

    // Badek
    fn badek_gap(&self) -> f64 {
        self.memo.metric("badek_gap", || (MEAN + DESCENT) * 0.13)
    }

    fn badek_stem_height(&self) -> f64 {
        self.memo.metric("badek_stem_height", || {
            MEAN + DESCENT - self.dot_width() - self.badek_gap() + OVERSHOOT
        })
    }

    /// Straight stem of the exclamation mark, origin at its bottom left.
    fn part_badek_stem(&self) -> Result<Part> {
        self.memo.part("badek_stem", || {
            let segment = Part::line_by((0.0, self.badek_stem_height()));
            let cut = self.part_cut()?;
            Part::seq([cut.clone(), segment.clone().reverse(), cut.reverse(), segment])
        })
    }

    /// A pair of dots on the baseline with a stem standing on the first.
    fn punctuation_with_stem(&self, stem: Part) -> Result<Glyph> {
        let dot = self.part_dot()?;
        let step = self.dot_width() + self.dot_gap();
        let offset = (
            self.dot_width() / 2.0 - self.hor_thickness() / 2.0,
            -self.dot_width() - self.badek_gap() + OVERSHOOT,
        );
        let bearings = Bearings { left: self.bearing() * 1.8, right: self.bearing() };
        self.finish_with([dot.clone(), dot.translate((step, 0.0)), stem.translate(offset)], bearings)
    }

    pub(super) fn glyph_badek(&self) -> Result<Glyph> {
        self.punctuation_with_stem(self.part_badek_stem()?)
    }

    // Padek
    fn padek_bend(&self) -> f64 {
        self.memo.metric("padek_bend", || {
            (self.dot_width() + self.dot_gap()).min(self.bowl_width() * 0.3)
        })
    }

    /// Left edge of the question mark's stem, top to bottom.
    fn part_left_padek_curve(&self) -> Result<Part> {
        self.memo.part("left_padek_curve", || {
            let bend = self.padek_bend();
            let height = self.badek_stem_height();
            let bottom_handle = height * 0.55;
            let top_handle = self.thickness().tail_handle(bottom_handle, bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(-bend, height)))
        })
    }

    /// Right edge of the question mark's stem, top to bottom.
    fn part_right_padek_curve(&self) -> Result<Part> {
        self.memo.part("right_padek_curve", || {
            let bend = self.padek_bend();
            let height = self.badek_stem_height();
            let top_handle = height * 0.55;
            let bottom_handle = self.thickness().tail_handle(top_handle, bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(-bend, height)))
        })
    }

    /// Curved stem of the question mark, origin at its bottom left.
    fn part_padek_stem(&self) -> Result<Part> {
        self.memo.part("padek_stem", || {
            let cut = self.part_cut()?;
            Part::seq([
                cut.clone(),
                self.part_right_padek_curve()?.reverse(),
                cut.reverse(),
                self.part_left_padek_curve()?,
            ])
        })
    }

    pub(super) fn glyph_padek(&self) -> Result<Glyph> {
        self.punctuation_with_stem(self.part_padek_stem()?)
    }

    // Nok
    fn part_nok(&self) -> Result<Part> {
        self.memo.part("nok", || {
            let height = (MEAN + DESCENT) * 0.3;
            band(&Part::line_by((0.0, height)), &self.part_cut()?)
        })
    }

    pub(super) fn glyph_nok(&self) -> Result<Glyph> {
        self.finish([self.part_nok()?.translate((0.0, -MEAN - DESCENT))])
    }

    // Dikak
    fn dikak_bend(&self) -> f64 {
        self.memo.metric("dikak_bend", || self.bowl_width() * 0.15)
    }

    fn part_dikak(&self) -> Result<Part> {
        self.memo.part("dikak", || {
            let height = (MEAN + DESCENT) * 0.3;
            let stem = Part::bezier(pt(0.0, 0.0), None, handle(0.0, -height * 0.6), pt(-self.dikak_bend(), height));
            let cut = self.part_cut()?;
            Part::seq([stem.clone(), cut.clone(), stem.reverse(), cut.reverse()])
        })
    }

    pub(super) fn glyph_dikak(&self) -> Result<Glyph> {
        let bearings = Bearings { left: self.bearing(), right: -self.bearing() * 0.5 };
        self.finish_with([self.part_dikak()?.translate((self.dikak_bend(), -MEAN - DESCENT))], bearings)
    }

    /// Horizontal bar of `width`, origin at its top left.
    fn part_bar(&self, width: f64) -> Result<Part> {
        band(&self.part_vertical_cut()?, &Part::line_by((width, 0.0)))
    }

    pub(super) fn glyph_fek(&self) -> Result<Glyph> {
        let bar = self.part_bar(self.bowl_width() * 0.6)?;
        self.finish([bar.translate((0.0, -MEAN / 2.0 - self.ver_thickness() / 2.0))])
    }

    pub(super) fn glyph_fohak(&self) -> Result<Glyph> {
        let bar = self.part_bar(self.bowl_width() * 1.5)?;
        self.finish([bar.translate((0.0, -self.ver_thickness()))])
    }

    pub(super) fn glyph_dash(&self) -> Result<Glyph> {
        let bar = self.part_bar(self.bowl_width() * 2.0)?;
        self.finish([bar.translate((0.0, -MEAN / 2.0 - self.ver_thickness() / 2.0))])
    }

    // Rakut
    fn rakut_width(&self) -> f64 {
        self.memo.metric("rakut_width", || self.bowl_width() * 0.55)
    }

    /// Opening bracket: a stem with a bar across its top, origin at the top left.
    fn part_opening_rakut(&self) -> Result<Part> {
        self.memo.part("opening_rakut", || {
            let height = (MEAN + DESCENT) * 0.6;
            let vertical = band(&Part::line_by((0.0, height)), &self.part_cut()?)?;
            let horizontal = self.part_bar(self.rakut_width())?;
            Part::union([vertical, horizontal])
        })
    }

    pub(super) fn glyph_opening_rakut(&self) -> Result<Glyph> {
        self.finish([self.part_opening_rakut()?.translate((0.0, -MEAN - DESCENT))])
    }

    pub(super) fn glyph_closing_rakut(&self) -> Result<Glyph> {
        let part = self.part_opening_rakut()?.reflect_hor().reverse();
        self.finish([part.translate((self.rakut_width(), -MEAN - DESCENT))])
    }

    pub(super) fn glyph_space(&self) -> Result<Glyph> {
        let bearings = Bearings { left: self.bowl_width() * 0.55, right: 0.0 };
        self.finish_with([Part::empty()], bearings)
    }
}
