//! Vowels and their diacritics

use super::{quarter, VekosGenerator, DESCENT, MEAN};
use crate::families::ring_from_quarters;
use crate::font::Glyph;
use crate::geometry::{handle, pt};
use crate::part::Part;
use anyhow::Result;

const ACUTE_HEIGHT: f64 = DESCENT * 0.55;
const CIRCUMFLEX_HEIGHT: f64 = DESCENT * 0.75;
const DIACRITIC_GAP: f64 = DESCENT * 0.25;

/// Where a diacritic goes relative to its base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Acute,
    Grave,
    Circumflex,
}

impl VekosGenerator {
    fn diacritic_hor_thickness(&self) -> f64 {
        self.memo.metric("diacritic_hor_thickness", || {
            let weight_const = self.config.weight_const;
            (weight_const * 90.0).min(weight_const * 40.0 + 35.0)
        })
    }

    fn diacritic_ver_thickness(&self) -> f64 {
        self.memo.metric("diacritic_ver_thickness", || {
            self.diacritic_hor_thickness() * self.config.contrast_ratio
        })
    }

    fn acute_width(&self) -> f64 {
        self.memo.metric("acute_width", || self.bowl_width() * 0.6)
    }

    fn circumflex_width(&self) -> f64 {
        self.memo.metric("circumflex_width", || self.bowl_width() * 0.5)
    }

    fn it_tail_bend(&self) -> f64 {
        self.memo.metric("it_tail_bend", || self.bowl_width() * 0.6)
    }

    fn link_width(&self) -> f64 {
        self.memo.metric("link_width", || self.bowl_width() * 0.8)
    }

    fn ut_tail_bend(&self) -> f64 {
        self.memo.metric("ut_tail_bend", || self.bowl_width() * 0.45)
    }

    /// Thinning of the u descender where it meets the link.
    fn link_upper_correction(&self) -> f64 {
        self.memo.metric("link_upper_correction", || self.ver_thickness() * 0.1)
    }

    /// Thinning of the link where the u descender overlaps it.
    fn link_lower_correction(&self) -> f64 {
        self.memo.metric("link_lower_correction", || self.ver_thickness() * 0.1)
    }

    fn part_outer_acute(&self) -> Result<Part> {
        self.memo.part("outer_acute", || Ok(quarter(self.acute_width() / 2.0, ACUTE_HEIGHT, 0.1)))
    }

    fn part_inner_acute(&self) -> Result<Part> {
        self.memo.part("inner_acute", || {
            let width = self.acute_width() / 2.0 - self.diacritic_hor_thickness();
            let height = ACUTE_HEIGHT - self.diacritic_ver_thickness();
            Ok(quarter(width, height, 0.1))
        })
    }

    fn part_acute_cut(&self) -> Result<Part> {
        self.memo.part("acute_cut", || Ok(Part::line_by((self.diacritic_hor_thickness(), 0.0))))
    }

    /// The acute arch, origin at its bottom centre.
    pub fn part_acute(&self) -> Result<Part> {
        self.memo.part("acute", || {
            let cut = self.part_acute_cut()?;
            let inner = self.part_inner_acute()?;
            let outer = self.part_outer_acute()?;
            let part = Part::seq([
                cut.clone(),
                inner.clone(),
                inner.reflect_hor().reverse(),
                cut,
                outer.clone().reflect_hor(),
                outer.reverse(),
            ])?;
            Ok(part.move_origin((self.acute_width() / 2.0, 0.0)))
        })
    }

    /// The circumflex ring, origin at its bottom centre.
    pub fn part_circumflex(&self) -> Result<Part> {
        self.memo.part("circumflex", || {
            let thickness = self.diacritic_hor_thickness();
            let width = self.circumflex_width() / 2.0;
            let height = CIRCUMFLEX_HEIGHT / 2.0;
            let outer = quarter(width, height, 0.1);
            let inner = quarter(width - thickness, height - self.diacritic_ver_thickness(), 0.1);
            let ring = ring_from_quarters(&outer, &outer, &inner, thickness)?;
            Ok(ring.move_origin((self.circumflex_width() / 2.0, CIRCUMFLEX_HEIGHT / 2.0)))
        })
    }

    /// A diacritic placed above the x-height, centred on the bowl.
    fn mark_above(&self, mark: Mark) -> Result<Part> {
        let x = self.bowl_width() / 2.0;
        Ok(match mark {
            Mark::Acute => self.part_acute()?.translate((x, -MEAN - DIACRITIC_GAP)),
            Mark::Grave => self
                .part_acute()?
                .reflect_ver()
                .reverse()
                .translate((x, -MEAN - ACUTE_HEIGHT - DIACRITIC_GAP)),
            Mark::Circumflex => self.part_circumflex()?.translate((x, -MEAN - DIACRITIC_GAP)),
        })
    }

    /// A diacritic placed below the baseline, under the beak of a turned
    /// letter. The acute and grave swap shapes so they read the same way
    /// round as on upright letters.
    fn mark_below(&self, mark: Mark) -> Result<Part> {
        let x = self.tal_beak_width();
        Ok(match mark {
            Mark::Acute => self.part_acute()?.reflect_ver().reverse().translate((x, DIACRITIC_GAP)),
            Mark::Grave => self.part_acute()?.translate((x, ACUTE_HEIGHT + DIACRITIC_GAP)),
            Mark::Circumflex => self.part_circumflex()?.translate((x, CIRCUMFLEX_HEIGHT + DIACRITIC_GAP)),
        })
    }

    pub(super) fn glyph_at(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_bowl()?, self.bowl_width())])
    }

    fn at_with(&self, mark: Mark) -> Result<Glyph> {
        self.finish([self.centered(self.part_bowl()?, self.bowl_width()), self.mark_above(mark)?])
    }

    pub(super) fn glyph_at_acute(&self) -> Result<Glyph> {
        self.at_with(Mark::Acute)
    }

    pub(super) fn glyph_at_grave(&self) -> Result<Glyph> {
        self.at_with(Mark::Grave)
    }

    pub(super) fn glyph_at_circumflex(&self) -> Result<Glyph> {
        self.at_with(Mark::Circumflex)
    }

    /// Outer edge of the i descender, top to bottom.
    fn part_left_it_tail(&self) -> Result<Part> {
        self.memo.part("left_it_tail", || {
            let bend = self.it_tail_bend() - self.hor_thickness() / 2.0;
            let height = MEAN / 2.0 + DESCENT;
            let top_handle = DESCENT * 1.2;
            let bottom_handle = self.thickness().tail_handle(top_handle, bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(bend, height)))
        })
    }

    /// Inner edge of the i descender, top to bottom.
    fn part_right_it_tail(&self) -> Result<Part> {
        self.memo.part("right_it_tail", || {
            let bend = self.it_tail_bend() - self.hor_thickness() / 2.0;
            let height = MEAN / 2.0 + DESCENT;
            let bottom_handle = DESCENT * 1.2;
            let top_handle = self.thickness().tail_handle(bottom_handle, bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(bend, height)))
        })
    }

    /// The i shape, origin at the centre of its upper round part.
    pub fn part_it(&self) -> Result<Part> {
        self.memo.part("it", || {
            let cut = self.part_cut()?;
            let part = Part::seq([
                self.part_left_it_tail()?,
                cut.clone(),
                self.part_right_it_tail()?.reverse(),
                self.part_inner_bowl()?,
                self.part_inner_tal_beak()?.reverse(),
                cut,
                self.part_outer_tal_beak()?,
                self.part_outer_bowl()?.reverse(),
            ])?;
            Ok(part.move_origin((self.tal_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_it(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_it()?, self.tal_width())])
    }

    fn it_with(&self, mark: Mark) -> Result<Glyph> {
        self.finish([self.centered(self.part_it()?, self.tal_width()), self.mark_above(mark)?])
    }

    pub(super) fn glyph_it_acute(&self) -> Result<Glyph> {
        self.it_with(Mark::Acute)
    }

    pub(super) fn glyph_it_grave(&self) -> Result<Glyph> {
        self.it_with(Mark::Grave)
    }

    pub(super) fn glyph_it_circumflex(&self) -> Result<Glyph> {
        self.it_with(Mark::Circumflex)
    }

    pub(super) fn glyph_et(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_it()?.rotate_half_turn(), self.tal_width())])
    }

    fn et_with(&self, mark: Mark) -> Result<Glyph> {
        self.finish([
            self.centered(self.part_it()?.rotate_half_turn(), self.tal_width()),
            self.mark_below(mark)?,
        ])
    }

    pub(super) fn glyph_et_acute(&self) -> Result<Glyph> {
        self.et_with(Mark::Acute)
    }

    pub(super) fn glyph_et_grave(&self) -> Result<Glyph> {
        self.et_with(Mark::Grave)
    }

    pub(super) fn glyph_et_circumflex(&self) -> Result<Glyph> {
        self.et_with(Mark::Circumflex)
    }

    /// Outer edge of the stroke linking the u bowl to its descender.
    fn part_outer_link(&self) -> Result<Part> {
        self.memo.part("outer_link", || {
            let width = self.link_width();
            let height = MEAN / 2.0 - self.link_lower_correction();
            let left_handle = height * 0.02;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), handle(-width, 0.0), pt(width, height)))
        })
    }

    fn part_inner_link(&self) -> Result<Part> {
        self.memo.part("inner_link", || {
            let width = self.link_width() - self.hor_thickness();
            let height = MEAN / 2.0 - self.ver_thickness();
            let left_handle = height * 0.02;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), handle(-width, 0.0), pt(width, height)))
        })
    }

    fn left_ut_tail_size(&self) -> (f64, f64) {
        let bend = self.ut_tail_bend() + self.hor_thickness() / 2.0;
        let height = DESCENT + self.ver_thickness() - self.link_upper_correction();
        (bend, height)
    }

    /// Outer edge of the u descender, bottom to top.
    fn part_left_ut_tail(&self) -> Result<Part> {
        self.memo.part("left_ut_tail", || {
            let (bend, height) = self.left_ut_tail_size();
            let left_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -left_handle), handle(-bend, 0.0), pt(bend, -height)))
        })
    }

    /// Inner edge of the u descender, bottom to top.
    fn part_right_ut_tail(&self) -> Result<Part> {
        self.memo.part("right_ut_tail", || {
            let bend = self.ut_tail_bend() - self.hor_thickness() / 2.0;
            let height = DESCENT;
            let left_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -left_handle), handle(-bend, 0.0), pt(bend, -height)))
        })
    }

    /// Part of u above the baseline, thinned at the bottom where the
    /// descender overlaps it. Origin at the bowl centre.
    fn part_upper_ut(&self) -> Result<Part> {
        self.memo.part("upper_ut", || {
            let part = Part::seq([
                self.part_outer_link()?,
                Part::line_by((0.0, -self.ver_thickness() + self.link_lower_correction())),
                self.part_inner_link()?.reverse(),
                self.part_inner_bowl()?,
                self.part_inner_tal_beak()?.reverse(),
                self.part_cut()?,
                self.part_outer_tal_beak()?,
                self.part_outer_bowl()?.reverse(),
            ])?;
            Ok(part.move_origin((self.tal_width() / 2.0, 0.0)))
        })
    }

    /// The u descender, thinned at the top. Origin at the top right corner.
    fn part_ut_tail(&self) -> Result<Part> {
        self.memo.part("ut_tail", || {
            let part = Part::seq([
                self.part_left_ut_tail()?.reverse(),
                self.part_cut()?,
                self.part_right_ut_tail()?,
                Part::line_by((0.0, -self.ver_thickness() + self.link_upper_correction())),
            ])?;
            let (bend, height) = self.left_ut_tail_size();
            Ok(part.move_origin((bend, -height)))
        })
    }

    /// The u shape, origin at the bowl centre.
    pub fn part_ut(&self) -> Result<Part> {
        self.memo.part("ut", || {
            let offset = (
                -self.tal_width() / 2.0 + self.link_width(),
                MEAN / 2.0 - self.ver_thickness() + self.link_upper_correction(),
            );
            Part::union([self.part_upper_ut()?, self.part_ut_tail()?.translate(offset)])
        })
    }

    pub(super) fn glyph_ut(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_ut()?, self.tal_width())])
    }

    fn ut_with(&self, mark: Mark) -> Result<Glyph> {
        self.finish([self.centered(self.part_ut()?, self.tal_width()), self.mark_above(mark)?])
    }

    pub(super) fn glyph_ut_acute(&self) -> Result<Glyph> {
        self.ut_with(Mark::Acute)
    }

    pub(super) fn glyph_ut_grave(&self) -> Result<Glyph> {
        self.ut_with(Mark::Grave)
    }

    pub(super) fn glyph_ut_circumflex(&self) -> Result<Glyph> {
        self.ut_with(Mark::Circumflex)
    }

    pub(super) fn glyph_ot(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_ut()?.rotate_half_turn(), self.tal_width())])
    }

    fn ot_with(&self, mark: Mark) -> Result<Glyph> {
        self.finish([
            self.centered(self.part_ut()?.rotate_half_turn(), self.tal_width()),
            self.mark_below(mark)?,
        ])
    }

    pub(super) fn glyph_ot_acute(&self) -> Result<Glyph> {
        self.ot_with(Mark::Acute)
    }

    pub(super) fn glyph_ot_grave(&self) -> Result<Glyph> {
        self.ot_with(Mark::Grave)
    }

    pub(super) fn glyph_ot_circumflex(&self) -> Result<Glyph> {
        self.ot_with(Mark::Circumflex)
    }
}
