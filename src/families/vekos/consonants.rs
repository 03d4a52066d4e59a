//! Consonants: bowls, tails, beaks and the transphone tick

use super::{quarter, VekosGenerator, DESCENT, MEAN, OVERSHOOT};
use crate::families::ring_from_quarters;
use crate::font::Glyph;
use crate::geometry::{handle, pt};
use crate::part::Part;
use anyhow::Result;

impl VekosGenerator {
    /// Move a part centred on its origin so it sits on the baseline with its
    /// left edge at `0`, vertically centred on the x-height.
    pub(super) fn centered(&self, part: Part, width: f64) -> Part {
        part.translate((width / 2.0, -MEAN / 2.0))
    }

    /// A base letter of `width` followed by the transphone tick.
    fn voiced(&self, base: Part, width: f64) -> Result<Glyph> {
        self.finish([
            self.centered(base, width),
            self.part_transphone()?.translate((width + self.transphone_gap(), -MEAN / 2.0)),
        ])
    }

    // Les tail
    fn les_tail_bend(&self) -> f64 {
        self.memo.metric("les_tail_bend", || self.bowl_width() * 0.6)
    }

    fn les_tail_correction(&self) -> f64 {
        self.memo.metric("les_tail_correction", || self.hor_thickness() * 0.3)
    }

    // Transphone
    const TRANSPHONE_THICKNESS_RATIO: f64 = 0.95;

    fn transphone_bend(&self) -> f64 {
        self.memo.metric("transphone_bend", || self.bowl_width() * 0.15)
    }

    fn transphone_gap(&self) -> f64 {
        self.memo.metric("transphone_gap", || self.bowl_width() * 0.18)
    }

    // Legs
    pub(super) fn yes_leg_bend(&self) -> f64 {
        self.memo.metric("yes_leg_bend", || self.bowl_width() * 0.15)
    }

    // Tal beak
    pub(super) fn tal_beak_width(&self) -> f64 {
        self.memo.metric("tal_beak_width", || self.bowl_width() / 2.0 * 0.95)
    }

    const TAL_BEAK_HEIGHT: f64 = MEAN * 0.35;

    pub(super) fn tal_width(&self) -> f64 {
        self.memo.metric("tal_width", || self.bowl_width() / 2.0 + self.tal_beak_width())
    }

    // Narrow bowl
    /// Apparent width of a narrow bowl. The drawn bowl is thinned on one
    /// side so two of them can share a stroke.
    pub(super) fn narrow_bowl_virtual_width(&self) -> f64 {
        self.memo.metric("narrow_bowl_virtual_width", || self.bowl_width() * 0.9)
    }

    pub(super) fn narrow_bowl_correction(&self) -> f64 {
        self.memo.metric("narrow_bowl_correction", || self.hor_thickness() * 0.15)
    }

    fn xal_width(&self) -> f64 {
        self.memo.metric("xal_width", || self.narrow_bowl_virtual_width() * 2.0 - self.hor_thickness())
    }

    // Nes
    fn spine_width(&self) -> f64 {
        self.memo.metric("spine_width", || self.bowl_width() * 0.5)
    }

    fn nes_width(&self) -> f64 {
        self.memo.metric("nes_width", || self.narrow_bowl_virtual_width() + self.spine_width())
    }

    /// Outer quarter of the bowl, from the left end up to the top.
    pub fn part_outer_bowl(&self) -> Result<Part> {
        self.memo.part("outer_bowl", || {
            Ok(quarter(self.bowl_width() / 2.0, MEAN / 2.0 + OVERSHOOT, 0.1))
        })
    }

    /// Inner quarter of the bowl, from the left end up to the top.
    pub fn part_inner_bowl(&self) -> Result<Part> {
        self.memo.part("inner_bowl", || {
            let width = self.bowl_width() / 2.0 - self.hor_thickness();
            let height = MEAN / 2.0 - self.ver_thickness() + OVERSHOOT;
            Ok(quarter(width, height, 0.1))
        })
    }

    /// The round stroke shared by most letters. Origin at its centre.
    pub fn part_bowl(&self) -> Result<Part> {
        self.memo.part("bowl", || {
            let outer = self.part_outer_bowl()?;
            let ring = ring_from_quarters(&outer, &outer, &self.part_inner_bowl()?, self.hor_thickness())?;
            Ok(ring.move_origin((self.bowl_width() / 2.0, 0.0)))
        })
    }

    /// Outer edge of the l descender, top to bottom.
    fn part_left_les_tail(&self) -> Result<Part> {
        self.memo.part("left_les_tail", || {
            let bend = self.les_tail_bend() - self.hor_thickness() / 2.0 + self.les_tail_correction();
            let virtual_bend = self.les_tail_bend();
            let height = MEAN / 2.0 + DESCENT;
            let bottom_handle = DESCENT * 1.08;
            let top_handle = self.thickness().tail_handle(bottom_handle, virtual_bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(-bend, height)))
        })
    }

    /// Inner edge of the l descender, top to bottom.
    fn part_right_les_tail(&self) -> Result<Part> {
        self.memo.part("right_les_tail", || {
            let bend = self.les_tail_bend() - self.hor_thickness() / 2.0;
            let height = MEAN / 2.0 + DESCENT;
            let top_handle = DESCENT * 1.08;
            let bottom_handle = self.thickness().tail_handle(top_handle, bend, height);
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(-bend, height)))
        })
    }

    /// Horizontal terminal of a stroke, left to right.
    pub fn part_cut(&self) -> Result<Part> {
        self.memo.part("cut", || Ok(Part::line_by((self.hor_thickness(), 0.0))))
    }

    /// Vertical terminal of a horizontal stroke, top to bottom.
    pub fn part_vertical_cut(&self) -> Result<Part> {
        self.memo.part("vertical_cut", || Ok(Part::line_by((0.0, self.ver_thickness()))))
    }

    /// The l descender, thinned on its left so it does not thicken the
    /// bowl where they overlap.
    ///
    /// Origin at the top left corner the tail would have without the
    /// correction.
    pub fn part_les_tail(&self) -> Result<Part> {
        self.memo.part("les_tail", || {
            let correction = self.les_tail_correction();
            let part = Part::seq([
                self.part_left_les_tail()?,
                self.part_cut()?,
                self.part_right_les_tail()?.reverse(),
                Part::line_by((-self.hor_thickness() + correction, 0.0)),
            ])?;
            Ok(part.move_origin((-correction, 0.0)))
        })
    }

    /// The l shape, origin at the bowl centre.
    pub fn part_les(&self) -> Result<Part> {
        self.memo.part("les", || {
            Part::union([
                self.part_bowl()?,
                self.part_les_tail()?.translate((self.bowl_width() / 2.0 - self.hor_thickness(), 0.0)),
            ])
        })
    }

    /// Upper half of the transphone's bulge, bottom to top.
    fn part_transphone_segment(&self) -> Result<Part> {
        self.memo.part("transphone_segment", || {
            let height = MEAN / 2.0;
            let right_handle = height * 0.6;
            Ok(Part::bezier(pt(0.0, 0.0), None, handle(0.0, -right_handle), pt(self.transphone_bend(), height)))
        })
    }

    fn part_transphone_cut(&self) -> Result<Part> {
        self.memo.part("transphone_cut", || {
            Ok(Part::line_by((self.hor_thickness() * Self::TRANSPHONE_THICKNESS_RATIO, 0.0)))
        })
    }

    /// The transphone tick, origin at the left middle of its bulge.
    pub fn part_transphone(&self) -> Result<Part> {
        self.memo.part("transphone", || {
            let segment = self.part_transphone_segment()?;
            let cut = self.part_transphone_cut()?;
            let part = Part::seq([
                segment.clone(),
                segment.clone().reflect_ver().reverse(),
                cut.clone(),
                segment.clone().reflect_ver(),
                segment.reverse(),
                cut.reverse(),
            ])?;
            Ok(part.move_origin((self.transphone_bend(), MEAN / 2.0)))
        })
    }

    pub(super) fn glyph_les(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_les()?, self.bowl_width())])
    }

    pub(super) fn glyph_res(&self) -> Result<Glyph> {
        self.voiced(self.part_les()?, self.bowl_width())
    }

    pub(super) fn glyph_pal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_les()?.rotate_half_turn(), self.bowl_width())])
    }

    pub(super) fn glyph_bol(&self) -> Result<Glyph> {
        self.voiced(self.part_les()?.rotate_half_turn(), self.bowl_width())
    }

    pub(super) fn glyph_cal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_les()?.reflect_hor().reverse(), self.bowl_width())])
    }

    pub(super) fn glyph_qol(&self) -> Result<Glyph> {
        self.voiced(self.part_les()?.reflect_hor().reverse(), self.bowl_width())
    }

    pub(super) fn glyph_kal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_les()?.reflect_ver().reverse(), self.bowl_width())])
    }

    pub(super) fn glyph_gol(&self) -> Result<Glyph> {
        self.voiced(self.part_les()?.reflect_ver().reverse(), self.bowl_width())
    }

    /// Lower leg of the y shape, top to bottom.
    fn part_yes_leg(&self) -> Result<Part> {
        self.memo.part("yes_leg", || {
            let height = MEAN / 2.0;
            let left_handle = height * 0.6;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), None, pt(self.yes_leg_bend(), height)))
        })
    }

    /// The y shape, origin at its centre.
    pub fn part_yes(&self) -> Result<Part> {
        self.memo.part("yes", || {
            let leg = self.part_yes_leg()?;
            let cut = self.part_cut()?;
            let inner = self.part_inner_bowl()?;
            let outer = self.part_outer_bowl()?;
            let part = Part::seq([
                leg.clone(),
                cut.clone(),
                leg.clone().reverse(),
                inner.clone(),
                inner.reflect_hor().reverse(),
                leg.clone().reflect_hor(),
                cut,
                leg.reflect_hor().reverse(),
                outer.clone().reflect_hor(),
                outer.reverse(),
            ])?;
            Ok(part.move_origin((self.bowl_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_yes(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_yes()?, self.bowl_width())])
    }

    pub(super) fn glyph_hes(&self) -> Result<Glyph> {
        self.voiced(self.part_yes()?, self.bowl_width())
    }

    pub(super) fn glyph_sal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_yes()?.reflect_ver().reverse(), self.bowl_width())])
    }

    pub(super) fn glyph_zol(&self) -> Result<Glyph> {
        self.voiced(self.part_yes()?.reflect_ver().reverse(), self.bowl_width())
    }

    /// Outer edge of the t beak, from its right end up to the top.
    pub(super) fn part_outer_tal_beak(&self) -> Result<Part> {
        self.memo.part("outer_tal_beak", || {
            let width = self.tal_beak_width();
            let height = Self::TAL_BEAK_HEIGHT + OVERSHOOT;
            let right_handle = height * 0.05;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -right_handle), handle(width, 0.0), pt(-width, -height)))
        })
    }

    /// Inner edge of the t beak, from its right end up to the top.
    pub(super) fn part_inner_tal_beak(&self) -> Result<Part> {
        self.memo.part("inner_tal_beak", || {
            let width = self.tal_beak_width() - self.hor_thickness();
            let height = Self::TAL_BEAK_HEIGHT - self.ver_thickness() + OVERSHOOT;
            let right_handle = height * 0.05;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -right_handle), handle(width, 0.0), pt(-width, -height)))
        })
    }

    /// The t shape, origin at its centre.
    pub fn part_tal(&self) -> Result<Part> {
        self.memo.part("tal", || {
            let outer = self.part_outer_bowl()?;
            let inner = self.part_inner_bowl()?;
            let outer_beak = self.part_outer_tal_beak()?;
            let inner_beak = self.part_inner_tal_beak()?;
            let cut = self.part_cut()?;
            let part = Part::seq([
                outer.clone().reflect_ver(),
                outer_beak.clone().reflect_ver().reverse(),
                cut.clone().reverse(),
                inner_beak.clone().reflect_ver(),
                inner.clone().reflect_ver().reverse(),
                inner,
                inner_beak.reverse(),
                cut,
                outer_beak,
                outer.reverse(),
            ])?;
            Ok(part.move_origin((self.tal_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_tal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_tal()?, self.tal_width())])
    }

    pub(super) fn glyph_dol(&self) -> Result<Glyph> {
        self.voiced(self.part_tal()?, self.tal_width())
    }

    pub(super) fn glyph_fal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_tal()?.reflect_hor().reverse(), self.tal_width())])
    }

    pub(super) fn glyph_vol(&self) -> Result<Glyph> {
        self.voiced(self.part_tal()?.reflect_hor().reverse(), self.tal_width())
    }

    /// Outer quarter of the narrow bowl's full-width side.
    pub(super) fn part_outer_left_narrow_bowl(&self) -> Result<Part> {
        self.memo.part("outer_left_narrow_bowl", || {
            Ok(quarter(self.narrow_bowl_virtual_width() / 2.0, MEAN / 2.0 + OVERSHOOT, 0.1))
        })
    }

    /// Outer quarter of the narrow bowl's thinned side, drawn mirrored so it
    /// reads like the left quarter.
    pub(super) fn part_outer_right_narrow_bowl(&self) -> Result<Part> {
        self.memo.part("outer_right_narrow_bowl", || {
            let width = self.narrow_bowl_virtual_width() / 2.0 - self.narrow_bowl_correction();
            Ok(quarter(width, MEAN / 2.0 + OVERSHOOT, 0.1))
        })
    }

    pub(super) fn part_inner_narrow_bowl(&self) -> Result<Part> {
        self.memo.part("inner_narrow_bowl", || {
            let width = self.narrow_bowl_virtual_width() / 2.0 - self.hor_thickness();
            let height = MEAN / 2.0 - self.ver_thickness() + OVERSHOOT;
            Ok(quarter(width, height, 0.1))
        })
    }

    /// Narrow bowl thinned on its right, origin at its apparent centre.
    pub fn part_narrow_bowl(&self) -> Result<Part> {
        self.memo.part("narrow_bowl", || {
            let ring = ring_from_quarters(
                &self.part_outer_left_narrow_bowl()?,
                &self.part_outer_right_narrow_bowl()?,
                &self.part_inner_narrow_bowl()?,
                self.hor_thickness(),
            )?;
            Ok(ring.move_origin((self.narrow_bowl_virtual_width() / 2.0, 0.0)))
        })
    }

    /// Two narrow bowls sharing their thinned sides, origin at the centre.
    pub fn part_xal(&self) -> Result<Part> {
        self.memo.part("xal", || {
            let bowl = self.part_narrow_bowl()?;
            let offset = self.narrow_bowl_virtual_width() - self.hor_thickness();
            let part = Part::union([bowl.clone(), bowl.reflect_hor().reverse().translate((offset, 0.0))])?;
            Ok(part.move_origin((self.xal_width() / 2.0 - self.narrow_bowl_virtual_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_xal(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_xal()?, self.xal_width())])
    }

    pub(super) fn glyph_jol(&self) -> Result<Glyph> {
        self.voiced(self.part_xal()?, self.xal_width())
    }

    /// Terminal leg of n, top to bottom.
    fn part_nes_leg(&self) -> Result<Part> {
        self.memo.part("nes_leg", || {
            let height = MEAN / 2.0;
            let right_handle = height * 0.6;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, right_handle), None, pt(-self.yes_leg_bend(), height)))
        })
    }

    fn spine_bend(&self) -> f64 {
        MEAN - self.ver_thickness() + OVERSHOOT * 2.0
    }

    /// Upper edge of the n spine, bottom to top.
    fn part_top_spine(&self) -> Result<Part> {
        self.memo.part("top_spine", || {
            let width = self.spine_width();
            let bend = self.spine_bend();
            let right_handle = width * 1.05;
            let left_handle = self.thickness().spine_handle(right_handle, bend, width);
            Ok(Part::bezier(pt(0.0, 0.0), handle(left_handle, 0.0), handle(-right_handle, 0.0), pt(width, -bend)))
        })
    }

    /// Lower edge of the n spine, bottom to top.
    fn part_bottom_spine(&self) -> Result<Part> {
        self.memo.part("bottom_spine", || {
            let width = self.spine_width();
            let bend = self.spine_bend();
            let left_handle = width * 1.05;
            let right_handle = self.thickness().spine_handle(left_handle, bend, width);
            Ok(Part::bezier(pt(0.0, 0.0), handle(left_handle, 0.0), handle(-right_handle, 0.0), pt(width, -bend)))
        })
    }

    /// The n shape, origin at its centre.
    pub fn part_nes(&self) -> Result<Part> {
        self.memo.part("nes", || {
            let outer = self.part_outer_left_narrow_bowl()?;
            let inner = self.part_inner_narrow_bowl()?;
            let leg = self.part_nes_leg()?;
            let cut = self.part_cut()?;
            let part = Part::seq([
                outer.clone().reflect_ver(),
                self.part_bottom_spine()?,
                inner.clone().reflect_hor().reverse(),
                leg.clone(),
                cut.clone(),
                leg.clone().reverse(),
                outer.reflect_hor(),
                self.part_top_spine()?.reverse(),
                inner.reflect_ver().reverse(),
                leg.clone().rotate_half_turn(),
                cut.reverse(),
                leg.rotate_half_turn().reverse(),
            ])?;
            Ok(part.move_origin((self.nes_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_nes(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_nes()?, self.nes_width())])
    }

    pub(super) fn glyph_mes(&self) -> Result<Glyph> {
        self.voiced(self.part_nes()?, self.nes_width())
    }
}
