//! Digits

use super::{quarter, VekosGenerator, MEAN, OVERSHOOT};
use crate::families::band;
use crate::font::Glyph;
use crate::geometry::{angle_between, handle, pt};
use crate::part::Part;
use anyhow::{Context, Result};
use kurbo::{Line, Vec2};

const XEF_BEAK_HEIGHT: f64 = MEAN * 0.35;
const TAS_BEAK_HEIGHT: f64 = MEAN * 0.3;
const TAS_CROSSBAR_ALTITUDE: f64 = MEAN * 0.45;

impl VekosGenerator {
    /// The digit six, origin at the bowl centre.
    pub fn part_rac(&self) -> Result<Part> {
        self.memo.part("rac", || {
            let tail_offset = self.bowl_width() / 2.0 - self.hor_thickness();
            Part::union([self.part_yes()?.rotate_half_turn(), self.part_les_tail()?.translate((tail_offset, 0.0))])
        })
    }

    pub(super) fn glyph_rac(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_rac()?, self.bowl_width())])
    }

    pub(super) fn glyph_pav(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_rac()?.rotate_half_turn(), self.bowl_width())])
    }

    pub(super) fn glyph_qic(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_rac()?.reflect_hor().reverse(), self.bowl_width())])
    }

    pub(super) fn glyph_keq(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_rac()?.reflect_ver().reverse(), self.bowl_width())])
    }

    // Solidus of zero
    fn solidus_thickness_ratio(&self) -> f64 {
        self.memo.metric("solidus_thickness_ratio", || {
            (-self.config.weight_const * 0.12 + 1.084).min(1.0)
        })
    }

    fn solidus_grade(&self) -> Vec2 {
        Vec2::new(self.bowl_width() / 2.0, -MEAN / 2.0 * 0.8)
    }

    /// Length of the solidus: it ends a little inside the outer edge of the
    /// bowl, where the guide from the centre crosses it.
    fn solidus_length(&self) -> Result<f64> {
        let grade = self.solidus_grade();
        let bowl = self.part_bowl()?;
        let hits = bowl.intersections(Line::new(pt(0.0, 0.0), pt(grade.x, grade.y)));
        let outer = hits.get(1).context("solidus guide does not cross the outer edge of the bowl")?;
        Ok(outer.to_vec2().hypot() * 2.0 - self.hor_thickness())
    }

    /// Rotation of the solidus; negative turns anticlockwise on screen.
    fn solidus_angle(&self) -> f64 {
        -angle_between(self.solidus_grade(), Vec2::new(1.0, 0.0))
    }

    /// The slanted bar of zero, origin at its centre.
    pub fn part_solidus(&self) -> Result<Part> {
        self.memo.part("solidus", || {
            let angle = self.solidus_angle();
            let length = self.solidus_length()?;
            let thickness = self.thickness().ideal_thickness(-angle) * self.solidus_thickness_ratio();
            let part = band(&Part::line_by((0.0, thickness)), &Part::line_by((length, 0.0)))?;
            Ok(part.move_origin((length / 2.0, thickness / 2.0)).rotate(angle))
        })
    }

    pub fn part_nuf(&self) -> Result<Part> {
        self.memo.part("nuf", || Part::union([self.part_bowl()?, self.part_solidus()?]))
    }

    pub(super) fn glyph_nuf(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_nuf()?, self.bowl_width())])
    }

    // Xef
    fn xef_beak_width(&self) -> f64 {
        self.memo.metric("xef_beak_width", || self.narrow_bowl_virtual_width() / 2.0 * 0.95)
    }

    /// Apparent width of one half of five, narrow bowl plus beak.
    fn xef_half_virtual_width(&self) -> f64 {
        self.memo.metric("xef_half_virtual_width", || {
            self.narrow_bowl_virtual_width() / 2.0 + self.xef_beak_width()
        })
    }

    fn xef_width(&self) -> f64 {
        self.memo.metric("xef_width", || self.xef_half_virtual_width() * 2.0 - self.hor_thickness())
    }

    fn part_outer_xef_beak(&self) -> Result<Part> {
        self.memo.part("outer_xef_beak", || {
            Ok(quarter(self.xef_beak_width(), XEF_BEAK_HEIGHT + OVERSHOOT, 0.05))
        })
    }

    fn part_inner_xef_beak(&self) -> Result<Part> {
        self.memo.part("inner_xef_beak", || {
            let width = self.xef_beak_width() - self.hor_thickness();
            let height = XEF_BEAK_HEIGHT - self.ver_thickness() + OVERSHOOT;
            Ok(quarter(width, height, 0.05))
        })
    }

    /// Left half of five: a narrow bowl opened into two beaks on the left.
    /// Origin at the apparent centre of the half.
    fn part_xef_half(&self) -> Result<Part> {
        self.memo.part("xef_half", || {
            let outer_bowl = self.part_outer_right_narrow_bowl()?;
            let inner_bowl = self.part_inner_narrow_bowl()?;
            let outer_beak = self.part_outer_xef_beak()?;
            let inner_beak = self.part_inner_xef_beak()?;
            let cut = self.part_cut()?;
            let part = Part::seq([
                outer_bowl.clone().reflect_hor(),
                outer_beak.clone().reverse(),
                cut.clone(),
                inner_beak.clone(),
                inner_bowl.clone().reflect_hor().reverse(),
                inner_bowl.rotate_half_turn(),
                inner_beak.reflect_ver().reverse(),
                cut.reverse(),
                outer_beak.reflect_ver(),
                outer_bowl.rotate_half_turn().reverse(),
            ])?;
            let offset = -self.xef_half_virtual_width() / 2.0 + self.narrow_bowl_correction();
            Ok(part.move_origin((offset, 0.0)))
        })
    }

    /// The digit five, origin at its centre.
    pub fn part_xef(&self) -> Result<Part> {
        self.memo.part("xef", || {
            let half = self.part_xef_half()?;
            let offset = self.xef_half_virtual_width() - self.hor_thickness();
            let part = Part::union([half.clone(), half.reflect_hor().reverse().translate((offset, 0.0))])?;
            Ok(part.move_origin((self.xef_width() / 2.0 - self.xef_half_virtual_width() / 2.0, 0.0)))
        })
    }

    pub(super) fn glyph_xef(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_xef()?, self.xef_width())])
    }

    // Tas
    fn tas_shoulder_width(&self) -> f64 {
        self.memo.metric("tas_shoulder_width", || self.bowl_width() / 2.0)
    }

    fn tas_shoulder_straight_height(&self) -> f64 {
        self.memo.metric("tas_shoulder_straight_height", || self.ver_thickness() * 0.5)
    }

    fn tas_width(&self) -> f64 {
        self.memo.metric("tas_width", || {
            self.bowl_width() / 2.0 + self.tas_shoulder_width().max(self.tal_beak_width())
        })
    }

    fn part_outer_tas_beak(&self) -> Result<Part> {
        self.memo.part("outer_tas_beak", || {
            let width = self.tal_beak_width();
            let height = TAS_BEAK_HEIGHT + OVERSHOOT;
            let right_handle = height * 0.05;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -right_handle), handle(width, 0.0), pt(-width, -height)))
        })
    }

    fn part_inner_tas_beak(&self) -> Result<Part> {
        self.memo.part("inner_tas_beak", || {
            let width = self.tal_beak_width() - self.hor_thickness();
            let height = TAS_BEAK_HEIGHT - self.ver_thickness() + OVERSHOOT;
            let right_handle = height * 0.05;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, -right_handle), handle(width, 0.0), pt(-width, -height)))
        })
    }

    /// Outer edge of the lower shoulder, from the right end down-left.
    fn part_outer_tas_shoulder(&self) -> Result<Part> {
        self.memo.part("outer_tas_shoulder", || {
            let width = self.tas_shoulder_width();
            let height = TAS_CROSSBAR_ALTITUDE + self.ver_thickness() / 2.0 - self.tas_shoulder_straight_height()
                + OVERSHOOT;
            let right_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, right_handle), handle(width, 0.0), pt(-width, height)))
        })
    }

    fn part_inner_tas_shoulder(&self) -> Result<Part> {
        self.memo.part("inner_tas_shoulder", || {
            let width = self.tas_shoulder_width() - self.hor_thickness();
            let height = TAS_CROSSBAR_ALTITUDE - self.ver_thickness() / 2.0 - self.tas_shoulder_straight_height()
                + OVERSHOOT;
            let right_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, right_handle), handle(width, 0.0), pt(-width, height)))
        })
    }

    fn part_tas_shoulder_straight(&self) -> Result<Part> {
        self.memo.part("tas_shoulder_straight", || {
            Ok(Part::line_by((0.0, -self.tas_shoulder_straight_height())))
        })
    }

    /// One without its crossbar, origin at its centre.
    fn part_tas_frame(&self) -> Result<Part> {
        self.memo.part("tas_frame", || {
            let outer_bowl = self.part_outer_bowl()?;
            let inner_bowl = self.part_inner_bowl()?;
            let straight = self.part_tas_shoulder_straight()?;
            let cut = self.part_cut()?;
            let part = Part::seq([
                outer_bowl.clone().reflect_ver(),
                self.part_outer_tas_shoulder()?.reverse(),
                straight.clone(),
                cut.clone().reverse(),
                straight.reverse(),
                self.part_inner_tas_shoulder()?,
                inner_bowl.clone().reflect_ver().reverse(),
                inner_bowl,
                self.part_inner_tas_beak()?.reverse(),
                cut,
                self.part_outer_tas_beak()?,
                outer_bowl.reverse(),
            ])?;
            Ok(part.move_origin((self.tas_width() / 2.0, 0.0)))
        })
    }

    /// Crossbar of one, origin at its top left corner.
    fn part_tas_crossbar(&self) -> Result<Part> {
        self.memo.part("tas_crossbar", || {
            let width = self.bowl_width() / 2.0 + self.tas_shoulder_width() - self.hor_thickness();
            band(&self.part_vertical_cut()?, &Part::line_by((width, 0.0)))
        })
    }

    /// The digit one, origin at its centre.
    pub fn part_tas(&self) -> Result<Part> {
        self.memo.part("tas", || {
            let offset = (
                self.hor_thickness() / 2.0 - self.tas_width() / 2.0,
                -TAS_CROSSBAR_ALTITUDE + MEAN / 2.0 - self.ver_thickness() / 2.0,
            );
            Part::union([self.part_tas_frame()?, self.part_tas_crossbar()?.translate(offset)])
        })
    }

    pub(super) fn glyph_tas(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_tas()?, self.tas_width())])
    }

    pub(super) fn glyph_vun(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_tas()?.rotate_half_turn(), self.tas_width())])
    }

    // Yus
    fn yus_width(&self) -> f64 {
        self.memo.metric("yus_width", || self.bowl_width() * 1.3)
    }

    fn yus_shoulder_straight_width(&self) -> f64 {
        self.memo.metric("yus_shoulder_straight_width", || self.hor_thickness() * 0.7)
    }

    /// Horizontal position of the crossbar, measured from the centre.
    fn yus_crossbar_latitude(&self) -> f64 {
        self.memo.metric("yus_crossbar_latitude", || self.yus_width() / 2.0 * 0.95)
    }

    fn part_outer_yus_bowl(&self) -> Result<Part> {
        self.memo.part("outer_yus_bowl", || {
            Ok(quarter(self.yus_width() / 2.0, MEAN / 2.0 + OVERSHOOT, 0.1))
        })
    }

    fn part_inner_yus_bowl(&self) -> Result<Part> {
        self.memo.part("inner_yus_bowl", || {
            let width = self.yus_width() / 2.0 - self.hor_thickness();
            let height = MEAN / 2.0 - self.ver_thickness() + OVERSHOOT;
            Ok(quarter(width, height, 0.1))
        })
    }

    fn part_yus_leg(&self) -> Result<Part> {
        self.memo.part("yus_leg", || {
            let height = MEAN / 2.0;
            let left_handle = height * 0.6;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), None, pt(-self.yes_leg_bend(), height)))
        })
    }

    fn part_outer_yus_shoulder(&self) -> Result<Part> {
        self.memo.part("outer_yus_shoulder", || {
            let width = self.yus_crossbar_latitude() + self.hor_thickness() / 2.0 - self.yus_shoulder_straight_width();
            let height = MEAN / 2.0;
            let left_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), handle(-width, 0.0), pt(width, height)))
        })
    }

    fn part_inner_yus_shoulder(&self) -> Result<Part> {
        self.memo.part("inner_yus_shoulder", || {
            let width = self.yus_crossbar_latitude() - self.hor_thickness() / 2.0 - self.yus_shoulder_straight_width();
            let height = MEAN / 2.0 - self.ver_thickness();
            let left_handle = height * 0.1;
            Ok(Part::bezier(pt(0.0, 0.0), handle(0.0, left_handle), handle(-width, 0.0), pt(width, height)))
        })
    }

    /// Three without its crossbar, origin at its centre.
    fn part_yus_frame(&self) -> Result<Part> {
        self.memo.part("yus_frame", || {
            let straight = Part::line_by((self.yus_shoulder_straight_width(), 0.0));
            let inner_bowl = self.part_inner_yus_bowl()?;
            let outer_bowl = self.part_outer_yus_bowl()?;
            let leg = self.part_yus_leg()?;
            let part = Part::seq([
                self.part_outer_yus_shoulder()?,
                straight.clone(),
                self.part_vertical_cut()?.reverse(),
                straight.reverse(),
                self.part_inner_yus_shoulder()?.reverse(),
                inner_bowl.clone(),
                inner_bowl.reflect_hor().reverse(),
                leg.clone(),
                self.part_cut()?,
                leg.reverse(),
                outer_bowl.clone().reflect_hor(),
                outer_bowl.reverse(),
            ])?;
            Ok(part.move_origin((self.yus_width() / 2.0, 0.0)))
        })
    }

    fn part_yus_crossbar(&self) -> Result<Part> {
        self.memo.part("yus_crossbar", || {
            band(&Part::line_by((0.0, MEAN - self.ver_thickness())), &Part::line_by((self.hor_thickness(), 0.0)))
        })
    }

    /// The digit three, origin at its centre.
    pub fn part_yus(&self) -> Result<Part> {
        self.memo.part("yus", || {
            let offset = (
                self.yus_crossbar_latitude() - self.yus_width() / 2.0 - self.hor_thickness() / 2.0,
                -MEAN / 2.0 + self.ver_thickness() / 2.0,
            );
            Part::union([self.part_yus_frame()?, self.part_yus_crossbar()?.translate(offset)])
        })
    }

    pub(super) fn glyph_yus(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_yus()?, self.yus_width())])
    }

    pub(super) fn glyph_siz(&self) -> Result<Glyph> {
        self.finish([self.centered(self.part_yus()?.rotate_half_turn(), self.yus_width())])
    }
}
