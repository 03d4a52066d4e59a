//! Letters

use super::{KalegGenerator, ASCENDER, DESCENT, MEAN};
use crate::font::Glyph;
use crate::part::Part;
use anyhow::Result;

impl KalegGenerator {
    /// Place an x-height part centred on its origin so its box spans
    /// `0..width` above the baseline.
    fn on_baseline(&self, part: Part, width: f64) -> Part {
        part.translate((width / 2.0, -MEAN / 2.0))
    }

    /// Ascending stem with its beak, left edge at `x`.
    fn ascender(&self, x: f64) -> Result<[Part; 2]> {
        Ok([
            self.stem(ASCENDER).translate((x, -ASCENDER)),
            self.part_beak()?.translate((x, -ASCENDER)),
        ])
    }

    fn narrow_width(&self) -> f64 {
        self.memo.metric("narrow_width", || self.frame_width() * 0.75)
    }

    pub(super) fn glyph_o(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_bowl()?, self.frame_width())])
    }

    pub(super) fn glyph_u(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_cup()?, self.frame_width())])
    }

    pub(super) fn glyph_n(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_cup()?.rotate_half_turn(), self.frame_width())])
    }

    pub(super) fn glyph_c(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_side()?, self.frame_width())])
    }

    pub(super) fn glyph_z(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_side()?.reflect_hor().reverse(), self.frame_width())])
    }

    pub(super) fn glyph_e(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let middle = self.bar(width).translate((0.0, -MEAN / 2.0 - self.ver_thickness() / 2.0));
        self.finish([self.on_baseline(self.part_side()?, width), middle])
    }

    pub(super) fn glyph_v(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_ell()?, self.frame_width())])
    }

    pub(super) fn glyph_r(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_ell()?.reflect_ver().reverse(), self.frame_width())])
    }

    pub(super) fn glyph_y(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_ell()?.reflect_hor().reverse(), self.frame_width())])
    }

    pub(super) fn glyph_f(&self) -> Result<Glyph> {
        self.finish([self.on_baseline(self.part_ell()?.rotate_half_turn(), self.frame_width())])
    }

    pub(super) fn glyph_l(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let ell = self.ell_with(width, ASCENDER)?.translate((width / 2.0, -ASCENDER / 2.0));
        self.finish([ell, self.part_beak()?.translate((0.0, -ASCENDER))])
    }

    pub(super) fn glyph_i(&self) -> Result<Glyph> {
        self.finish([
            self.stem(MEAN).translate((0.0, -MEAN)),
            self.part_beak()?.translate((0.0, -MEAN)),
            self.part_leg()?.translate((self.hor_thickness(), 0.0)),
        ])
    }

    pub(super) fn glyph_j(&self) -> Result<Glyph> {
        self.finish([
            self.stem(MEAN).translate((0.0, -MEAN)),
            self.part_beak()?.translate((0.0, -MEAN)),
            self.tail_with(DESCENT, self.hor_thickness())?,
        ])
    }

    pub(super) fn glyph_t(&self) -> Result<Glyph> {
        let bar_width = self.frame_width() * 0.6;
        let bar_x = self.hor_thickness() / 2.0 - bar_width / 2.0;
        let [stem, beak] = self.ascender(0.0)?;
        self.finish([stem, beak, self.bar(bar_width).translate((bar_x, -MEAN))])
    }

    pub(super) fn glyph_h(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let [stem, beak] = self.ascender(0.0)?;
        self.finish([self.on_baseline(self.part_cup()?.rotate_half_turn(), width), stem, beak])
    }

    pub(super) fn glyph_b(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let [stem, beak] = self.ascender(0.0)?;
        self.finish([self.on_baseline(self.part_cup()?, width), stem, beak])
    }

    pub(super) fn glyph_d(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let [stem, beak] = self.ascender(width - self.hor_thickness())?;
        self.finish([self.on_baseline(self.part_cup()?, width), stem, beak])
    }

    pub(super) fn glyph_p(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let tail = self.tail_with(DESCENT, self.hor_thickness())?;
        self.finish([self.on_baseline(self.part_cup()?.rotate_half_turn(), width), tail])
    }

    pub(super) fn glyph_q(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let tail = self.tail_with(DESCENT, self.hor_thickness())?.translate((width - self.hor_thickness(), 0.0));
        self.finish([self.on_baseline(self.part_cup()?.rotate_half_turn(), width), tail])
    }

    /// Two narrow frames sharing their inner stem.
    fn doubled(&self, frame: Part) -> Result<Glyph> {
        let width = self.narrow_width();
        let step = width - self.hor_thickness();
        let first = self.on_baseline(frame, width);
        let second = first.clone().translate((step, 0.0));
        self.finish([first, second])
    }

    pub(super) fn glyph_m(&self) -> Result<Glyph> {
        self.doubled(self.cup_with(self.narrow_width(), MEAN)?.rotate_half_turn())
    }

    pub(super) fn glyph_w(&self) -> Result<Glyph> {
        self.doubled(self.cup_with(self.narrow_width(), MEAN)?)
    }

    /// Left edge of a stroke joined to the right side of the bowl, thinned
    /// on the bowl side.
    fn bowl_joint_x(&self) -> f64 {
        self.frame_width() - self.hor_thickness() + self.join_correction()
    }

    pub(super) fn glyph_a(&self) -> Result<Glyph> {
        let stem = Part::rect(self.hor_thickness() - self.join_correction(), MEAN);
        self.finish([
            self.on_baseline(self.part_bowl()?, self.frame_width()),
            stem.translate((self.bowl_joint_x(), -MEAN)),
        ])
    }

    pub(super) fn glyph_g(&self) -> Result<Glyph> {
        let tail = self.tail_with(MEAN / 2.0 + DESCENT, self.hor_thickness() - self.join_correction())?;
        self.finish([
            self.on_baseline(self.part_bowl()?, self.frame_width()),
            tail.translate((self.bowl_joint_x(), -MEAN / 2.0)),
        ])
    }

    /// Height of each bracket of s. The lower bracket mirrors the upper one
    /// and the two overlap on the middle bar.
    fn s_half_height(&self) -> f64 {
        (MEAN + self.ver_thickness()) / 2.0
    }

    pub(super) fn glyph_s(&self) -> Result<Glyph> {
        let width = self.frame_width();
        let height = self.s_half_height();
        let upper = self.side_with(width, height)?;
        let lower = upper.clone().reflect_hor().reverse();
        self.finish([
            upper.translate((width / 2.0, -MEAN + height / 2.0)),
            lower.translate((width / 2.0, -height / 2.0)),
        ])
    }
}
