//! Punctuation and the space

use super::{KalegGenerator, DESCENT, MEAN};
use crate::font::{Bearings, Glyph};
use crate::part::Part;
use anyhow::Result;

impl KalegGenerator {
    pub(super) fn glyph_period(&self) -> Result<Glyph> {
        self.finish([self.part_dot()?])
    }

    pub(super) fn glyph_comma(&self) -> Result<Glyph> {
        let tail = self.tail_with(DESCENT * 0.5, self.dot_width())?;
        self.finish([self.part_dot()?, tail])
    }

    pub(super) fn glyph_hyphen(&self) -> Result<Glyph> {
        let bar = self.bar(self.frame_width() * 0.6);
        self.finish([bar.translate((0.0, -MEAN / 2.0 - self.ver_thickness() / 2.0))])
    }

    pub(super) fn glyph_space(&self) -> Result<Glyph> {
        let bearings = Bearings { left: self.frame_width() * 0.5, right: 0.0 };
        self.finish_with([Part::empty()], bearings)
    }
}
