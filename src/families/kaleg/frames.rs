//! Frames, bowl and the small strokes letters are assembled from
//!
//! Frames are single closed outlines traced with the outer edge first,
//! left side downward, so they share the winding of every other outline.
//! Their origins are at the centre of the frame box, which keeps the box in
//! place under reflection and half turns.

use super::{EdgeJoin, KalegGenerator, MEAN, OVERSHOOT};
use crate::families::ring_from_quarters;
use crate::geometry::{handle, pt};
use crate::part::{Part, KAPPA};
use anyhow::Result;

impl KalegGenerator {
    fn edge_width(&self) -> f64 {
        self.memo.metric("edge_width", || self.hor_thickness() * self.config.edge_ratio)
    }

    fn edge_height(&self) -> f64 {
        self.memo.metric("edge_height", || self.edge_width() * self.config.edge_contrast_ratio)
    }

    fn beak_size(&self) -> f64 {
        self.memo.metric("beak_size", || self.frame_width() * self.config.beak_ratio)
    }

    fn leg_size(&self) -> f64 {
        self.memo.metric("leg_size", || self.frame_width() * self.config.leg_ratio)
    }

    fn tail_bend(&self) -> f64 {
        self.memo.metric("tail_bend", || self.frame_width() * self.config.tail_ratio)
    }

    pub(super) fn dot_width(&self) -> f64 {
        self.memo.metric("dot_width", || self.hor_thickness() * 1.3)
    }

    /// Outer corner turning from downward to rightward.
    pub fn part_corner(&self) -> Result<Part> {
        self.memo.part("corner", || {
            let (width, height) = (self.edge_width(), self.edge_height());
            match self.config.edge_join {
                EdgeJoin::Miter => Part::seq([Part::line_by((0.0, height)), Part::line_by((width, 0.0))]),
                EdgeJoin::Bevel => Ok(Part::line_by((width, height))),
                EdgeJoin::Round => Ok(Part::bezier(
                    pt(0.0, 0.0),
                    handle(0.0, height * KAPPA),
                    handle(-width * KAPPA, 0.0),
                    pt(width, height),
                )),
            }
        })
    }

    /// Cup open at the top, like "U".
    pub(super) fn cup_with(&self, width: f64, height: f64) -> Result<Part> {
        let (stem, bar) = (self.hor_thickness(), self.ver_thickness());
        let (edge_width, edge_height) = (self.edge_width(), self.edge_height());
        let corner = self.part_corner()?;
        let part = Part::seq([
            Part::line_by((0.0, height - edge_height)),
            corner.clone(),
            Part::line_by((width - edge_width * 2.0, 0.0)),
            corner.reflect_hor().reverse(),
            Part::line_by((0.0, -(height - edge_height))),
            Part::line_by((-stem, 0.0)),
            Part::line_by((0.0, height - bar)),
            Part::line_by((-(width - stem * 2.0), 0.0)),
            Part::line_by((0.0, -(height - bar))),
            Part::line_by((-stem, 0.0)),
        ])?;
        Ok(part.move_origin((width / 2.0, height / 2.0)))
    }

    pub fn part_cup(&self) -> Result<Part> {
        self.memo.part("cup", || self.cup_with(self.frame_width(), MEAN))
    }

    /// Bracket open on the right, like "⊏". Traced from its top right end.
    pub(super) fn side_with(&self, width: f64, height: f64) -> Result<Part> {
        let (stem, bar) = (self.hor_thickness(), self.ver_thickness());
        let (edge_width, edge_height) = (self.edge_width(), self.edge_height());
        let corner = self.part_corner()?;
        let part = Part::seq([
            Part::line_by((-(width - edge_width), 0.0)),
            corner.clone().reflect_ver().reverse(),
            Part::line_by((0.0, height - edge_height * 2.0)),
            corner,
            Part::line_by((width - edge_width, 0.0)),
            Part::line_by((0.0, -bar)),
            Part::line_by((-(width - stem), 0.0)),
            Part::line_by((0.0, -(height - bar * 2.0))),
            Part::line_by((width - stem, 0.0)),
            Part::line_by((0.0, -bar)),
        ])?;
        Ok(part.move_origin((-width / 2.0, height / 2.0)))
    }

    pub fn part_side(&self) -> Result<Part> {
        self.memo.part("side", || self.side_with(self.frame_width(), MEAN))
    }

    /// Stem with a foot to the right, like "└".
    pub(super) fn ell_with(&self, width: f64, height: f64) -> Result<Part> {
        let (stem, bar) = (self.hor_thickness(), self.ver_thickness());
        let (edge_width, edge_height) = (self.edge_width(), self.edge_height());
        let part = Part::seq([
            Part::line_by((0.0, height - edge_height)),
            self.part_corner()?,
            Part::line_by((width - edge_width, 0.0)),
            Part::line_by((0.0, -bar)),
            Part::line_by((-(width - stem), 0.0)),
            Part::line_by((0.0, -(height - bar))),
            Part::line_by((-stem, 0.0)),
        ])?;
        Ok(part.move_origin((width / 2.0, height / 2.0)))
    }

    pub fn part_ell(&self) -> Result<Part> {
        self.memo.part("ell", || self.ell_with(self.frame_width(), MEAN))
    }

    /// Quarter of a squarish bowl, from the left end up to the top.
    fn bowl_quarter(&self, width: f64, height: f64) -> Part {
        let ratio = self.config.bowl_ratio;
        Part::bezier(pt(0.0, 0.0), handle(0.0, -height * ratio), handle(-width * ratio, 0.0), pt(width, -height))
    }

    /// The squarish bowl, origin at its centre.
    pub fn part_bowl(&self) -> Result<Part> {
        self.memo.part("bowl", || {
            let width = self.frame_width() / 2.0;
            let outer = self.bowl_quarter(width, MEAN / 2.0 + OVERSHOOT);
            let inner = self.bowl_quarter(
                width - self.hor_thickness(),
                MEAN / 2.0 - self.ver_thickness() + OVERSHOOT,
            );
            let ring = ring_from_quarters(&outer, &outer, &inner, self.hor_thickness())?;
            Ok(ring.move_origin((width, 0.0)))
        })
    }

    /// Vertical stem of `height`, origin at its top left.
    pub(super) fn stem(&self, height: f64) -> Part {
        Part::rect(self.hor_thickness(), height)
    }

    /// Horizontal bar of `width`, origin at its top left.
    pub(super) fn bar(&self, width: f64) -> Part {
        Part::rect(width, self.ver_thickness())
    }

    /// Flag hanging left from the top of a stem, origin at its top right.
    /// Empty for unbeaked styles.
    pub fn part_beak(&self) -> Result<Part> {
        self.memo.part("beak", || flag(self.beak_size()))
    }

    /// Flag pointing right from the foot of a stem, origin at its bottom
    /// left. Empty unless the style has legs.
    pub fn part_leg(&self) -> Result<Part> {
        self.memo.part("leg", || Ok(flag(self.leg_size())?.rotate_half_turn()))
    }

    /// Descender of `width` hanging `height` below its top edge, curling
    /// left at the bottom in beaked styles. Origin at its top left.
    pub(super) fn tail_with(&self, height: f64, width: f64) -> Result<Part> {
        let bend = self.tail_bend();
        if bend <= 0.0 {
            return Ok(Part::rect(width, height));
        }
        let bottom_handle = height * 0.6;
        let top_handle = self.thickness().tail_handle(bottom_handle, bend, height);
        let edge = Part::bezier(pt(0.0, 0.0), handle(0.0, top_handle), handle(0.0, -bottom_handle), pt(-bend, height));
        Part::seq([edge.clone(), Part::line_by((width, 0.0)), edge.reverse(), Part::line_by((-width, 0.0))])
    }

    /// Square dot resting on the baseline, origin at its bottom left.
    pub fn part_dot(&self) -> Result<Part> {
        self.memo.part("dot", || {
            let width = self.dot_width();
            Ok(Part::rect(width, width).move_origin((0.0, width)))
        })
    }
}

/// Right triangle with legs of `size` along the top and the right side.
fn flag(size: f64) -> Result<Part> {
    if size <= 0.0 {
        return Ok(Part::empty());
    }
    Part::seq([
        Part::line_by((-size, 0.0)),
        Part::line_by((size, size)),
        Part::line_by((0.0, -size)),
    ])
}
