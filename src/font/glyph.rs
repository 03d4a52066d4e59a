//! Finished glyph records

use super::metrics::{Bearings, Metrics};
use crate::part::Part;
use serde::{Deserialize, Serialize};

/// A positioned outline with its advance width.
///
/// The outline's origin sits on the baseline at the left edge of the
/// advance, so `width` spans `0..width` horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub outline: Part,
    pub metrics: Metrics,
    pub bearings: Bearings,
    pub width: f64,
}

impl Glyph {
    /// Place `part` so its left extent sits at `bearings.left`.
    ///
    /// The part is read relative to its origin, whose y is the baseline.
    /// `width = left + outline extent + right`, where an empty outline has
    /// extent `0`.
    pub fn by_bearings(part: Part, metrics: Metrics, bearings: Bearings) -> Self {
        let shift = part.origin().to_vec2();
        let local = part.translate(-shift);
        let local = local.move_origin(-shift);
        let (outline, extent) = match local.bounding_box() {
            Some(rect) => (local.translate((bearings.left - rect.x0, 0.0)), rect.width()),
            None => (local, 0.0),
        };
        let width = bearings.left + extent + bearings.right;
        Self { outline, metrics, bearings, width }
    }

    /// Horizontal extent of the outline alone.
    pub fn outline_width(&self) -> f64 {
        self.outline.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics { em: 1000.0, ascent: 800.0, descent: 200.0 }
    }

    #[test]
    fn width_adds_bearings_to_extent() {
        let part = Part::rect(300.0, 500.0).translate((-150.0, -500.0));
        let glyph = Glyph::by_bearings(part, metrics(), Bearings { left: 40.0, right: 60.0 });
        assert!((glyph.width - 400.0).abs() < 1e-9);
        let rect = glyph.outline.bounding_box().expect("outline");
        assert!((rect.x0 - 40.0).abs() < 1e-9);
        assert!((rect.y0 + 500.0).abs() < 1e-9);
    }

    #[test]
    fn origin_is_reset_to_the_baseline_left() {
        let part = Part::rect(100.0, 100.0).move_origin((30.0, 100.0));
        let glyph = Glyph::by_bearings(part, metrics(), Bearings::symmetric(10.0));
        assert_eq!(glyph.outline.origin(), kurbo::Point::ORIGIN);
        let rect = glyph.outline.bounding_box().expect("outline");
        assert!((rect.x0 - 10.0).abs() < 1e-9);
        assert!((rect.y1 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn empty_outline_is_all_bearing() {
        let glyph = Glyph::by_bearings(Part::empty(), metrics(), Bearings::symmetric(25.0));
        assert_eq!(glyph.width, 50.0);
    }
}
