//! Stroke width fitting
//!
//! Curved strokes are drawn as two bezier edges. One handle of each edge is
//! fixed by the designer; the other is chosen here so that the distance from
//! the stroke's centre line to the edge matches the thickness the stroke
//! should have at that angle. Thickness is interpolated between the vertical
//! and horizontal stroke thickness by the angle of the stroke.
//!
//! The search is a plain grid scan with a fixed step. A finer step yields
//! different shapes, so [`STEP`] must not be tuned.

use crate::geometry::{angle_between, nearest_point, Segment};
use kurbo::{Point, Vec2};

/// Spacing between candidate handle lengths.
pub const STEP: f64 = 0.5;

/// Target stroke thickness for horizontal and vertical strokes.
///
/// `horizontal` is the width of a vertical stem (a stroke whose thickness
/// runs horizontally) and `vertical` the height of a horizontal bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessModel {
    pub horizontal: f64,
    pub vertical: f64,
}

impl ThicknessModel {
    pub fn new(horizontal: f64, contrast_ratio: f64) -> Self {
        Self { horizontal, vertical: horizontal * contrast_ratio }
    }

    /// Thickness expected at `angle` degrees.
    ///
    /// `0` is the vertical-thickness regime and `90` the horizontal one.
    /// Outside `[0, 90]` (NaN included) the thickness is infinite, so any
    /// candidate measured there can never win a search.
    pub fn ideal_thickness(&self, angle: f64) -> f64 {
        if (0.0..=90.0).contains(&angle) {
            let hor_weight = angle / 90.0;
            let ver_weight = 1.0 - angle / 90.0;
            hor_weight * self.horizontal + ver_weight * self.vertical
        } else {
            f64::INFINITY
        }
    }

    /// How far `curve` is from half the ideal thickness, seen from `base`.
    pub fn stroke_error(&self, curve: &Segment, base: Point) -> f64 {
        let Some(nearest) = nearest_point(std::slice::from_ref(curve), base) else {
            return f64::INFINITY;
        };
        let angle = angle_between(nearest - base, Vec2::new(1.0, 0.0)) - 90.0;
        ((nearest - base).hypot() - self.ideal_thickness(angle) / 2.0).abs()
    }

    /// Fit the top handle of a descending tail edge.
    ///
    /// The edge runs from `(0, 0)` straight down, bending left by `bend`
    /// over `height`; `other_handle` is the fixed bottom handle.
    pub fn tail_handle(&self, other_handle: f64, bend: f64, height: f64) -> f64 {
        let base = Point::new(-bend / 2.0 + self.horizontal / 2.0, height / 2.0);
        search_handle(height, |candidate| {
            let curve = tail_curve(candidate, other_handle, bend, height);
            self.stroke_error(&curve, base)
        })
    }

    /// Fit the left handle of a rising spine edge.
    ///
    /// The edge runs from `(0, 0)` to the right, rising by `bend` over
    /// `width`; `other_handle` is the fixed right handle.
    pub fn spine_handle(&self, other_handle: f64, bend: f64, width: f64) -> f64 {
        let base = Point::new(width / 2.0, -bend / 2.0 + self.vertical / 2.0);
        search_handle(width, |candidate| {
            let curve = spine_curve(candidate, other_handle, bend, width);
            self.stroke_error(&curve, base)
        })
    }
}

/// Edge used by [`ThicknessModel::tail_handle`].
pub fn tail_curve(top_handle: f64, bottom_handle: f64, bend: f64, height: f64) -> Segment {
    Segment::bezier(
        Point::new(0.0, 0.0),
        Some(Vec2::new(0.0, top_handle)),
        Some(Vec2::new(0.0, -bottom_handle)),
        Point::new(-bend, height),
    )
}

/// Edge used by [`ThicknessModel::spine_handle`].
pub fn spine_curve(left_handle: f64, right_handle: f64, bend: f64, width: f64) -> Segment {
    Segment::bezier(
        Point::new(0.0, 0.0),
        Some(Vec2::new(left_handle, 0.0)),
        Some(Vec2::new(-right_handle, 0.0)),
        Point::new(width, -bend),
    )
}

/// Scan `0, STEP, 2 * STEP, ..` up to `upper` and return the candidate
/// with the smallest error.
///
/// Ties go to the earliest candidate. When every candidate scores an
/// infinite (or NaN) error the result is `0`.
pub fn search_handle(upper: f64, error_of: impl Fn(f64) -> f64) -> f64 {
    let mut best = 0.0;
    let mut minimum = f64::INFINITY;
    for candidate in candidates(upper) {
        let error = error_of(candidate);
        if error < minimum {
            minimum = error;
            best = candidate;
        }
    }
    best
}

/// Candidate handle lengths in `[0, upper]`.
pub fn candidates(upper: f64) -> impl Iterator<Item = f64> {
    let count = if upper >= 0.0 { (upper / STEP).floor() as usize + 1 } else { 0 };
    (0..count).map(|i| i as f64 * STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_thickness_interpolates() {
        let model = ThicknessModel::new(100.0, 0.75);
        assert_eq!(model.ideal_thickness(0.0), 75.0);
        assert_eq!(model.ideal_thickness(90.0), 100.0);
        assert!((model.ideal_thickness(45.0) - 87.5).abs() < 1e-12);
    }

    #[test]
    fn ideal_thickness_outside_range_is_infinite() {
        let model = ThicknessModel::new(100.0, 0.75);
        assert!(model.ideal_thickness(-0.5).is_infinite());
        assert!(model.ideal_thickness(90.5).is_infinite());
        assert!(model.ideal_thickness(f64::NAN).is_infinite());
    }

    #[test]
    fn equal_contrast_means_equal_thickness() {
        let model = ThicknessModel::new(83.3, 1.0);
        assert_eq!(model.horizontal, model.vertical);
        assert_eq!(model.ideal_thickness(0.0), model.ideal_thickness(90.0));
    }

    #[test]
    fn candidate_grid_includes_upper_bound() {
        let grid: Vec<f64> = candidates(2.0).collect();
        assert_eq!(grid, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(candidates(1.2).count(), 3);
        assert_eq!(candidates(-1.0).count(), 0);
    }

    #[test]
    fn search_prefers_first_minimum() {
        // Error is flat at zero between 1.0 and 2.0.
        let found = search_handle(5.0, |h| if (1.0..=2.0).contains(&h) { 0.0 } else { 1.0 });
        assert_eq!(found, 1.0);
    }

    #[test]
    fn search_with_nothing_acceptable_returns_zero() {
        assert_eq!(search_handle(10.0, |_| f64::INFINITY), 0.0);
        assert_eq!(search_handle(10.0, |_| f64::NAN), 0.0);
    }

    #[test]
    fn tail_handle_is_the_grid_minimum() {
        let model = ThicknessModel::new(100.0, 0.75);
        let (other, bend, height) = (270.0, 220.0, 500.0);
        let found = model.tail_handle(other, bend, height);

        let base = Point::new(-bend / 2.0 + 50.0, height / 2.0);
        let error_at =
            |h: f64| model.stroke_error(&tail_curve(h, other, bend, height), base);
        let best = error_at(found);
        for candidate in candidates(height) {
            let error = error_at(candidate);
            assert!(error >= best, "candidate {candidate} beats {found}");
            if candidate < found {
                assert!(error > best, "earlier candidate {candidate} ties {found}");
            }
        }
        assert!(found <= height);
        assert_eq!(found % STEP, 0.0);
    }

    #[test]
    fn spine_handle_is_the_grid_minimum() {
        let model = ThicknessModel::new(100.0, 0.75);
        let (other, bend, width) = (236.25, 445.0, 225.0);
        let found = model.spine_handle(other, bend, width);

        let base = Point::new(width / 2.0, -bend / 2.0 + 37.5);
        let error_at =
            |h: f64| model.stroke_error(&spine_curve(h, other, bend, width), base);
        let best = error_at(found);
        for candidate in candidates(width) {
            assert!(error_at(candidate) >= best);
        }
    }
}
