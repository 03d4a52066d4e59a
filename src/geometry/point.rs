//! Point and vector helpers for glyph construction
//!
//! Glyph geometry lives in a y-down design space: the baseline is `y = 0`
//! and the mean line sits at `y = -mean`. Points are plain `kurbo::Point`s;
//! this module only adds the few measurements the outline builders need.

use kurbo::{Point, Vec2};

/// Shorthand constructor used throughout the glyph builders.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A bezier handle offset, relative to its anchor.
#[inline]
pub fn handle(x: f64, y: f64) -> Option<Vec2> {
    Some(Vec2::new(x, y))
}

/// Unsigned angle in degrees between `v` and `reference`, in `[0, 180]`.
///
/// Returns NaN when either vector has zero length.
pub fn angle_between(v: Vec2, reference: Vec2) -> f64 {
    let div = v.hypot() * reference.hypot();
    // Clamp so rounding never pushes acos outside its domain.
    let cos = (v.dot(reference) / div).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Signed angle of `v` in degrees, measured from +x.
///
/// Positive angles turn clockwise on screen because y points down.
pub fn signed_angle(v: Vec2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Rotate `point` about `center` by `degrees`.
pub fn rotate_about(point: Point, center: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Whether two points coincide within `tolerance`.
pub fn approx_eq(a: Point, b: Point, tolerance: f64) -> bool {
    (a - b).hypot() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_between_is_unsigned() {
        let x = Vec2::new(1.0, 0.0);
        assert!((angle_between(Vec2::new(0.0, 1.0), x) - 90.0).abs() < 1e-12);
        assert!((angle_between(Vec2::new(0.0, -1.0), x) - 90.0).abs() < 1e-12);
        assert!((angle_between(Vec2::new(-1.0, 0.0), x) - 180.0).abs() < 1e-12);
        assert!((angle_between(Vec2::new(1.0, 1.0), x) - 45.0).abs() < 1e-12);
    }

    #[test]
    fn angle_between_zero_vector_is_nan() {
        assert!(angle_between(Vec2::ZERO, Vec2::new(1.0, 0.0)).is_nan());
    }

    #[test]
    fn signed_angle_follows_screen_orientation() {
        assert!((signed_angle(Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((signed_angle(Vec2::new(0.0, -1.0)) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let rotated = rotate_about(pt(2.0, 1.0), pt(1.0, 1.0), 90.0);
        assert!(approx_eq(rotated, pt(1.0, 2.0), 1e-12));
    }
}
