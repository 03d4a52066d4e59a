//! Outline segments
//!
//! A [`Segment`] is one directed piece of a contour. Bezier handles are
//! written relative to their anchors, the way the glyph builders think about
//! them ("leave the start going straight up by `h`").

use kurbo::{Affine, CubicBez, Line, ParamCurve, ParamCurveArea, ParamCurveExtrema, PathSeg, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A directed line or cubic bezier segment.
///
/// There is no circle variant: circles are built as four cubic arcs by
/// [`Part::circle`](crate::part::Part::circle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Line(Line),
    Bezier(CubicBez),
}

impl Segment {
    /// Straight segment from `p0` to `p1`.
    pub fn line(p0: Point, p1: Point) -> Self {
        Segment::Line(Line::new(p0, p1))
    }

    /// Cubic bezier from `p0` to `p1` with relative handles.
    ///
    /// `handle_out` is relative to `p0` and `handle_in` is relative to `p1`.
    /// An omitted handle has zero length: its control point sits on the anchor.
    pub fn bezier(p0: Point, handle_out: Option<Vec2>, handle_in: Option<Vec2>, p1: Point) -> Self {
        let c0 = p0 + handle_out.unwrap_or(Vec2::ZERO);
        let c1 = p1 + handle_in.unwrap_or(Vec2::ZERO);
        Segment::Bezier(CubicBez::new(p0, c0, c1, p1))
    }

    pub fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Bezier(cubic) => cubic.p0,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Bezier(cubic) => cubic.p3,
        }
    }

    /// The same segment traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        match *self {
            Segment::Line(line) => Segment::Line(Line::new(line.p1, line.p0)),
            Segment::Bezier(c) => Segment::Bezier(CubicBez::new(c.p3, c.p2, c.p1, c.p0)),
        }
    }

    /// Apply an affine transform to every control point.
    pub fn transformed(&self, affine: Affine) -> Self {
        match *self {
            Segment::Line(line) => Segment::Line(Line::new(affine * line.p0, affine * line.p1)),
            Segment::Bezier(c) => Segment::Bezier(CubicBez::new(
                affine * c.p0,
                affine * c.p1,
                affine * c.p2,
                affine * c.p3,
            )),
        }
    }

    /// Signed area contribution (Green's theorem), kurbo's sign convention.
    pub fn signed_area(&self) -> f64 {
        self.to_path_seg().signed_area()
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Segment::Line(line) => Rect::from_points(line.p0, line.p1),
            Segment::Bezier(cubic) => cubic.bounding_box(),
        }
    }

    pub fn eval(&self, t: f64) -> Point {
        self.to_path_seg().eval(t)
    }

    pub fn to_path_seg(&self) -> PathSeg {
        match *self {
            Segment::Line(line) => PathSeg::Line(line),
            Segment::Bezier(cubic) => PathSeg::Cubic(cubic),
        }
    }

    pub fn from_path_seg(seg: PathSeg) -> Self {
        match seg {
            PathSeg::Line(line) => Segment::Line(line),
            PathSeg::Quad(quad) => Segment::Bezier(quad.raise()),
            PathSeg::Cubic(cubic) => Segment::Bezier(cubic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_handle_sits_on_anchor() {
        let seg = Segment::bezier(
            Point::new(0.0, 0.0),
            None,
            Some(Vec2::new(0.0, -60.0)),
            Point::new(20.0, 100.0),
        );
        let Segment::Bezier(cubic) = seg else {
            panic!("expected a bezier");
        };
        assert_eq!(cubic.p1, Point::new(0.0, 0.0));
        assert_eq!(cubic.p2, Point::new(20.0, 40.0));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let seg = Segment::bezier(
            Point::new(0.0, 0.0),
            Some(Vec2::new(0.0, 10.0)),
            Some(Vec2::new(-10.0, 0.0)),
            Point::new(30.0, 40.0),
        );
        let reversed = seg.reversed();
        assert_eq!(reversed.start(), seg.end());
        assert_eq!(reversed.end(), seg.start());
        assert_eq!(reversed.reversed(), seg);
    }
}
