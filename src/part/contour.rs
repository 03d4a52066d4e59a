//! Contours: connected runs of segments

use crate::geometry::Segment;
use kurbo::{Affine, BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// An ordered, connected sequence of segments, open or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub segments: Vec<Segment>,
    pub closed: bool,
}

impl Contour {
    pub fn open(segments: Vec<Segment>) -> Self {
        Self { segments, closed: false }
    }

    pub fn closed(segments: Vec<Segment>) -> Self {
        Self { segments, closed: true }
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(Segment::start)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(Segment::end)
    }

    /// Traverse the contour the other way round.
    pub fn reversed(&self) -> Self {
        let segments = self.segments.iter().rev().map(Segment::reversed).collect();
        Self { segments, closed: self.closed }
    }

    pub fn transformed(&self, affine: Affine) -> Self {
        let segments = self.segments.iter().map(|s| s.transformed(affine)).collect();
        Self { segments, closed: self.closed }
    }

    /// Signed area enclosed by the contour (kurbo's sign convention).
    ///
    /// Only meaningful for closed contours.
    pub fn signed_area(&self) -> f64 {
        self.segments.iter().map(Segment::signed_area).sum()
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        self.segments
            .iter()
            .map(Segment::bounding_box)
            .reduce(|a, b| a.union(b))
    }

    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(start) = self.start() else {
            return path;
        };
        path.move_to(start);
        for segment in &self.segments {
            match segment {
                Segment::Line(line) => path.line_to(line.p1),
                Segment::Bezier(cubic) => path.curve_to(cubic.p1, cubic.p2, cubic.p3),
            }
        }
        if self.closed {
            path.close_path();
        }
        path
    }

    /// Whether both contours trace the same geometry within `tolerance`.
    pub fn approx_eq(&self, other: &Contour, tolerance: f64) -> bool {
        self.closed == other.closed
            && self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| {
                segment_points(a)
                    .iter()
                    .zip(segment_points(b).iter())
                    .all(|(p, q)| (*p - *q).hypot() <= tolerance)
                    && std::mem::discriminant(a) == std::mem::discriminant(b)
            })
    }
}

fn segment_points(segment: &Segment) -> Vec<Point> {
    match segment {
        Segment::Line(line) => vec![line.p0, line.p1],
        Segment::Bezier(c) => vec![c.p0, c.p1, c.p2, c.p3],
    }
}
