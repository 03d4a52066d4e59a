//! Geometry utility functions
//!
//! Nearest-point and intersection queries over runs of [`Segment`]s. The
//! stroke solver uses the nearest point to measure local stroke width, and
//! glyph builders intersect guide lines with outlines to size strokes.

use super::segment::Segment;
use kurbo::{Line, ParamCurve, ParamCurveNearest, Point};

/// Accuracy passed to kurbo's nearest-point solver.
pub const NEAREST_ACCURACY: f64 = 1e-9;

/// The point on `segments` closest to `point`, or `None` when empty.
pub fn nearest_point(segments: &[Segment], point: Point) -> Option<Point> {
    segments
        .iter()
        .map(|segment| {
            let seg = segment.to_path_seg();
            let nearest = seg.nearest(point, NEAREST_ACCURACY);
            (nearest.distance_sq, seg.eval(nearest.t))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p)
}

/// All crossings of `line` with `segments`, ordered along the line.
pub fn intersections(line: Line, segments: &[Segment]) -> Vec<Point> {
    let mut hits: Vec<(f64, Point)> = segments
        .iter()
        .flat_map(|segment| {
            segment
                .to_path_seg()
                .intersect_line(line)
                .into_iter()
                .map(move |hit| (hit.line_t, line.eval(hit.line_t)))
        })
        .collect();
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::pt;

    #[test]
    fn nearest_point_on_line() {
        let segments = [Segment::line(pt(0.0, 0.0), pt(100.0, 0.0))];
        let nearest = nearest_point(&segments, pt(30.0, 40.0)).expect("non-empty");
        assert!((nearest.x - 30.0).abs() < 1e-6);
        assert!(nearest.y.abs() < 1e-6);
    }

    #[test]
    fn nearest_point_picks_closest_segment() {
        let segments = [
            Segment::line(pt(0.0, 0.0), pt(100.0, 0.0)),
            Segment::line(pt(0.0, 10.0), pt(100.0, 10.0)),
        ];
        let nearest = nearest_point(&segments, pt(50.0, 8.0)).expect("non-empty");
        assert!((nearest.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn nearest_point_of_nothing() {
        let empty: &[Segment] = &[];
        assert!(nearest_point(empty, pt(0.0, 0.0)).is_none());
    }

    #[test]
    fn intersections_are_ordered_along_the_line() {
        // Two vertical bars crossed by a horizontal probe, listed far bar first.
        let segments = [
            Segment::line(pt(80.0, -50.0), pt(80.0, 50.0)),
            Segment::line(pt(20.0, -50.0), pt(20.0, 50.0)),
        ];
        let hits = intersections(Line::new(pt(0.0, 0.0), pt(100.0, 0.0)), &segments);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].x - 20.0).abs() < 1e-9);
        assert!((hits[1].x - 80.0).abs() < 1e-9);
    }
}
