//! Overlap removal for compound outlines
//!
//! [`Part::union`](super::Part::union) hands overlapping operands to
//! linesweeper and reads the merged contours back. Outer contours come back
//! wound with negative area and counters with positive area.

use super::{snap_end, Contour};
use crate::geometry::Segment;
use anyhow::{anyhow, Result};
use kurbo::{BezPath, ParamCurveExtrema, Point, Shape};
use linesweeper::{binary_op, BinaryOp, FillRule};

/// Boolean output pieces shorter than this are dropped.
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// Union of two compound outlines, each filled by the nonzero rule.
pub(super) fn union_contours(a: &[Contour], b: &[Contour]) -> Result<Vec<Contour>> {
    let merged = binary_op(&to_path(a), &to_path(b), FillRule::NonZero, BinaryOp::Union)
        .map_err(|error| anyhow!("union: overlap removal failed: {error:?}"))?;
    let paths: Vec<BezPath> = merged.contours().map(|contour| contour.path.clone()).collect();
    let contours: Vec<(usize, Contour)> = paths
        .iter()
        .enumerate()
        .filter_map(|(index, path)| from_path(path).map(|contour| (index, contour)))
        .collect();
    Ok(orient(contours, &paths))
}

fn to_path(contours: &[Contour]) -> BezPath {
    let mut path = BezPath::new();
    for contour in contours {
        for element in contour.to_bezpath().elements() {
            path.push(*element);
        }
    }
    path
}

fn from_path(path: &BezPath) -> Option<Contour> {
    let segments: Vec<Segment> = path
        .segments()
        .filter(|seg| {
            let rect = ParamCurveExtrema::bounding_box(seg);
            rect.width() + rect.height() > MIN_SEGMENT_LENGTH
        })
        .map(Segment::from_path_seg)
        .collect();
    let start = segments.first()?.start();
    let mut contour = Contour::closed(segments);
    snap_end(&mut contour, start);
    Some(contour)
}

/// Wind each contour by how deeply it is nested: even depth is filled.
fn orient(contours: Vec<(usize, Contour)>, paths: &[BezPath]) -> Vec<Contour> {
    contours
        .into_iter()
        .map(|(own, contour)| {
            let depth = contour.segments.first().map_or(0, |segment| {
                let point: Point = segment.eval(0.5);
                paths
                    .iter()
                    .enumerate()
                    .filter(|&(index, path)| index != own && path.winding(point) != 0)
                    .count()
            });
            let area = contour.signed_area();
            let filled = depth % 2 == 0;
            if (filled && area > 0.0) || (!filled && area < 0.0) {
                contour.reversed()
            } else {
                contour
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;

    fn square(size: f64) -> Vec<Contour> {
        Part::rect(size, size).local_contours()
    }

    fn moved(contours: Vec<Contour>, x: f64, y: f64) -> Vec<Contour> {
        contours.iter().map(|c| c.transformed(kurbo::Affine::translate((x, y)))).collect()
    }

    #[test]
    fn disjoint_squares_stay_apart() {
        let merged = union_contours(&square(10.0), &moved(square(10.0), 30.0, 0.0)).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|c| c.closed && c.signed_area() < 0.0));
    }

    #[test]
    fn counters_are_wound_against_the_outline() {
        let ring = Part::stack(Part::rect(30.0, 30.0), Part::rect(10.0, 10.0).translate((10.0, 10.0)).reverse())
            .unwrap()
            .local_contours();
        let bar = moved(square(4.0), 28.0, 13.0);
        let merged = union_contours(&ring, &bar).unwrap();
        assert_eq!(merged.len(), 2);
        let total: f64 = merged.iter().map(Contour::signed_area).sum();
        assert!((total + 800.0 + 4.0 * 2.0).abs() < 1e-4);
        assert_eq!(merged.iter().filter(|c| c.signed_area() > 0.0).count(), 1);
    }
}
