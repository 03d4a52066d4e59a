//! Directed outline parts and the algebra that combines them
//!
//! A [`Part`] is a handful of contours plus a local origin. Every glyph is
//! assembled from parts by chaining them end to start ([`Part::seq`]),
//! layering filled shapes ([`Part::union`]) or cutting a counter out of a
//! shape ([`Part::stack`]). Reflections and rotations act about the origin,
//! and placement always uses geometry relative to it.
//!
//! Outer outlines are wound with negative signed area (kurbo convention, in
//! the y-down design space). A reflection flips the winding, so builders
//! that reflect a filled shape pair it with [`Part::reverse`].

mod boolean;
mod contour;

pub use contour::Contour;

use crate::geometry::{intersections, nearest_point, Segment};
use anyhow::{bail, ensure, Result};
use kurbo::{Affine, BezPath, Line, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Endpoints closer than this are treated as the same point.
pub const CLOSE_TOLERANCE: f64 = 1e-6;

/// Areas smaller than this carry no winding information.
const AREA_EPSILON: f64 = 1e-9;

/// Control point distance for a quarter circle of unit radius.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// One or more contours with a local origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    contours: Vec<Contour>,
    origin: Point,
}

impl Default for Part {
    fn default() -> Self {
        Self::empty()
    }
}

impl Part {
    /// A part with no contours at all.
    pub fn empty() -> Self {
        Self { contours: Vec::new(), origin: Point::ORIGIN }
    }

    /// An open straight piece from `p0` to `p1`.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self::from_contour(Contour::open(vec![Segment::line(p0, p1)]))
    }

    /// An open straight piece from the origin along `v`.
    pub fn line_by(v: impl Into<Vec2>) -> Self {
        Self::line(Point::ORIGIN, Point::ORIGIN + v.into())
    }

    /// An open cubic piece; handles are relative to their anchors.
    pub fn bezier(p0: Point, handle_out: Option<Vec2>, handle_in: Option<Vec2>, p1: Point) -> Self {
        Self::from_contour(Contour::open(vec![Segment::bezier(p0, handle_out, handle_in, p1)]))
    }

    /// A closed circle made of four cubic arcs, wound like an outer outline.
    ///
    /// Starts at the leftmost point and runs down first. The origin is the
    /// center.
    pub fn circle(center: Point, radius: f64) -> Self {
        let k = radius * KAPPA;
        let left = center + Vec2::new(-radius, 0.0);
        let bottom = center + Vec2::new(0.0, radius);
        let right = center + Vec2::new(radius, 0.0);
        let top = center + Vec2::new(0.0, -radius);
        let segments = vec![
            Segment::bezier(left, Some(Vec2::new(0.0, k)), Some(Vec2::new(-k, 0.0)), bottom),
            Segment::bezier(bottom, Some(Vec2::new(k, 0.0)), Some(Vec2::new(0.0, k)), right),
            Segment::bezier(right, Some(Vec2::new(0.0, -k)), Some(Vec2::new(k, 0.0)), top),
            Segment::bezier(top, Some(Vec2::new(-k, 0.0)), Some(Vec2::new(0.0, -k)), left),
        ];
        Self { contours: vec![Contour::closed(segments)], origin: center }
    }

    /// An axis-aligned rectangle with its top-left corner at the origin.
    pub fn rect(width: f64, height: f64) -> Self {
        let segments = vec![
            Segment::line(Point::new(0.0, 0.0), Point::new(0.0, height)),
            Segment::line(Point::new(0.0, height), Point::new(width, height)),
            Segment::line(Point::new(width, height), Point::new(width, 0.0)),
            Segment::line(Point::new(width, 0.0), Point::new(0.0, 0.0)),
        ];
        Self::from_contour(Contour::closed(segments))
    }

    pub fn from_contour(contour: Contour) -> Self {
        Self { contours: vec![contour], origin: Point::ORIGIN }
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Whether every contour is closed (vacuously true when empty).
    pub fn is_closed(&self) -> bool {
        self.contours.iter().all(|c| c.closed)
    }

    /// Contours with the origin moved to `(0, 0)`.
    pub fn local_contours(&self) -> Vec<Contour> {
        let shift = Affine::translate(-self.origin.to_vec2());
        self.contours.iter().map(|c| c.transformed(shift)).collect()
    }

    /// Every segment of every contour, relative to the origin.
    pub fn local_segments(&self) -> Vec<Segment> {
        self.local_contours().into_iter().flat_map(|c| c.segments).collect()
    }

    /// Start of the first contour, relative to the origin.
    pub fn start(&self) -> Option<Point> {
        self.contours.first().and_then(Contour::start).map(|p| p - self.origin.to_vec2())
    }

    /// End of the last contour, relative to the origin.
    pub fn end(&self) -> Option<Point> {
        self.contours.last().and_then(Contour::end).map(|p| p - self.origin.to_vec2())
    }

    /// Bounding box of the origin-relative geometry.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.contours
            .iter()
            .filter_map(Contour::bounding_box)
            .reduce(|a, b| a.union(b))
            .map(|rect| rect - self.origin.to_vec2())
    }

    /// Horizontal extent of the outline, `0` when empty.
    pub fn width(&self) -> f64 {
        self.bounding_box().map_or(0.0, |rect| rect.width())
    }

    /// Sum of the signed areas of all contours.
    pub fn signed_area(&self) -> f64 {
        self.contours.iter().map(Contour::signed_area).sum()
    }

    /// Origin-relative paths, one per contour.
    pub fn to_bezpaths(&self) -> Vec<BezPath> {
        self.local_contours().iter().map(Contour::to_bezpath).collect()
    }

    /// Point on the outline closest to `point` (both origin-relative).
    pub fn nearest_point(&self, point: Point) -> Option<Point> {
        nearest_point(&self.local_segments(), point)
    }

    /// Crossings of `line` with the outline, ordered along the line.
    pub fn intersections(&self, line: Line) -> Vec<Point> {
        intersections(line, &self.local_segments())
    }

    /// Transform geometry in place; the origin is not touched.
    pub fn apply_affine(&mut self, affine: Affine) {
        for contour in &mut self.contours {
            *contour = contour.transformed(affine);
        }
    }

    /// Transform geometry about the origin.
    fn transform_about_origin(mut self, affine: Affine) -> Self {
        let o = self.origin.to_vec2();
        self.apply_affine(Affine::translate(o) * affine * Affine::translate(-o));
        self
    }

    /// Traverse every contour in the opposite direction.
    pub fn reverse(mut self) -> Self {
        self.contours = self.contours.iter().rev().map(Contour::reversed).collect();
        self
    }

    /// Mirror across the vertical axis through the origin.
    pub fn reflect_hor(self) -> Self {
        self.transform_about_origin(Affine::FLIP_X)
    }

    /// Mirror across the horizontal axis through the origin.
    pub fn reflect_ver(self) -> Self {
        self.transform_about_origin(Affine::FLIP_Y)
    }

    pub fn rotate_half_turn(self) -> Self {
        self.transform_about_origin(Affine::scale(-1.0))
    }

    /// Rotate about the origin; positive angles turn clockwise on screen.
    pub fn rotate(self, degrees: f64) -> Self {
        self.transform_about_origin(Affine::rotate(degrees.to_radians()))
    }

    /// Shift the geometry; the origin stays put.
    pub fn translate(mut self, offset: impl Into<Vec2>) -> Self {
        self.apply_affine(Affine::translate(offset.into()));
        self
    }

    /// Relocate the origin without moving the geometry.
    pub fn move_origin(mut self, offset: impl Into<Vec2>) -> Self {
        self.origin += offset.into();
        self
    }

    /// Chain single-contour parts end to start into one contour.
    ///
    /// The result starts at the first part's start (origin-relative) and has
    /// its origin at `(0, 0)`. When the chain ends where it started, the
    /// contour is closed.
    pub fn seq(parts: impl IntoIterator<Item = Part>) -> Result<Part> {
        let parts: Vec<Part> = parts.into_iter().collect();
        ensure!(!parts.is_empty(), "seq: no parts to chain");
        let count = parts.len();
        let mut segments: Vec<Segment> = Vec::new();
        let mut cursor: Option<Point> = None;
        for (index, part) in parts.into_iter().enumerate() {
            let [contour]: [Contour; 1] = match part.local_contours().try_into() {
                Ok(single) => single,
                Err(contours) => bail!(
                    "seq: operand {} has {} contours, expected exactly one",
                    index,
                    contours.len()
                ),
            };
            if contour.closed && count > 1 {
                bail!("seq: operand {} is closed and cannot be chained", index);
            }
            let Some(start) = contour.start() else {
                bail!("seq: operand {} has no segments", index);
            };
            let shift = match cursor {
                Some(end) => end - start,
                None => Vec2::ZERO,
            };
            let moved = contour.transformed(Affine::translate(shift));
            cursor = moved.end();
            segments.extend(moved.segments);
        }
        let mut contour = Contour::open(segments);
        if let (Some(start), Some(end)) = (contour.start(), contour.end()) {
            if (end - start).hypot() <= CLOSE_TOLERANCE {
                snap_end(&mut contour, start);
                contour.closed = true;
            }
        }
        Ok(Part::from_contour(contour))
    }

    /// Merge closed parts into one filled outline.
    ///
    /// Operands are placed relative to their origins. Every operand with
    /// area must be wound the same way; empty parts are skipped. When any
    /// two operands overlap, the overlaps are removed so the result has one
    /// contour per filled region and one per counter. Operands that are
    /// apart are kept as drawn.
    pub fn union(parts: impl IntoIterator<Item = Part>) -> Result<Part> {
        let mut operands: Vec<Vec<Contour>> = Vec::new();
        let mut sign: Option<(usize, f64)> = None;
        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            ensure!(part.is_closed(), "union: operand {} has an open contour", index);
            let area = part.signed_area();
            if area.abs() > AREA_EPSILON {
                match sign {
                    Some((first, s)) if s.signum() != area.signum() => bail!(
                        "union: operand {} is wound opposite to operand {}; pair the reflection with reverse()",
                        index,
                        first
                    ),
                    Some(_) => {}
                    None => sign = Some((index, area)),
                }
            }
            operands.push(part.local_contours());
        }
        let contours = match operands.split_first() {
            Some((first, rest)) if any_overlap(&operands) => boolean::union_contours(first, &rest.concat())?,
            _ => operands.concat(),
        };
        Ok(Part { contours, origin: Point::ORIGIN })
    }

    /// Cut `inner` out of `outer`, giving a ring.
    pub fn stack(outer: Part, inner: Part) -> Result<Part> {
        let outer_contours = outer.local_contours();
        let inner_contours = inner.local_contours();
        ensure!(
            outer_contours.len() == 1 && inner_contours.len() == 1,
            "stack: outer and inner must each be one contour"
        );
        ensure!(
            outer.is_closed() && inner.is_closed(),
            "stack: outer and inner must be closed"
        );
        let outer_area = outer.signed_area();
        let inner_area = inner.signed_area();
        ensure!(
            outer_area.signum() != inner_area.signum(),
            "stack: inner must be wound opposite to outer (outer {:.1}, inner {:.1})",
            outer_area,
            inner_area
        );
        ensure!(
            inner_area.abs() < outer_area.abs(),
            "stack: inner area {:.1} is not smaller than outer area {:.1}",
            inner_area.abs(),
            outer_area.abs()
        );
        let mut contours = outer_contours;
        contours.extend(inner_contours);
        Ok(Part { contours, origin: Point::ORIGIN })
    }

    /// Whether both parts trace the same origin-relative geometry.
    pub fn approx_eq(&self, other: &Part, tolerance: f64) -> bool {
        let ours = self.local_contours();
        let theirs = other.local_contours();
        ours.len() == theirs.len() && ours.iter().zip(&theirs).all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

/// Whether the bounding boxes of any two operands touch or overlap.
fn any_overlap(operands: &[Vec<Contour>]) -> bool {
    let boxes: Vec<Rect> = operands
        .iter()
        .filter_map(|contours| contours.iter().filter_map(Contour::bounding_box).reduce(|a, b| a.union(b)))
        .collect();
    boxes.iter().enumerate().any(|(i, a)| {
        boxes[i + 1..]
            .iter()
            .any(|b| a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1)
    })
}

fn snap_end(contour: &mut Contour, start: Point) {
    if let Some(last) = contour.segments.last_mut() {
        match last {
            Segment::Line(line) => line.p1 = start,
            Segment::Bezier(cubic) => {
                let delta = start - cubic.p3;
                cubic.p2 += delta;
                cubic.p3 = start;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{handle, pt};

    const EPS: f64 = 1e-9;

    fn sample() -> Part {
        Part::bezier(pt(0.0, 0.0), handle(0.0, 40.0), handle(-30.0, 0.0), pt(80.0, 100.0))
            .move_origin((20.0, 50.0))
    }

    fn square(size: f64) -> Part {
        Part::rect(size, size)
    }

    #[test]
    fn reverse_twice_is_identity() {
        let part = sample();
        assert!(part.clone().reverse().reverse().approx_eq(&part, EPS));
    }

    #[test]
    fn reflect_twice_is_identity() {
        let part = sample();
        assert!(part.clone().reflect_hor().reflect_hor().approx_eq(&part, EPS));
        assert!(part.clone().reflect_ver().reflect_ver().approx_eq(&part, EPS));
    }

    #[test]
    fn half_turn_twice_is_identity() {
        let part = sample();
        assert!(part.clone().rotate_half_turn().rotate_half_turn().approx_eq(&part, EPS));
    }

    #[test]
    fn translate_back_and_forth_is_identity() {
        let part = sample();
        let moved = part.clone().translate((13.5, -7.25)).translate((-13.5, 7.25));
        assert!(moved.approx_eq(&part, EPS));
    }

    #[test]
    fn reflection_is_about_origin() {
        let part = Part::line(pt(10.0, 0.0), pt(30.0, 0.0)).move_origin((10.0, 0.0));
        let reflected = part.reflect_hor();
        assert_eq!(reflected.start(), Some(pt(0.0, 0.0)));
        assert_eq!(reflected.end(), Some(pt(-20.0, 0.0)));
    }

    #[test]
    fn move_origin_keeps_geometry() {
        let part = square(10.0);
        let moved = part.clone().move_origin((5.0, 5.0));
        assert_eq!(moved.contours(), part.contours());
        assert_eq!(moved.start(), Some(pt(-5.0, -5.0)));
    }

    #[test]
    fn reflection_flips_winding_and_reverse_restores_it() {
        let part = square(10.0);
        assert!(part.signed_area() < 0.0);
        assert!(part.clone().reflect_hor().signed_area() > 0.0);
        assert!(part.clone().reflect_hor().reverse().signed_area() < 0.0);
        assert!(part.rotate_half_turn().signed_area() < 0.0);
    }

    #[test]
    fn circle_is_wound_like_outer_outlines() {
        let circle = Part::circle(pt(0.0, 0.0), 50.0);
        let area = circle.signed_area();
        assert!(area < 0.0);
        assert!((area.abs() - std::f64::consts::PI * 2500.0).abs() < 10.0);
        let rect = circle.bounding_box().expect("non-empty");
        assert!((rect.width() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn seq_chains_end_to_start() {
        let chained = Part::seq([
            Part::line_by((0.0, 10.0)),
            Part::line_by((20.0, 0.0)).translate((100.0, 100.0)),
            Part::line_by((0.0, -10.0)),
        ])
        .expect("chain");
        assert_eq!(chained.contours().len(), 1);
        assert!(!chained.is_closed());
        assert_eq!(chained.end(), Some(pt(20.0, 0.0)));
    }

    #[test]
    fn seq_closes_a_loop() {
        let chained = Part::seq([
            Part::line_by((0.0, 10.0)),
            Part::line_by((10.0, 0.0)),
            Part::line_by((0.0, -10.0)),
            Part::line_by((-10.0, 0.0)),
        ])
        .expect("chain");
        assert!(chained.is_closed());
        assert!((chained.signed_area() + 100.0).abs() < 1e-9);
    }

    #[test]
    fn seq_rejects_closed_operands_in_a_chain() {
        let result = Part::seq([square(10.0), Part::line_by((1.0, 0.0))]);
        assert!(result.is_err());
    }

    #[test]
    fn seq_rejects_multi_contour_operands() {
        let ring = Part::stack(square(10.0), square(4.0).reflect_hor().translate((7.0, 3.0)))
            .expect("ring");
        let error = Part::seq([ring]).unwrap_err();
        assert!(error.to_string().contains("expected exactly one"));
    }

    #[test]
    fn union_rejects_mixed_winding() {
        let error = Part::union([square(10.0), square(10.0).reflect_hor()]).unwrap_err();
        assert!(error.to_string().contains("reverse()"));
    }

    #[test]
    fn union_rejects_open_contours() {
        assert!(Part::union([square(10.0), Part::line_by((5.0, 0.0))]).is_err());
    }

    #[test]
    fn union_skips_empty_parts() {
        let joined = Part::union([Part::empty(), square(10.0), square(5.0).translate((20.0, 0.0))])
            .expect("union");
        assert_eq!(joined.contours().len(), 2);
        assert!((joined.width() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn union_merges_overlapping_squares() {
        let merged = Part::union([square(10.0), square(10.0).translate((5.0, 5.0))]).expect("union");
        assert_eq!(merged.contours().len(), 1);
        assert!(merged.is_closed());
        assert!((merged.signed_area() + 175.0).abs() < 1e-4);
        let rect = merged.bounding_box().expect("outline");
        assert!((rect.width() - 15.0).abs() < 1e-4);
        assert!((rect.height() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn union_keeps_a_stroke_through_a_ring_filled() {
        let ring = Part::stack(square(30.0), square(10.0).translate((10.0, 10.0)).reverse()).expect("ring");
        let bar = Part::rect(40.0, 4.0).translate((-5.0, 13.0));
        let merged = Part::union([ring, bar]).expect("union");
        // The bar splits the counter in two.
        assert_eq!(merged.contours().len(), 3);
        assert!((merged.signed_area() + (800.0 + 40.0 + 40.0)).abs() < 1e-4);
    }

    #[test]
    fn stack_requires_opposite_winding() {
        assert!(Part::stack(square(10.0), square(4.0)).is_err());
        assert!(Part::stack(square(4.0), square(10.0).reverse()).is_err());
        let ring = Part::stack(square(10.0), square(4.0).reverse()).expect("ring");
        assert!((ring.signed_area() + 84.0).abs() < 1e-9);
    }

    #[test]
    fn clones_are_independent() {
        let original = square(10.0);
        let mut copy = original.clone();
        copy.apply_affine(Affine::translate((50.0, 0.0)));
        assert_eq!(original.start(), Some(pt(0.0, 0.0)));
        assert_eq!(copy.start(), Some(pt(50.0, 0.0)));
    }
}
