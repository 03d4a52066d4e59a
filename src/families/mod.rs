//! Typeface families
//!
//! Each family is a config record, a generator implementing
//! [`Generator`](crate::generator::Generator), and a `create_font`
//! constructor that derives the config from a style.
//!
//! The helpers here are outline patterns both families repeat.

pub mod kaleg;
pub mod vekos;

use crate::part::Part;
use anyhow::Result;

/// Closed loop from two quarter curves drawn from the left end up to the top.
///
/// `left` is used for the left half and `right` for the right half, so a
/// narrower `right` thins the right side of the loop. The loop starts at
/// the left end and runs down first, wound like an outer outline. Its
/// origin is the start point.
pub fn loop_from_quarters(left: &Part, right: &Part) -> Result<Part> {
    Part::seq([
        left.clone().reflect_ver(),
        right.clone().rotate_half_turn().reverse(),
        right.clone().reflect_hor(),
        left.clone().reverse(),
    ])
}

/// Ring between an outer loop and an inner loop inset by `thickness`.
///
/// Both loops are built by [`loop_from_quarters`]; the origin is the left
/// end of the outer loop.
pub fn ring_from_quarters(outer_left: &Part, outer_right: &Part, inner: &Part, thickness: f64) -> Result<Part> {
    let outer = loop_from_quarters(outer_left, outer_right)?;
    let inner = loop_from_quarters(inner, inner)?;
    Part::stack(outer, inner.reverse().translate((thickness, 0.0)))
}

/// Closed band: `side`, then `base`, then both back again.
///
/// With `side` pointing down and `base` pointing right this traces a
/// parallelogram wound like an outer outline, origin at the start.
pub fn band(side: &Part, base: &Part) -> Result<Part> {
    Part::seq([side.clone(), base.clone(), side.clone().reverse(), base.clone().reverse()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{handle, pt};

    fn quarter(width: f64, height: f64) -> Part {
        Part::bezier(pt(0.0, 0.0), handle(0.0, -height * 0.1), handle(-width, 0.0), pt(width, -height))
    }

    #[test]
    fn loop_is_closed_and_outer_wound() {
        let part = loop_from_quarters(&quarter(100.0, 150.0), &quarter(100.0, 150.0)).unwrap();
        assert!(part.is_closed());
        assert!(part.signed_area() < 0.0);
        let rect = part.bounding_box().unwrap();
        assert!((rect.width() - 200.0).abs() < 1e-9);
        assert!((rect.height() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn ring_has_a_hole() {
        let ring = ring_from_quarters(&quarter(100.0, 150.0), &quarter(100.0, 150.0), &quarter(80.0, 130.0), 20.0)
            .unwrap();
        assert_eq!(ring.contours().len(), 2);
        assert!(ring.contours()[0].signed_area() < 0.0);
        assert!(ring.contours()[1].signed_area() > 0.0);
    }

    #[test]
    fn band_is_a_rectangle() {
        let part = band(&Part::line_by((0.0, 30.0)), &Part::line_by((50.0, 0.0))).unwrap();
        assert!(part.is_closed());
        assert!((part.signed_area() + 1500.0).abs() < 1e-9);
    }
}
