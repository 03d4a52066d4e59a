//! Conversion of generated outlines to the norad UFO model
//!
//! Glyphs are drawn in a y-down design space with the baseline at zero.
//! UFO is y-up, so every point is flipped on the way out. The flip turns
//! outer outlines counter-clockwise, which is the orientation UFO expects;
//! outlines that still come out clockwise overall are reversed.

use crate::font::{Font, Glyph};
use crate::geometry::Segment;
use crate::part::Contour;
use anyhow::{Context, Result};
use kurbo::{Affine, Point};
use norad::{ContourPoint, PointType};

/// Contours of `glyph` in UFO coordinates.
pub fn to_font_space(glyph: &Glyph) -> Vec<Contour> {
    let flipped: Vec<Contour> = glyph
        .outline
        .local_contours()
        .iter()
        .map(|contour| contour.transformed(Affine::FLIP_Y))
        .collect();
    let area: f64 = flipped.iter().map(Contour::signed_area).sum();
    if area < 0.0 {
        flipped.iter().map(Contour::reversed).collect()
    } else {
        flipped
    }
}

/// Glyph name for `character`: the character itself for ASCII letters,
/// `space` for U+0020 and `uniXXXX` otherwise.
pub fn glyph_name(character: char) -> String {
    match character {
        ' ' => "space".to_string(),
        c if c.is_ascii_alphabetic() => c.to_string(),
        c => format!("uni{:04X}", c as u32),
    }
}

fn point(p: Point, typ: PointType) -> ContourPoint {
    ContourPoint::new(p.x, p.y, typ, false, None, None)
}

/// UFO point list for one contour.
///
/// A closed contour lists only the end points of its segments, so its
/// start appears once, as the end of the last segment. An open contour
/// starts with a move point.
pub fn contour_to_norad(contour: &Contour) -> norad::Contour {
    let mut points = Vec::with_capacity(contour.segments.len() * 3 + 1);
    if !contour.closed {
        if let Some(start) = contour.start() {
            points.push(point(start, PointType::Move));
        }
    }
    for segment in &contour.segments {
        match segment {
            Segment::Line(line) => points.push(point(line.p1, PointType::Line)),
            Segment::Bezier(cubic) => {
                points.push(point(cubic.p1, PointType::OffCurve));
                points.push(point(cubic.p2, PointType::OffCurve));
                points.push(point(cubic.p3, PointType::Curve));
            }
        }
    }
    norad::Contour::new(points, None)
}

/// A norad glyph carrying the outline, advance width and codepoint.
pub fn glyph_to_norad(character: char, glyph: &Glyph) -> norad::Glyph {
    let mut norad_glyph = norad::Glyph::new(&glyph_name(character));
    norad_glyph.width = glyph.width;
    norad_glyph.codepoints.insert(character);
    norad_glyph.contours = to_font_space(glyph).iter().map(contour_to_norad).collect();
    norad_glyph
}

/// Names, version and vertical metrics of `font` as UFO font info.
pub fn font_info(font: &Font) -> Result<norad::FontInfo> {
    let metrics = font.generator.metrics();
    let mut info = norad::FontInfo::default();
    info.family_name = Some(font.extended_family_name());
    info.style_name = Some(font.style.style_name());
    info.postscript_font_name = Some(font.postscript_name());
    info.postscript_full_name = Some(font.full_name());
    info.copyright = Some(font.copyright().to_string());
    let (major, minor) = parse_version(font.version())?;
    info.version_major = Some(major);
    info.version_minor = Some(minor);
    info.units_per_em = norad::fontinfo::NonNegativeIntegerOrFloat::new(metrics.em);
    info.ascender = Some(metrics.ascent);
    info.descender = Some(-metrics.descent);
    info.open_type_os2_weight_class = Some(u32::from(font.style.weight_number()));
    Ok(info)
}

/// Major and minor numbers of a dotted version string.
fn parse_version(version: &str) -> Result<(i32, u32)> {
    let mut numbers = version.split('.');
    let major = numbers
        .next()
        .and_then(|n| n.parse::<i32>().ok())
        .with_context(|| format!("invalid font version {version:?}"))?;
    let minor = numbers.next().map_or(Ok(0), str::parse::<u32>).with_context(|| format!("invalid font version {version:?}"))?;
    Ok((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Bearings, Metrics};
    use crate::part::Part;

    fn glyph(part: Part) -> Glyph {
        let metrics = Metrics { em: 1000.0, ascent: 760.0, descent: 240.0 };
        Glyph::by_bearings(part, metrics, Bearings::symmetric(10.0))
    }

    #[test]
    fn outers_turn_counter_clockwise() {
        let glyph = glyph(Part::rect(100.0, 200.0).translate((0.0, -200.0)));
        let contours = to_font_space(&glyph);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].signed_area() > 0.0);
        let rect = contours[0].bounding_box().expect("contour");
        assert!((rect.y0 - 0.0).abs() < 1e-9);
        assert!((rect.y1 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn closed_contours_list_each_point_once() {
        let glyph = glyph(Part::rect(100.0, 100.0));
        let contour = contour_to_norad(&to_font_space(&glyph)[0]);
        assert_eq!(contour.points.len(), 4);
        assert!(contour.points.iter().all(|p| p.typ == PointType::Line));
    }

    #[test]
    fn curves_carry_two_off_curve_points() {
        let glyph = glyph(Part::circle(kurbo::Point::new(0.0, 0.0), 50.0));
        let contour = contour_to_norad(&to_font_space(&glyph)[0]);
        assert_eq!(contour.points.len(), 12);
        assert_eq!(contour.points.iter().filter(|p| p.typ == PointType::OffCurve).count(), 8);
    }

    #[test]
    fn glyph_names() {
        assert_eq!(glyph_name('a'), "a");
        assert_eq!(glyph_name('A'), "A");
        assert_eq!(glyph_name(' '), "space");
        assert_eq!(glyph_name('0'), "uni0030");
        assert_eq!(glyph_name('á'), "uni00E1");
    }

    #[test]
    fn versions() {
        assert_eq!(parse_version("1.2.0").unwrap(), (1, 2));
        assert_eq!(parse_version("3").unwrap(), (3, 0));
        assert!(parse_version("x.1").is_err());
    }
}
