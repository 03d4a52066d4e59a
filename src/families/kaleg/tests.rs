use super::*;
use crate::font::{FontStretch, FontWeight};

fn generator(edge_join: EdgeJoin, beaked: bool) -> KalegGenerator {
    let style = FontStyle::upright(FontWeight::Regular, FontStretch::Normal);
    KalegGenerator::new(KalegConfig::from_style(&style, edge_join, beaked))
}

fn build(generator: &KalegGenerator, character: char) -> Glyph {
    generator
        .glyph(character)
        .unwrap_or_else(|error| panic!("{character:?} failed: {error:#}"))
        .unwrap_or_else(|| panic!("{character:?} is not registered"))
}

#[test]
fn config_from_style() {
    let style = FontStyle::upright(FontWeight::Regular, FontStretch::Normal);
    let plain = KalegConfig::from_style(&style, EdgeJoin::Miter, false);
    assert!((plain.weight_const - 280.0 / 300.0).abs() < 1e-12);
    assert_eq!(plain.edge_ratio, plain.contrast_ratio);
    assert_eq!(plain.beak_ratio, 0.0);
    assert_eq!(plain.tail_ratio, 0.0);
    let beaked = KalegConfig::from_style(&style, EdgeJoin::Miter, true);
    assert_eq!(beaked.beak_ratio, 0.2);
    assert_eq!(beaked.tail_ratio, 0.3);
    assert_eq!(beaked.leg_ratio, 0.0);
}

#[test]
fn family_names() {
    assert_eq!(family_name(EdgeJoin::Miter, false), "Kaleg Miter");
    assert_eq!(family_name(EdgeJoin::Round, true), "Kaleg Round Beaked");
    let font = create_font(FontStyle::upright(FontWeight::Bold, FontStretch::Normal), EdgeJoin::Bevel, false);
    assert_eq!(font.full_name(), "Kaleg Bevel Bold");
    assert_eq!(font.version(), "1.0.0");
}

#[test]
fn o_is_one_frame_wide() {
    let generator = generator(EdgeJoin::Miter, false);
    let frame_width = generator.config().weight_const * 60.0 + 380.0;
    let glyph = build(&generator, 'o');
    assert!((glyph.outline_width() - frame_width).abs() < 1e-4);
    assert!((generator.frame_width() - frame_width).abs() < 1e-12);
}

#[test]
fn every_variant_builds_every_character() {
    for edge_join in [EdgeJoin::Miter, EdgeJoin::Bevel, EdgeJoin::Round] {
        for beaked in [false, true] {
            let generator = generator(edge_join, beaked);
            for character in generator.chars() {
                let glyph = build(&generator, character);
                let expected = glyph.bearings.left + glyph.outline_width() + glyph.bearings.right;
                assert!((glyph.width - expected).abs() < 1e-6, "{character:?} width");
                if !glyph.outline.is_empty() {
                    assert!(glyph.outline.signed_area() < 0.0, "{character:?} in {edge_join} is not filled");
                }
            }
        }
    }
}

#[test]
fn corners_trim_the_frame() {
    let area = |edge_join| build(&generator(edge_join, false), 'u').outline.signed_area().abs();
    let miter = area(EdgeJoin::Miter);
    let round = area(EdgeJoin::Round);
    let bevel = area(EdgeJoin::Bevel);
    assert!(miter > round);
    assert!(round > bevel);
}

#[test]
fn beaks_only_in_beaked_styles() {
    let plain = generator(EdgeJoin::Miter, false);
    let beaked = generator(EdgeJoin::Miter, true);
    assert!(plain.part_beak().unwrap().is_empty());
    assert!(plain.part_leg().unwrap().is_empty());
    assert!(!beaked.part_beak().unwrap().is_empty());
    assert!(beaked.part_leg().unwrap().is_empty());
    assert!(build(&beaked, 'i').outline.signed_area().abs() > build(&plain, 'i').outline.signed_area().abs());
}

#[test]
fn beaked_tails_curl() {
    let plain = build(&generator(EdgeJoin::Miter, false), 'j');
    let beaked = build(&generator(EdgeJoin::Miter, true), 'j');
    assert!(beaked.outline_width() > plain.outline_width());
}

#[test]
fn stroke_joined_to_bowl_is_thinned() {
    let generator = generator(EdgeJoin::Miter, false);
    let glyph = build(&generator, 'a');
    // The stem sits flush with the bowl's right side.
    assert!((glyph.outline_width() - generator.frame_width()).abs() < 1e-4);
}

#[test]
fn frames_are_closed_single_contours() {
    let generator = generator(EdgeJoin::Round, false);
    for part in [generator.part_cup().unwrap(), generator.part_side().unwrap(), generator.part_ell().unwrap()] {
        assert_eq!(part.contours().len(), 1);
        assert!(part.is_closed());
        assert!(part.signed_area() < 0.0);
    }
}

#[test]
fn missing_letter_is_absent() {
    assert!(generator(EdgeJoin::Miter, false).glyph('x').unwrap().is_none());
}

#[test]
fn frames_are_cached() {
    let generator = generator(EdgeJoin::Round, true);
    build(&generator, 'n');
    let count = generator.memo().part_count();
    build(&generator, 'u');
    build(&generator, 'N');
    assert_eq!(generator.memo().part_count(), count);
}
