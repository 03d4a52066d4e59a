use super::*;
use crate::font::{FontStretch, FontWeight};

fn regular() -> VekosGenerator {
    let style = FontStyle::upright(FontWeight::Regular, FontStretch::Normal);
    VekosGenerator::new(VekosConfig::from_style(&style, false))
}

fn build(generator: &VekosGenerator, character: char) -> Glyph {
    generator
        .glyph(character)
        .unwrap_or_else(|error| panic!("{character:?} failed: {error:#}"))
        .unwrap_or_else(|| panic!("{character:?} is not registered"))
}

#[test]
fn regular_config_constants() {
    let generator = regular();
    assert!((generator.config().weight_const - 1.0).abs() < 1e-12);
    assert!((generator.config().stretch_const - 1.0).abs() < 1e-12);
    assert!((generator.hor_thickness() - 100.0).abs() < 1e-9);
    assert!((generator.ver_thickness() - 75.0).abs() < 1e-9);
    assert!((generator.bowl_width() - 450.0).abs() < 1e-9);
}

#[test]
fn at_is_one_bowl_wide() {
    let glyph = build(&regular(), 'a');
    assert!((glyph.outline_width() - 450.0).abs() < 1e-4);
    assert!((glyph.width - 531.0).abs() < 1e-4);
}

#[test]
fn xal_shares_one_stroke_between_its_bowls() {
    let glyph = build(&regular(), 'x');
    assert!((glyph.outline_width() - 710.0).abs() < 1e-4);
}

#[test]
fn uppercase_matches_lowercase() {
    let generator = regular();
    let lower = build(&generator, 'k');
    let upper = build(&generator, 'K');
    assert!(lower.outline.approx_eq(&upper.outline, 1e-9));
    assert_eq!(lower.width, upper.width);
}

#[test]
fn every_registered_character_builds() {
    let generator = regular();
    let chars = generator.chars();
    assert!(chars.len() > 100);
    for character in chars {
        let glyph = build(&generator, character);
        assert!(glyph.outline.contours().iter().all(|contour| contour.closed), "{character:?} has an open contour");
        let expected = glyph.bearings.left + glyph.outline_width() + glyph.bearings.right;
        assert!((glyph.width - expected).abs() < 1e-6, "{character:?} width");
        if !glyph.outline.is_empty() {
            assert!(glyph.outline.signed_area() < 0.0, "{character:?} is not filled");
            let rect = glyph.outline.bounding_box().expect("non-empty outline");
            assert!((rect.x0 - glyph.bearings.left).abs() < 1e-6, "{character:?} left bearing");
        }
    }
}

#[test]
fn voiced_letters_carry_the_transphone() {
    let generator = regular();
    let les = build(&generator, 'l');
    let res = build(&generator, 'r');
    assert!(res.width > les.width);
    assert!(res.outline.signed_area().abs() > les.outline.signed_area().abs());
}

#[test]
fn turned_letters_keep_their_width() {
    let generator = regular();
    assert!((build(&generator, 'l').width - build(&generator, 'p').width).abs() < 1e-4);
    assert!((build(&generator, 'i').width - build(&generator, 'e').width).abs() < 1e-4);
}

#[test]
fn acute_sits_above_the_mean_line() {
    let generator = regular();
    let glyph = build(&generator, 'á');
    let rect = glyph.outline.bounding_box().expect("outline");
    assert!(rect.y0 < -MEAN - OVERSHOOT);
}

#[test]
fn turned_vowels_carry_their_marks() {
    let generator = regular();
    let plain = build(&generator, 'o').outline.signed_area().abs();
    for character in ['ó', 'ò', 'ô'] {
        assert!(build(&generator, character).outline.signed_area().abs() > plain, "{character:?}");
    }
}

#[test]
fn space_is_empty() {
    let glyph = build(&regular(), ' ');
    assert!(glyph.outline.is_empty());
    assert!((glyph.width - 450.0 * 0.55).abs() < 1e-9);
}

#[test]
fn unknown_character_has_no_glyph() {
    assert!(regular().glyph('w').expect("lookup").is_none());
}

#[test]
fn cached_parts_are_independent_copies() {
    let generator = regular();
    let first = generator.part_bowl().expect("bowl");
    let moved = first.clone().translate((1000.0, 0.0)).reverse();
    let again = generator.part_bowl().expect("bowl");
    assert!(again.approx_eq(&first, 1e-12));
    assert!(!again.approx_eq(&moved, 1e-6));
}

#[test]
fn parts_are_computed_once() {
    let generator = regular();
    build(&generator, 'l');
    let count = generator.memo().part_count();
    build(&generator, 'l');
    build(&generator, 'L');
    assert_eq!(generator.memo().part_count(), count);
}

#[test]
fn full_contrast_has_even_strokes() {
    let config = VekosConfig { weight_const: 1.0, stretch_const: 1.0, contrast_ratio: 1.0 };
    let generator = VekosGenerator::new(config);
    assert_eq!(generator.hor_thickness(), generator.ver_thickness());
    build(&generator, 'n');
}

#[test]
fn heavier_weights_are_wider() {
    let light = VekosGenerator::new(VekosConfig::from_style(
        &FontStyle::upright(FontWeight::Light, FontStretch::Normal),
        false,
    ));
    let bold = VekosGenerator::new(VekosConfig::from_style(
        &FontStyle::upright(FontWeight::Bold, FontStretch::Normal),
        false,
    ));
    assert!(build(&bold, 'a').width > build(&light, 'a').width);
}

#[test]
fn glyphs_agree_across_threads() {
    let generator = regular();
    let sequential: Vec<Glyph> = "lrnxtu0".chars().map(|c| build(&regular(), c)).collect();
    let parallel: Vec<Glyph> = std::thread::scope(|scope| {
        let handles: Vec<_> = "lrnxtu0"
            .chars()
            .map(|c| {
                let generator = &generator;
                scope.spawn(move || build(generator, c))
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().expect("worker")).collect()
    });
    for (a, b) in sequential.iter().zip(&parallel) {
        assert!(a.outline.approx_eq(&b.outline, 1e-9));
    }
}
