//! fontgen
//!
//! Parametric outline generation for the Vekos and Kaleg constructed-script
//! typefaces. Glyphs are assembled from directed outline [`part::Part`]s by a
//! per-style [`generator::Generator`] and exported as UFO, SVG or JSON.
pub mod core;
pub mod data;
pub mod families;
pub mod font;
pub mod generator;
pub mod geometry;
pub mod logging;
pub mod part;
pub mod stroke;
