//! Glyph generators
//!
//! A generator owns one style's immutable config, a [`Memo`] of derived
//! values and parts, and a [`Registry`] mapping characters to builders.
//! Families implement [`Generator`] by delegating to [`build_glyph`].

pub mod memo;
pub mod registry;

pub use memo::Memo;
pub use registry::{Builder, Registry};

use crate::core::errors::glyph_context;
use crate::font::{Glyph, Metrics};
use anyhow::{Context, Result};
use tracing::debug_span;

/// Character to outline mapping for one style of one family.
pub trait Generator: Send + Sync {
    /// Supported characters in registration order.
    fn chars(&self) -> Vec<char>;

    /// Build the glyph for `character`.
    ///
    /// `Ok(None)` means the family has no such glyph. Errors are outline
    /// construction bugs and recur on every call.
    fn glyph(&self, character: char) -> Result<Option<Glyph>>;

    /// Vertical metrics shared by every glyph.
    fn metrics(&self) -> Metrics;
}

/// Look up `character` in `registry` and run its builder.
pub fn build_glyph<G>(generator: &G, registry: &Registry<G>, family: &str, character: char) -> Result<Option<Glyph>> {
    let Some(builder) = registry.get(character) else {
        return Ok(None);
    };
    let _span = debug_span!("glyph", family, character = %character).entered();
    let glyph = builder(generator).with_context(|| glyph_context(family, character))?;
    tracing::debug!(width = glyph.width, contours = glyph.outline.contours().len(), "built");
    Ok(Some(glyph))
}
