//! Character to glyph builder table

use crate::font::Glyph;
use anyhow::Result;
use std::collections::HashMap;
use tracing::warn;

/// A routine that builds one glyph from a generator's config and caches.
pub type Builder<G> = fn(&G) -> Result<Glyph>;

/// Ordered table of glyph builders, filled once at construction.
pub struct Registry<G> {
    entries: Vec<(char, Builder<G>)>,
    index: HashMap<char, usize>,
}

impl<G> Default for Registry<G> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }
}

impl<G> Registry<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `builder` for every character in `chars`.
    ///
    /// The first registration of a character wins; later ones are dropped
    /// with a warning.
    pub fn register(&mut self, chars: &[char], builder: Builder<G>) -> &mut Self {
        for &character in chars {
            if self.index.contains_key(&character) {
                warn!(?character, "character registered twice, keeping the first builder");
                continue;
            }
            self.index.insert(character, self.entries.len());
            self.entries.push((character, builder));
        }
        self
    }

    /// Characters in registration order.
    pub fn chars(&self) -> Vec<char> {
        self.entries.iter().map(|(character, _)| *character).collect()
    }

    pub fn get(&self, character: char) -> Option<Builder<G>> {
        self.index.get(&character).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, character: char) -> bool {
        self.index.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<G> std::fmt::Debug for Registry<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("chars", &self.chars()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Bearings, Metrics};
    use crate::part::Part;

    struct Dummy;

    fn space(_: &Dummy) -> Result<Glyph> {
        let metrics = Metrics { em: 1000.0, ascent: 800.0, descent: 200.0 };
        Ok(Glyph::by_bearings(Part::empty(), metrics, Bearings { left: 10.0, right: 10.0 }))
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry: Registry<Dummy> = Registry::new();
        registry.register(&['b', 'B'], space).register(&['a'], space);
        assert_eq!(registry.chars(), vec!['b', 'B', 'a']);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains('a'));
        assert!(registry.get('z').is_none());
    }

    #[test]
    fn builds_through_lookup() {
        let mut registry: Registry<Dummy> = Registry::new();
        registry.register(&[' '], space);
        let builder = registry.get(' ').expect("registered");
        let glyph = builder(&Dummy).expect("builds");
        assert_eq!(glyph.width, 20.0);
    }

    fn wide(_: &Dummy) -> Result<Glyph> {
        let metrics = Metrics { em: 1000.0, ascent: 800.0, descent: 200.0 };
        Ok(Glyph::by_bearings(Part::empty(), metrics, Bearings { left: 50.0, right: 50.0 }))
    }

    #[test]
    fn first_registration_wins() {
        let mut registry: Registry<Dummy> = Registry::new();
        registry.register(&['a', 'b'], space).register(&['a', 'c'], wide);
        assert_eq!(registry.chars(), vec!['a', 'b', 'c']);
        assert_eq!(registry.len(), 3);
        let glyph = registry.get('a').expect("registered")(&Dummy).expect("builds");
        assert_eq!(glyph.width, 20.0);
        let glyph = registry.get('c').expect("registered")(&Dummy).expect("builds");
        assert_eq!(glyph.width, 100.0);
    }
}
