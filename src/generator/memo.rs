//! Lazily filled caches for derived values

use crate::part::Part;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

/// Per-generator cache of derived metrics and zero-argument parts.
///
/// Values are computed outside the lock, since builders call other cached
/// builders. Two threads racing on the same key both compute it and the
/// first insert wins; builders are pure so the loser's value is identical.
#[derive(Debug, Default)]
pub struct Memo {
    metrics: RwLock<HashMap<&'static str, f64>>,
    parts: RwLock<HashMap<&'static str, Part>>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached numeric value for `key`.
    pub fn metric(&self, key: &'static str, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(value) = self
            .metrics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return *value;
        }
        trace!("computing metric {key}");
        let value = compute();
        *self
            .metrics
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
    }

    /// Cached part for `key`, handed out as an independent copy.
    pub fn part(&self, key: &'static str, compute: impl FnOnce() -> anyhow::Result<Part>) -> anyhow::Result<Part> {
        if let Some(part) = self
            .parts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Ok(part.clone());
        }
        trace!("building part {key}");
        let part = compute()?;
        Ok(self
            .parts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(part)
            .clone())
    }

    /// Number of cached parts.
    pub fn part_count(&self) -> usize {
        self.parts.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Affine;
    use std::cell::Cell;

    #[test]
    fn metric_is_computed_once() {
        let memo = Memo::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42.0
        };
        assert_eq!(memo.metric("answer", compute), 42.0);
        assert_eq!(memo.metric("answer", compute), 42.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cached_parts_are_copies() {
        let memo = Memo::new();
        let mut first = memo.part("square", || Ok(Part::rect(10.0, 10.0))).unwrap();
        first.apply_affine(Affine::translate((100.0, 0.0)));
        let second = memo.part("square", || panic!("must come from cache")).unwrap();
        assert_eq!(second.start(), Some(kurbo::Point::new(0.0, 0.0)));
        assert_eq!(memo.part_count(), 1);
    }

    #[test]
    fn failed_builds_are_not_cached() {
        let memo = Memo::new();
        assert!(memo.part("broken", || anyhow::bail!("nope")).is_err());
        assert_eq!(memo.part_count(), 0);
    }
}
