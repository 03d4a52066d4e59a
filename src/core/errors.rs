//! Error handling helpers
//!
//! Everything fallible returns `anyhow::Result`. Outline construction errors
//! are programmer errors (a builder composed parts that cannot be joined), so
//! they carry the operator name and operand index and are never retried.
//! File operations attach the path they touched.

use anyhow::Context;
use std::path::Path;

pub type FontgenResult<T> = anyhow::Result<T>;

/// Extension trait adding file context to results
pub trait FontgenContext<T> {
    /// Attach "failed to <operation> <path>" to an error
    fn with_file_context(self, operation: &str, path: &Path) -> FontgenResult<T>;
}

impl<T, E> FontgenContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, operation: &str, path: &Path) -> FontgenResult<T> {
        self.with_context(|| format!("failed to {} {}", operation, path.display()))
    }
}

/// Context message for a glyph that failed to build
pub fn glyph_context(family: &str, character: char) -> String {
    format!("failed to build {family} glyph {character:?} (U+{:04X})", character as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_context_names_operation_and_path() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let error = result
            .with_file_context("read", Path::new("/tmp/settings.json"))
            .unwrap_err();
        assert_eq!(error.to_string(), "failed to read /tmp/settings.json");
    }

    #[test]
    fn glyph_context_shows_codepoint() {
        assert_eq!(
            glyph_context("Vekos", 'á').to_string(),
            "failed to build Vekos glyph 'á' (U+00E1)"
        );
    }
}
