//! Mock source implementation for testing.
//!
//! Provides [`MockSource`] for unit testing without a network.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::source::{Source, SourceError, SourceErrorKind};

/// Backend identifier used in error messages.
const BACKEND: &str = "Mock";

/// Mock source for testing.
///
/// Stores listings and contents in memory. Use the builder methods to
/// configure the mock with test data; `with_error` marks a path as failing
/// for exercising failure-isolation paths.
///
/// # Example
///
/// ```ignore
/// use dw_source::{MockSource, Source};
///
/// let source = MockSource::new()
///     .with_listing("blog", ["2024-01-05-hello.md"])
///     .with_content("blog/2024-01-05-hello.md", "# Hello");
///
/// let names = source.list("blog").unwrap();
/// assert_eq!(names, vec!["2024-01-05-hello.md"]);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    listings: RwLock<HashMap<String, Vec<String>>>,
    contents: RwLock<HashMap<String, String>>,
    failures: RwLock<HashSet<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory listing for a path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_listing<I, S>(self, path: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listings
            .write()
            .unwrap()
            .insert(path.into(), names.into_iter().map(Into::into).collect());
        self
    }

    /// Add file contents for a path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_content(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.contents
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Mark a path as failing with an `Unavailable` error.
    ///
    /// Applies to both `list` and `fetch`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_error(self, path: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(path.into());
        self
    }

    fn check_failure(&self, path: &str) -> Result<(), SourceError> {
        if self.failures.read().unwrap().contains(path) {
            return Err(SourceError::new(SourceErrorKind::Unavailable)
                .with_backend(BACKEND)
                .with_path(path));
        }
        Ok(())
    }
}

impl Source for MockSource {
    fn list(&self, path: &str) -> Result<Vec<String>, SourceError> {
        self.check_failure(path)?;
        self.listings
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::not_found(path).with_backend(BACKEND))
    }

    fn fetch(&self, path: &str) -> Result<String, SourceError> {
        self.check_failure(path)?;
        self.contents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::not_found(path).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_returns_configured_names() {
        let source = MockSource::new().with_listing("blog", ["a.md", "b.md"]);

        assert_eq!(source.list("blog").unwrap(), vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_unknown_path_is_not_found() {
        let source = MockSource::new();

        let err = source.list("blog").unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert_eq!(err.backend, Some("Mock"));
    }

    #[test]
    fn test_fetch_returns_content() {
        let source = MockSource::new().with_content("blog/a.md", "# A");

        assert_eq!(source.fetch("blog/a.md").unwrap(), "# A");
    }

    #[test]
    fn test_fetch_unknown_path_is_not_found() {
        let source = MockSource::new();

        let err = source.fetch("blog/a.md").unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::NotFound);
    }

    #[test]
    fn test_with_error_fails_list_and_fetch() {
        let source = MockSource::new()
            .with_listing("blog", ["a.md"])
            .with_error("blog");

        assert_eq!(
            source.list("blog").unwrap_err().kind,
            SourceErrorKind::Unavailable
        );
        assert_eq!(
            source.fetch("blog").unwrap_err().kind,
            SourceErrorKind::Unavailable
        );
    }
}
