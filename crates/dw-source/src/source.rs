//! Source trait and error types.
//!
//! Provides the core [`Source`] trait for abstracting file discovery and
//! retrieval, along with [`SourceError`] for unified error handling across
//! backends.
//!
//! # Path Convention
//!
//! All path parameters are **server-relative paths**, not filesystem paths:
//! - `"blog"` - a directory whose listing is fetched
//! - `"blog/2024-01-01-hello.md"` - a file whose contents are fetched
//!
//! Backends map these to their own addressing (URLs for HTTP, map keys for
//! the mock).

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Backend is unavailable (connection failure, server error).
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Source error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Path context (if applicable).
    pub path: Option<String>,
    /// Backend identifier (e.g., "Http", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_path(path)
    }

    /// Create a source error from an HTTP status code.
    #[must_use]
    pub fn http_status(status: u16, path: impl Into<String>) -> Self {
        let kind = match status {
            404 => SourceErrorKind::NotFound,
            401 | 403 => SourceErrorKind::PermissionDenied,
            500..=599 => SourceErrorKind::Unavailable,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind)
            .with_path(path)
            .with_source(std::io::Error::other(format!("HTTP {status}")))
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: blog/post.md)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidPath => "Invalid path",
            SourceErrorKind::Unavailable => "Unavailable",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// File discovery and retrieval abstraction.
///
/// Provides a unified interface for listing a directory-like path and
/// reading individual files, regardless of backend. Listing order is
/// whatever the backend reports; callers impose their own sort.
pub trait Source: Send + Sync {
    /// List the filenames visible at the given directory path.
    ///
    /// Returns names relative to `path`, in listing order. Parent-directory
    /// entries and query links are already filtered out.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the listing cannot be retrieved.
    fn list(&self, path: &str) -> Result<Vec<String>, SourceError>;

    /// Fetch the raw text contents of a file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file doesn't exist or can't be read.
    fn fetch(&self, path: &str) -> Result<String, SourceError>;
}
