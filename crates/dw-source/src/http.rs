//! HTTP backend for static file servers.
//!
//! [`HttpSource`] fetches directory listings and file contents from a
//! plain static server (python -m http.server, nginx autoindex, Apache
//! mod_autoindex). Directory requests return autoindex HTML, parsed by
//! [`crate::listing::parse_listing`].

use std::time::Duration;

use ureq::Agent;

use crate::listing::parse_listing;
use crate::source::{Source, SourceError, SourceErrorKind};

/// Default HTTP timeout for listing and content requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend identifier used in error messages.
const BACKEND: &str = "Http";

/// HTTP source backed by a static file server.
///
/// Reuses a single [`Agent`] for connection pooling across requests.
///
/// # Example
///
/// ```no_run
/// use dw_source::{HttpSource, Source};
///
/// let source = HttpSource::new("http://localhost:8000");
/// let posts = source.list("blog")?;
/// let content = source.fetch("blog/2024-01-05-hello.md")?;
/// # Ok::<(), dw_source::SourceError>(())
/// ```
pub struct HttpSource {
    agent: Agent,
    base_url: String,
}

impl HttpSource {
    /// Create a new HTTP source for the given server base URL.
    ///
    /// A trailing slash on the base URL is accepted and ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP source with a custom request timeout.
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Build the absolute URL for a server-relative path.
    fn url_for(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// GET a URL and return the response body as text.
    fn get_text(&self, url: &str, path: &str) -> Result<String, SourceError> {
        tracing::debug!(url = %url, "fetching");

        let response = self.agent.get(url).call().map_err(|e| {
            SourceError::new(SourceErrorKind::Unavailable)
                .with_backend(BACKEND)
                .with_path(path)
                .with_source(e)
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SourceError::http_status(status, path).with_backend(BACKEND));
        }

        response.into_body().read_to_string().map_err(|e| {
            SourceError::new(SourceErrorKind::Other)
                .with_backend(BACKEND)
                .with_path(path)
                .with_source(e)
        })
    }
}

impl Source for HttpSource {
    fn list(&self, path: &str) -> Result<Vec<String>, SourceError> {
        // Directory requests need the trailing slash, otherwise servers
        // answer with a redirect to the slashed form.
        let url = format!("{}/", self.url_for(path).trim_end_matches('/'));
        let html = self.get_text(&url, path)?;
        Ok(parse_listing(&html))
    }

    fn fetch(&self, path: &str) -> Result<String, SourceError> {
        self.get_text(&self.url_for(path), path)
    }
}
