//! Listing and content retrieval abstraction for driftwood.
//!
//! Provides the [`Source`] trait for discovering files through directory
//! listings and fetching their contents, along with [`SourceError`] for
//! unified error handling across backends.
//!
//! # Backends
//!
//! - [`HttpSource`]: fetches listings and files from a static file server
//!   over HTTP, parsing autoindex-style HTML listings.
//! - `MockSource` (feature `mock`): in-memory backend for testing without
//!   a network.

pub mod listing;

mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod source;

pub use http::HttpSource;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
pub use source::{Source, SourceError, SourceErrorKind};
