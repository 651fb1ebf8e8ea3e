//! Blog post discovery and filename metadata.
//!
//! Posts live in a flat directory and follow the `YYYY-MM-DD-title.md`
//! naming convention. Both date and title come from the filename only;
//! file contents are never consulted for metadata.

use std::sync::LazyLock;

use regex::Regex;

/// Date shown for posts whose filename carries no date prefix.
pub const UNDATED: &str = "undated";

static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}-(.+)\.(md|txt)$").unwrap());

/// Metadata extracted from a post filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMeta {
    /// Display title: the hyphenated slug with hyphens replaced by spaces,
    /// or the raw filename when the name doesn't follow the convention.
    pub title: String,
    /// `YYYY-MM-DD` date from the filename, or [`UNDATED`].
    pub date: String,
}

impl PostMeta {
    /// Extract metadata from a filename like `2024-01-05-first-post.md`.
    ///
    /// Degrades gracefully: a missing date yields [`UNDATED`], a name
    /// outside the convention becomes its own title.
    #[must_use]
    pub fn from_filename(name: &str) -> Self {
        let date = DATE_PREFIX
            .find(name)
            .map_or_else(|| UNDATED.to_owned(), |m| m.as_str().to_owned());

        let title = TITLE_PATTERN
            .captures(name)
            .map_or_else(|| name.to_owned(), |c| c[1].replace('-', " "));

        Self { title, date }
    }
}

/// A post ready for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPost {
    /// Filename within the blog directory.
    pub filename: String,
    /// Metadata extracted from the filename.
    pub meta: PostMeta,
    /// Rendered HTML body.
    pub html: String,
}

/// Check whether a listing entry looks like a post file.
#[must_use]
pub fn is_post_file(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Sort post filenames newest-first.
///
/// The date-prefix convention makes descending lexicographic order equal
/// to reverse chronological order.
pub fn sort_newest_first(names: &mut [String]) {
    names.sort_unstable();
    names.reverse();
}
