//! Directory-listing HTML parsing.
//!
//! Static file servers answer directory requests with an autoindex HTML
//! page: one anchor per entry, plus navigation noise (a parent-directory
//! link, `?C=N;O=D`-style sort links). [`parse_listing`] extracts the entry
//! names from such a page.

use std::sync::LazyLock;

use regex::Regex;

static ANCHOR_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<a\s[^>]*href\s*=\s*["']([^"']+)["']"#).unwrap());

/// Extract entry names from an autoindex-style directory listing.
///
/// Takes every `<a href="...">` value in document order and drops listing
/// navigation: query links (names starting with `?`) and the parent
/// directory entry (`../`). No percent-decoding is applied; names are
/// returned exactly as they appear in the href.
#[must_use]
pub fn parse_listing(html: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .map(|c| c[1].to_owned())
        .filter(|href| !href.starts_with('?') && href != "../")
        .collect()
}
