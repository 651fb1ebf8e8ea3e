//! Plain-text escaping for safe HTML embedding.

/// Escape text for embedding in HTML.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. Used by
/// presenters for titles and filenames; the renderer itself never calls
/// this (code spans are emitted verbatim by contract).
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
