//! The ordered substitution pipeline.
//!
//! Each stage rewrites the previous stage's output, so stage order is load
//! bearing:
//!
//! 1. Fenced code blocks run first and consume their backticks, protecting
//!    their contents from the inline-code stage.
//! 2. Inline code.
//! 3. Headers, H3 before H2 before H1, because `## ` is a prefix of `### `
//!    and each level must match as its own full pattern.
//! 4. Bold before italic, so `**` pairs are consumed before the single-`*`
//!    pattern can split them.
//! 5. Italic.
//! 6. Blockquotes, one tag per quoted line. Consecutive quoted lines are
//!    not merged.
//! 7. List items, then a single `<ul>` wrap of the span from the earliest
//!    `<li>` to the latest `</li>` in the whole text. The wrap is applied
//!    exactly once.
//! 8. Paragraph breaks: every blank line becomes `</p><p>`, and the whole
//!    result is wrapped in one outer `<p>`/`</p>` pair regardless of what
//!    block tags ended up inside.

use regex::Regex;

/// Markdown-dialect to HTML converter.
///
/// A total function over strings: every input produces defined HTML output,
/// including the empty string, unbalanced delimiters, and plain text with no
/// markdown syntax at all. There is no error type and no mutable state;
/// instances are free to share across threads.
///
/// The output is an HTML *fragment*, not a document, and its contents are
/// not escaped. See the crate docs for the escaping contract.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    code_block: Regex,
    inline_code: Regex,
    header_3: Regex,
    header_2: Regex,
    header_1: Regex,
    bold: Regex,
    italic: Regex,
    blockquote: Regex,
    list_item: Regex,
    list_run: Regex,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new renderer, compiling the stage patterns once.
    #[must_use]
    pub fn new() -> Self {
        // Pattern literals: compilation cannot fail.
        let re = |pattern| Regex::new(pattern).unwrap();
        Self {
            code_block: re(r"(?s)```(.*?)```"),
            inline_code: re(r"`([^`]+)`"),
            header_3: re(r"(?m)^### (.*)$"),
            header_2: re(r"(?m)^## (.*)$"),
            header_1: re(r"(?m)^# (.*)$"),
            bold: re(r"\*\*(.*?)\*\*"),
            italic: re(r"\*(.*?)\*"),
            blockquote: re(r"(?m)^> (.*)$"),
            list_item: re(r"(?m)^- (.*)$"),
            list_run: re(r"(?s)(<li>.*</li>)"),
        }
    }

    /// Render markdown-dialect source to an HTML fragment.
    ///
    /// Never fails: malformed or partial markdown passes through unmatched,
    /// producing degraded but always-defined output.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let html = self.code_block.replace_all(source, "<pre><code>$1</code></pre>");
        let html = self.inline_code.replace_all(&html, "<code>$1</code>");

        let html = self.header_3.replace_all(&html, "<h3>$1</h3>");
        let html = self.header_2.replace_all(&html, "<h2>$1</h2>");
        let html = self.header_1.replace_all(&html, "<h1>$1</h1>");

        let html = self.bold.replace_all(&html, "<strong>$1</strong>");
        let html = self.italic.replace_all(&html, "<em>$1</em>");

        let html = self.blockquote.replace_all(&html, "<blockquote>$1</blockquote>");

        let html = self.list_item.replace_all(&html, "<li>$1</li>");
        // One wrap only: earliest <li> through the latest </li>.
        let html = self.list_run.replacen(&html, 1, "<ul>$1</ul>");

        let html = html.replace("\n\n", "</p><p>");
        format!("<p>{html}</p>")
    }
}
