//! Pattern-substitution markdown renderer for the driftwood blog dialect.
//!
//! This crate provides [`MarkdownRenderer`], which converts a small markdown
//! dialect (headers 1-3, bold, italic, inline code, fenced code blocks,
//! single-line blockquotes, flat unordered lists, paragraph breaks) into an
//! HTML fragment through an ordered sequence of text substitutions.
//!
//! The renderer is deliberately not a markdown parser: there is no token
//! stream and no document tree. Each stage rewrites the output of the
//! previous one, and the stage order encodes the precedence rules a grammar
//! would otherwise express. Malformed input is never an error; unmatched
//! delimiters simply pass through verbatim.
//!
//! # Example
//!
//! ```
//! use dw_renderer::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render("# Hello\n\n**Bold** text");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>Bold</strong>"));
//! ```
//!
//! # Escaping
//!
//! The renderer never escapes its input: code spans and code blocks are
//! emitted exactly as found in the source. Callers embedding untrusted text
//! (titles, filenames) escape it first with [`escape_html`].

mod escape;
mod renderer;

pub use escape::escape_html;
pub use renderer::MarkdownRenderer;
