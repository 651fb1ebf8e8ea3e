//! Blog and media archive assembly for driftwood.
//!
//! Takes a [`Source`](dw_source::Source) (directory listings plus file
//! contents), discovers blog posts and media files, renders markdown
//! through [`dw_renderer::MarkdownRenderer`] and assembles the displayable
//! HTML fragments.
//!
//! Failure isolation: one unreadable post is logged and skipped, one
//! unavailable media category renders its fallback message. A partial
//! archive always beats an aborted one.

pub mod media;
pub mod post;
pub mod presenter;

mod site;

pub use post::{PostMeta, RenderedPost};
pub use site::{Site, SiteConfig};
