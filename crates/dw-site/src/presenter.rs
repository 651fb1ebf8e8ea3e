//! HTML fragment assembly.
//!
//! Builds the displayable fragments around already-rendered post bodies
//! and media filenames. Titles and filenames are escaped here; post bodies
//! arrive as rendered HTML and are inserted as-is.

use std::fmt::Write;

use dw_renderer::escape_html;

use crate::post::RenderedPost;

/// Build the article fragment for one blog post.
#[must_use]
pub fn post_article(post: &RenderedPost) -> String {
    let mut out = String::new();
    write!(
        out,
        concat!(
            "<article class=\"blog-post\">",
            "<div class=\"blog-post-header\">",
            "<h2 class=\"blog-post-title\">{title}</h2>",
            "<span class=\"blog-post-date\">{date}</span>",
            "</div>",
            "<div class=\"blog-post-content\">{body}</div>",
            "</article>"
        ),
        title = escape_html(&post.meta.title),
        date = escape_html(&post.meta.date),
        body = post.html,
    )
    .unwrap();
    out
}

/// Build the fragment for one media archive entry.
///
/// `href` is emitted verbatim (it comes straight from the listing and
/// round-trips percent-encoding); the visible name is escaped.
#[must_use]
pub fn media_item(href: &str, name: &str) -> String {
    format!(
        "<div class=\"media-item\"><a href=\"{href}\" title=\"{name}\">{name}</a></div>",
        name = escape_html(name),
    )
}

/// Fallback shown when the blog directory lists no posts.
#[must_use]
pub fn no_posts() -> String {
    loading("No blog posts found. Create markdown files in the /blog folder.")
}

/// Fallback shown when the blog listing itself cannot be loaded.
#[must_use]
pub fn blog_error() -> String {
    loading("Error loading blog posts. Make sure the /blog folder exists.")
}

/// Fallback shown when a media category lists no files.
#[must_use]
pub fn no_files() -> String {
    loading("No files found.")
}

/// Fallback shown when a media category cannot be loaded.
#[must_use]
pub fn media_error(category: &str, media_path: &str) -> String {
    loading(&format!(
        "Error loading {category} files. Make sure the /{media_path}/{category} folder exists."
    ))
}

fn loading(message: &str) -> String {
    format!("<p class=\"loading\">{message}</p>")
}

/// Assemble the full standalone page around the blog and media sections.
///
/// `media_sections` pairs each category name with its rendered fragment.
#[must_use]
pub fn page(blog_html: &str, media_sections: &[(&str, String)]) -> String {
    let mut out = String::new();
    out.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>driftwood</title>\n",
        "</head>\n",
        "<body>\n"
    ));

    writeln!(
        out,
        "<section id=\"blogList\" class=\"blog-list\">\n{blog_html}\n</section>"
    )
    .unwrap();

    for (name, html) in media_sections {
        writeln!(
            out,
            "<section id=\"{name}List\" class=\"media-list\">\n{html}\n</section>"
        )
        .unwrap();
    }

    out.push_str("</body>\n</html>\n");
    out
}
