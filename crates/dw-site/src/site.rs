//! Site orchestration.
//!
//! [`Site`] wires a [`Source`] to the renderer and presenter: it discovers
//! posts and media files, renders and assembles them, and degrades to
//! fallback fragments instead of propagating retrieval failures upward.

use std::sync::Arc;

use dw_renderer::MarkdownRenderer;
use dw_source::{Source, SourceError};

use crate::media::{CATEGORIES, MediaCategory};
use crate::post::{PostMeta, RenderedPost, is_post_file, sort_newest_first};
use crate::presenter;

/// Site assembly configuration.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Server-relative blog directory.
    pub blog_path: String,
    /// Server-relative media root directory.
    pub media_path: String,
    /// Extensions accepted as blog posts.
    pub post_extensions: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog_path: "blog".to_owned(),
            media_path: "media".to_owned(),
            post_extensions: vec![".md".to_owned(), ".txt".to_owned()],
        }
    }
}

/// Blog and media archive assembler.
///
/// Every public method is total: retrieval failures surface as logged
/// fallback fragments, never as errors. A failure on one post or one
/// category never aborts the rest.
pub struct Site {
    source: Arc<dyn Source>,
    renderer: MarkdownRenderer,
    config: SiteConfig,
}

impl Site {
    /// Create a new site over the given source.
    #[must_use]
    pub fn new(source: Arc<dyn Source>, config: SiteConfig) -> Self {
        Self {
            source,
            renderer: MarkdownRenderer::new(),
            config,
        }
    }

    /// Discover, fetch and render all blog posts, newest first.
    ///
    /// Unreadable posts are logged and skipped so one bad file cannot take
    /// down the whole blog.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] only if the blog listing itself cannot be
    /// retrieved.
    pub fn load_posts(&self) -> Result<Vec<RenderedPost>, SourceError> {
        let mut names = self.source.list(&self.config.blog_path)?;
        names.retain(|n| is_post_file(n, &self.config.post_extensions));
        sort_newest_first(&mut names);

        let mut posts = Vec::with_capacity(names.len());
        for name in names {
            let path = format!("{}/{name}", self.config.blog_path);
            match self.source.fetch(&path) {
                Ok(content) => posts.push(RenderedPost {
                    meta: PostMeta::from_filename(&name),
                    html: self.renderer.render(&content),
                    filename: name,
                }),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Skipping unreadable post");
                }
            }
        }

        Ok(posts)
    }

    /// Assemble the blog section fragment.
    #[must_use]
    pub fn blog_section(&self) -> String {
        match self.load_posts() {
            Ok(posts) if posts.is_empty() => presenter::no_posts(),
            Ok(posts) => posts
                .iter()
                .map(presenter::post_article)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load blog listing");
                presenter::blog_error()
            }
        }
    }

    /// Assemble the fragment for one media category.
    #[must_use]
    pub fn media_section(&self, category: &MediaCategory) -> String {
        let path = format!("{}/{}", self.config.media_path, category.name);

        let names = match self.source.list(&path) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to load media listing");
                return presenter::media_error(category.name, &self.config.media_path);
            }
        };

        let mut files: Vec<String> = names.into_iter().filter(|n| category.matches(n)).collect();
        if files.is_empty() {
            return presenter::no_files();
        }
        files.sort_unstable();

        files
            .iter()
            .map(|name| presenter::media_item(&format!("{path}/{name}"), name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Assemble all media category fragments, in display order.
    #[must_use]
    pub fn media_sections(&self) -> Vec<(&'static str, String)> {
        CATEGORIES
            .iter()
            .map(|category| (category.name, self.media_section(category)))
            .collect()
    }

    /// Assemble the full standalone page.
    #[must_use]
    pub fn page(&self) -> String {
        presenter::page(&self.blog_section(), &self.media_sections())
    }
}

#[cfg(test)]
mod tests {
    use dw_source::MockSource;
    use pretty_assertions::assert_eq;

    use super::*;

    fn site(source: MockSource) -> Site {
        Site::new(Arc::new(source), SiteConfig::default())
    }

    fn video() -> MediaCategory {
        *CATEGORIES.iter().find(|c| c.name == "video").unwrap()
    }

    #[test]
    fn test_load_posts_renders_newest_first() {
        let source = MockSource::new()
            .with_listing("blog", ["2024-01-05-old.md", "2024-06-01-new.md"])
            .with_content("blog/2024-01-05-old.md", "# Old")
            .with_content("blog/2024-06-01-new.md", "# New");

        let posts = site(source).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].meta.title, "new");
        assert_eq!(posts[1].meta.title, "old");
        assert!(posts[0].html.contains("<h1>New</h1>"));
    }

    #[test]
    fn test_load_posts_filters_non_post_files() {
        let source = MockSource::new()
            .with_listing("blog", ["2024-01-05-a.md", "style.css", "notes.txt"])
            .with_content("blog/2024-01-05-a.md", "a")
            .with_content("blog/notes.txt", "n");

        let posts = site(source).load_posts().unwrap();

        let names: Vec<_> = posts.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["notes.txt", "2024-01-05-a.md"]);
    }

    #[test]
    fn test_load_posts_skips_unreadable_file() {
        // One bad post must not abort the rest.
        let source = MockSource::new()
            .with_listing("blog", ["2024-01-05-good.md", "2024-06-01-bad.md"])
            .with_content("blog/2024-01-05-good.md", "# Good")
            .with_error("blog/2024-06-01-bad.md");

        let posts = site(source).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].filename, "2024-01-05-good.md");
    }

    #[test]
    fn test_blog_section_empty_listing_falls_back() {
        let source = MockSource::new().with_listing("blog", Vec::<String>::new());

        assert_eq!(site(source).blog_section(), presenter::no_posts());
    }

    #[test]
    fn test_blog_section_listing_failure_falls_back() {
        let source = MockSource::new().with_error("blog");

        assert_eq!(site(source).blog_section(), presenter::blog_error());
    }

    #[test]
    fn test_blog_section_joins_articles() {
        let source = MockSource::new()
            .with_listing("blog", ["2024-01-05-a.md"])
            .with_content("blog/2024-01-05-a.md", "body");

        let html = site(source).blog_section();
        assert!(html.contains("<article class=\"blog-post\">"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_media_section_sorts_ascending() {
        let source =
            MockSource::new().with_listing("media/video", ["b.mp4", "a.mp4", "c.webm"]);

        let html = site(source).media_section(&video());

        let a = html.find("a.mp4").unwrap();
        let b = html.find("b.mp4").unwrap();
        let c = html.find("c.webm").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_media_section_filters_by_extension() {
        let source =
            MockSource::new().with_listing("media/video", ["clip.mp4", "song.mp3", "note.md"]);

        let html = site(source).media_section(&video());

        assert!(html.contains("clip.mp4"));
        assert!(!html.contains("song.mp3"));
        assert!(!html.contains("note.md"));
    }

    #[test]
    fn test_media_section_empty_falls_back() {
        let source = MockSource::new().with_listing("media/video", ["readme.md"]);

        assert_eq!(site(source).media_section(&video()), presenter::no_files());
    }

    #[test]
    fn test_media_section_failure_falls_back() {
        let source = MockSource::new().with_error("media/video");

        assert_eq!(
            site(source).media_section(&video()),
            presenter::media_error("video", "media")
        );
    }

    #[test]
    fn test_media_failure_does_not_abort_other_categories() {
        let source = MockSource::new()
            .with_error("media/video")
            .with_listing("media/audio", ["song.mp3"])
            .with_listing("media/image", Vec::<String>::new())
            .with_listing("media/executable", Vec::<String>::new());

        let sections = site(source).media_sections();

        assert_eq!(sections.len(), 4);
        assert!(sections[0].1.contains("Error loading video files."));
        assert!(sections[1].1.contains("song.mp3"));
    }

    #[test]
    fn test_page_contains_all_sections() {
        let source = MockSource::new()
            .with_listing("blog", ["2024-01-05-a.md"])
            .with_content("blog/2024-01-05-a.md", "# A")
            .with_listing("media/video", Vec::<String>::new())
            .with_listing("media/audio", Vec::<String>::new())
            .with_listing("media/image", ["pic.png"])
            .with_listing("media/executable", Vec::<String>::new());

        let html = site(source).page();

        assert!(html.contains("<section id=\"blogList\""));
        assert!(html.contains("<h1>A</h1>"));
        assert!(html.contains("media/image/pic.png"));
        assert!(html.contains("<section id=\"executableList\""));
    }

    #[test]
    fn test_custom_paths() {
        let config = SiteConfig {
            blog_path: "posts".to_owned(),
            media_path: "files".to_owned(),
            ..Default::default()
        };
        let source = MockSource::new()
            .with_listing("posts", ["2024-01-05-a.md"])
            .with_content("posts/2024-01-05-a.md", "x");
        let site = Site::new(Arc::new(source), config);

        let posts = site.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
    }
}
