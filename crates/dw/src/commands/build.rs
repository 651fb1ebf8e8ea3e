//! `dw build` command implementation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use dw_config::{CliSettings, Config};
use dw_site::{Site, SiteConfig};
use dw_source::HttpSource;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover driftwood.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static server base URL (overrides config).
    #[arg(short, long)]
    base_url: Option<String>,

    /// Blog directory path on the server (overrides config).
    #[arg(long)]
    blog_path: Option<String>,

    /// Media root directory path on the server (overrides config).
    #[arg(long)]
    media_path: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Enable verbose output (show fetch and skip logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the output file cannot be
    /// written. Retrieval failures do not error: they degrade to fallback
    /// fragments in the assembled page.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_url: self.base_url,
            blog_path: self.blog_path,
            media_path: self.media_path,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!("Server: {}", config.server.base_url));
        output.info(&format!("Blog path: {}", config.blog.path));
        output.info(&format!("Media path: {}", config.media.path));

        let source = HttpSource::new(config.server.base_url.clone());
        let site = Site::new(
            Arc::new(source),
            SiteConfig {
                blog_path: config.blog.path,
                media_path: config.media.path,
                post_extensions: config.blog.extensions,
            },
        );

        let page = site.page();

        match &self.out {
            Some(path) => {
                std::fs::write(path, &page)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                std::io::stdout().write_all(page.as_bytes())?;
            }
        }

        Ok(())
    }
}
