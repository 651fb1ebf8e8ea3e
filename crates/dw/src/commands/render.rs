//! `dw render` command implementation.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use dw_renderer::MarkdownRenderer;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: read from stdin).
    file: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or stdout cannot be
    /// written. Rendering itself never fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let html = MarkdownRenderer::new().render(&source);

        let mut stdout = std::io::stdout();
        stdout.write_all(html.as_bytes())?;
        stdout.write_all(b"\n")?;

        Ok(())
    }
}
