//! Configuration management for driftwood.
//!
//! Parses `driftwood.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "driftwood.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server base URL.
    pub base_url: Option<String>,
    /// Override blog directory path.
    pub blog_path: Option<String>,
    /// Override media root directory path.
    pub media_path: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Blog configuration.
    pub blog: BlogConfig,
    /// Media archive configuration.
    pub media: MediaConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the static file server.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_owned(),
        }
    }
}

/// Blog configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Server-relative blog directory.
    pub path: String,
    /// Extensions accepted as blog posts.
    pub extensions: Vec<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            path: "blog".to_owned(),
            extensions: vec![".md".to_owned(), ".txt".to_owned()],
        }
    }
}

/// Media archive configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Server-relative media root directory.
    pub path: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            path: "media".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `driftwood.toml` in the current directory
    /// and parents, falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.server.base_url.clone_from(base_url);
        }
        if let Some(blog_path) = &settings.blog_path {
            self.blog.path.clone_from(blog_path);
        }
        if let Some(media_path) = &settings.media_path {
            self.media.path.clone_from(media_path);
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or the base
    /// URL has no http(s) scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.base_url, "server.base_url")?;
        require_http_url(&self.server.base_url, "server.base_url")?;
        require_non_empty(&self.blog.path, "blog.path")?;
        require_non_empty(&self.media.path, "media.path")?;

        if self.blog.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "blog.extensions cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.base_url, "http://localhost:8000");
        assert_eq!(config.blog.path, "blog");
        assert_eq!(config.blog.extensions, vec![".md", ".txt"]);
        assert_eq!(config.media.path, "media");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let result = Config::load(Some(Path::new("/nonexistent/driftwood.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("driftwood.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://example.com"

[blog]
path = "posts"
extensions = [".md"]
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.base_url, "http://example.com");
        assert_eq!(config.blog.path, "posts");
        assert_eq!(config.blog.extensions, vec![".md"]);
        // Unset sections fall back to defaults.
        assert_eq!(config.media.path, "media");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("driftwood.toml");
        std::fs::write(&path, "server = [broken").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_cli_settings_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("driftwood.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://example.com\"\n").unwrap();

        let settings = CliSettings {
            base_url: Some("http://other:9000".to_owned()),
            blog_path: Some("writing".to_owned()),
            media_path: None,
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.base_url, "http://other:9000");
        assert_eq!(config.blog.path, "writing");
        assert_eq!(config.media.path, "media");
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.server.base_url = String::new();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.com".to_owned();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = Config::default();
        config.blog.extensions.clear();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_applies_validation_after_overrides() {
        let settings = CliSettings {
            base_url: Some("not-a-url".to_owned()),
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("driftwood.toml");
        std::fs::write(&path, "").unwrap();

        let result = Config::load(Some(&path), Some(&settings));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
