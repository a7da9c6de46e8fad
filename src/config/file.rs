//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/portfolio-projects/config.toml` (or the
//! platform-specific equivalent). Configuration file values serve as defaults
//! that can be overridden by CLI arguments; the registry data itself is
//! compile-time and takes no configuration.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [output]
//! json = false
//!
//! [filtering]
//! language = "Python"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,

    /// Filtering options
    #[serde(default)]
    pub filtering: FileFilterConfig,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileOutputConfig {
    /// Whether to emit JSON instead of the text rendering
    pub json: Option<bool>,
}

/// Filtering options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileFilterConfig {
    /// Default language label for narrowing the listing (e.g., `"Python"`)
    pub language: Option<String>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at
    /// `<config_dir>/portfolio-projects/config.toml`, where `<config_dir>` is
    /// the platform-specific configuration directory (e.g., `~/.config` on
    /// Linux/macOS, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("portfolio-projects").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty)
    /// configuration. If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file path.
    ///
    /// Unlike [`FileConfig::load`], a missing file is an error here: the
    /// caller asked for that exact file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.output.json.is_none());
        assert!(config.filtering.language.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
json = true

[filtering]
language = "Python"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.filtering.language, Some("Python".to_string()));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[filtering]
language = "Rust"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.output.json.is_none());
        assert_eq!(config.filtering.language, Some("Rust".to_string()));
    }

    #[test]
    fn test_parse_empty_config() {
        let toml_content = "";
        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.output.json.is_none());
        assert!(config.filtering.language.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[output]
json = "not_a_bool"
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        let path = FileConfig::config_path();
        if let Some(p) = path {
            assert!(p.ends_with("portfolio-projects/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = FileConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }
}
