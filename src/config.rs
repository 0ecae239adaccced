// Chunk: docs/chunks/host_config - JSON configuration for the host binary

//! User configuration.
//!
//! Read from `--config` or `<config dir>/yeet/config.json`. Every field has a
//! default, so a missing file or a partial one is fine; a file that exists
//! but does not parse is an error.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use yeet_buffer::{BufferOptions, MonospaceMetrics, DEFAULT_GAP_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gap opened by new buffers and reopened on growth.
    pub gap_size: usize,
    pub tab_width: usize,
    pub cell_width: f32,
    pub line_height: f32,
    /// Default log filter, overridden by `--log-level` and `RUST_LOG`.
    pub log_level: String,
    /// Token kind name to `#rrggbb` foreground color.
    pub theme: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap_size: DEFAULT_GAP_SIZE,
            tab_width: 4,
            cell_width: 8.0,
            line_height: 16.0,
            log_level: String::from("info"),
            theme: HashMap::new(),
        }
    }
}

impl Config {
    /// Returns the default config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yeet").join("config.json"))
    }

    /// Loads the config at `path`, falling back to defaults if it does not
    /// exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config {}", path.display()))
            }
        };
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Rejects values the layout code cannot measure with.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("cell_width", self.cell_width),
            ("line_height", self.line_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("{} must be a positive number, got {}", name, value);
            }
        }
        Ok(())
    }

    /// Loads from `path` if given, else from the default location.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn buffer_options(&self) -> BufferOptions {
        BufferOptions {
            gap_size: self.gap_size.max(1),
        }
    }

    pub fn metrics(&self) -> MonospaceMetrics {
        MonospaceMetrics::new(self.cell_width, self.line_height, self.tab_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r##"{ "tab_width": 8, "theme": { "comment": "#808080" } }"##).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.gap_size, DEFAULT_GAP_SIZE);
        assert_eq!(config.theme.get("comment").map(String::as_str), Some("#808080"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ tab_width: ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config"));
    }

    #[test]
    fn test_negative_line_height_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "line_height": -16.0 }"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("invalid config"));
        assert!(msg.contains("line_height must be a positive number, got -16"));
    }

    #[test]
    fn test_zero_cell_width_is_rejected() {
        let config = Config {
            cell_width: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_gap_is_raised() {
        let config = Config {
            gap_size: 0,
            ..Config::default()
        };
        assert_eq!(config.buffer_options().gap_size, 1);
    }

    #[test]
    fn test_metrics_from_config() {
        let config = Config {
            tab_width: 2,
            cell_width: 10.0,
            ..Config::default()
        };
        let metrics = config.metrics();
        assert_eq!(metrics.tab_width, 2);
        assert_eq!(metrics.cell_width, 10.0);
        assert_eq!(metrics.line_height, 16.0);
    }
}
