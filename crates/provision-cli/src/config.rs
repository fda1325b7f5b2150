//! Bootstrap configuration loading

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Process-wide settings read once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Append logs to this file instead of writing them to stderr.
    pub log_path: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info`.
    pub log_level: Option<String>,
}

impl BootstrapConfig {
    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => {
                return Err(CliError::Config {
                    path: path.to_path_buf(),
                    format: "unknown".into(),
                    message: format!("unsupported extension '{extension}'"),
                });
            }
        };

        let config_error = |message: String| CliError::Config {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;

        match format {
            "TOML" => toml::from_str(&content).map_err(|e| config_error(e.to_string())),
            "JSON" => serde_json::from_str(&content).map_err(|e| config_error(e.to_string())),
            _ => serde_yaml::from_str(&content).map_err(|e| config_error(e.to_string())),
        }
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, verbose: bool) -> Self {
        if log_file.is_some() {
            self.log_path = log_file;
        }
        if verbose {
            self.log_level = Some("debug".into());
        }
        self
    }

    /// The filter directive to use when `RUST_LOG` is unset.
    pub fn level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}
