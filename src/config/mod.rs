//! Advisor Configuration
//!
//! Loaded from an optional JSON file. Only ambient behaviour is
//! configurable (logging, output formatting); scoring constants are not,
//! so identical requirements always produce identical recommendations.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::observability::LogFormat;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "./advisor.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// File is not valid configuration JSON
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field has an unusable value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Log filter directive (optional, default "warn"). `RUST_LOG` wins.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log line format (optional, default "text")
    #[serde(default)]
    pub log_format: LogFormat,

    /// Pretty-print JSON responses (optional, default false)
    #[serde(default)]
    pub pretty: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            pretty: false,
        }
    }
}

impl AdvisorConfig {
    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: display, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists. A missing file at the default location
    /// yields the default configuration; an explicitly named file must
    /// exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
