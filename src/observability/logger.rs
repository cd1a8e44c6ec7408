//! Log subscriber setup
//!
//! - Logs go to stderr; stdout carries only JSON responses
//! - `RUST_LOG` overrides the configured filter
//! - One log line = one event

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Resolve the effective filter: `RUST_LOG` wins over `configured`.
pub fn resolve_filter(configured: &str) -> ObservabilityResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .map_err(|e| ObservabilityError::new(format!("invalid log filter '{}': {}", configured, e)))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(filter: &str, format: LogFormat) -> ObservabilityResult<()> {
    let filter = resolve_filter(filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("logging already initialized: {}", e)))
}
