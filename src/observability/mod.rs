//! Observability for the advisor
//!
//! - Structured logging through `tracing`
//! - Typed, stable event names
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on scoring
//! 3. Without an installed subscriber every log call is a no-op
//!
//! # Usage
//!
//! ```ignore
//! use replication_advisor::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging("info", LogFormat::Json)?;
//! log_event(Event::ConfigLoaded);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, resolve_filter, LogFormat};

use std::fmt;

/// Observability error
///
/// Observability failure never aborts an advisory run; only the CLI
/// reports it.
#[derive(Debug, Clone)]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        "ADVISOR_OBSERVABILITY_FAILED"
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_rejection() {
        tracing::warn!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}
