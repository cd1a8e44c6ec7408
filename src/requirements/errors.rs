//! Requirement Error Types
//!
//! Malformed input is the only failure class. It is detected before any
//! candidate is evaluated.

use thiserror::Error;

/// Result type for requirement validation
pub type RequirementResult<T> = Result<T, InvalidRequirementError>;

/// Requirements could not be turned into a scorable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequirementError {
    /// A required field was absent. Carries the wire name of the field.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

impl InvalidRequirementError {
    /// Missing field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
        }
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "ADVISOR_REQUIREMENT_MISSING_FIELD",
        }
    }
}
