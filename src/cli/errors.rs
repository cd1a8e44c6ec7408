//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::observability::ObservabilityError;
use crate::requirements::InvalidRequirementError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/input file)
    IoError,
    /// Input is not valid requirements JSON
    InvalidInput,
    /// A required requirement field is missing
    InvalidRequirement,
    /// Logging could not be initialized
    LoggingFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ADVISOR_CLI_CONFIG_ERROR",
            Self::IoError => "ADVISOR_CLI_IO_ERROR",
            Self::InvalidInput => "ADVISOR_CLI_INVALID_INPUT",
            Self::InvalidRequirement => "ADVISOR_CLI_INVALID_REQUIREMENT",
            Self::LoggingFailed => "ADVISOR_CLI_LOGGING_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Malformed input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Errors caused by the submitted requirements rather than the
    /// environment. These are also reported on stdout as JSON.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.code,
            CliErrorCode::InvalidInput | CliErrorCode::InvalidRequirement
        )
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::io_error(e.to_string())
        } else {
            Self::invalid_input(format!("JSON error: {}", e))
        }
    }
}

impl From<InvalidRequirementError> for CliError {
    fn from(e: InvalidRequirementError) -> Self {
        Self::new(CliErrorCode::InvalidRequirement, e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<ObservabilityError> for CliError {
    fn from(e: ObservabilityError) -> Self {
        Self::new(CliErrorCode::LoggingFailed, e.message())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
