//! CLI module for the advisor
//!
//! Provides command-line interface for:
//! - advise: One-shot recommendation
//! - explain: One-shot structured explanation
//! - gates: Gate rule listing

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{advise_command, explain_command, gates, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, ErrorEnvelope, OkEnvelope, parse_request, read_request, write_error, write_response};
