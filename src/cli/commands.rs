//! CLI command implementations
//!
//! Commands are thin wrappers: they marshal JSON into requirements, call
//! the advisor, and marshal the result back out. No scoring happens here.

use std::path::Path;

use uuid::Uuid;

use crate::advisor::advise;
use crate::config::AdvisorConfig;
use crate::explain::{explain as explain_requirements, RuleRegistry};
use crate::observability::{init_logging, log_event, Event};
use crate::requirements::ReplicationRequirements;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Parse arguments, load configuration, install logging, run the command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = AdvisorConfig::load(&cli.config)?;
    init_logging(&config.log_filter, config.log_format)?;
    log_event(Event::LoggingReady);
    tracing::info!(
        event = Event::ConfigLoaded.as_str(),
        config = %cli.config.display(),
        log_format = ?config.log_format,
        pretty = config.pretty
    );
    run_command(cli.command, &config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config: &AdvisorConfig) -> CliResult<()> {
    match cmd {
        Command::Advise { input } => advise_command(input.as_deref(), config),
        Command::Explain { input } => explain_command(input.as_deref(), config),
        Command::Gates => gates(config),
    }
}

/// Recommend a topology for one requirements object
pub fn advise_command(input: Option<&Path>, config: &AdvisorConfig) -> CliResult<()> {
    let request_id = Uuid::new_v4();
    let _span = tracing::info_span!("advise", %request_id).entered();

    let requirements = load_requirements(input, config)?;
    write_response(advise(&requirements), config.pretty)
}

/// Explain how every topology scored for one requirements object
pub fn explain_command(input: Option<&Path>, config: &AdvisorConfig) -> CliResult<()> {
    let request_id = Uuid::new_v4();
    let _span = tracing::info_span!("explain", %request_id).entered();

    let requirements = load_requirements(input, config)?;
    write_response(explain_requirements(&requirements), config.pretty)
}

/// List every gate rule and its penalties
pub fn gates(config: &AdvisorConfig) -> CliResult<()> {
    let registry = RuleRegistry::new();
    let gates: Vec<_> = registry.gates().collect();
    write_response(gates, config.pretty)
}

/// Read and validate requirements. Input errors are reported as a JSON
/// error response before being returned.
fn load_requirements(input: Option<&Path>, config: &AdvisorConfig) -> CliResult<ReplicationRequirements> {
    let result = read_request(input).and_then(|request| request.validate().map_err(CliError::from));

    match result {
        Ok(requirements) => Ok(requirements),
        Err(e) => {
            if e.is_input_error() {
                log_event(Event::RequestRejected);
                write_error(e.code_str(), e.message(), config.pretty)?;
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_advise_command_from_file() {
        let file = input_file(
            r#"{"regions":"SINGLE","consistency":"STRONG","availabilityPriority":"MED",
                "latencyTargetMsP99":30,"dataLossTolerance":"ZERO","conflictTolerance":"NONE"}"#,
        );
        assert!(advise_command(Some(file.path()), &AdvisorConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_field_is_invalid_requirement() {
        let file = input_file(r#"{"regions":"SINGLE","consistency":"STRONG"}"#);
        let err = explain_command(Some(file.path()), &AdvisorConfig::default()).unwrap_err();
        assert_eq!(err.code_str(), "ADVISOR_CLI_INVALID_REQUIREMENT");
        assert!(err.message().contains("availabilityPriority"));
    }

    #[test]
    fn test_unreadable_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = advise_command(Some(&missing), &AdvisorConfig::default()).unwrap_err();
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_gates_command() {
        assert!(run_command(Command::Gates, &AdvisorConfig::default()).is_ok());
    }
}
