//! CLI argument definitions using clap
//!
//! Commands:
//! - replication-advisor advise [--input <path>] [--config <path>]
//! - replication-advisor explain [--input <path>] [--config <path>]
//! - replication-advisor gates [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Replication topology advisor
#[derive(Parser, Debug)]
#[command(name = "replication-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a replication topology for one requirements object
    Advise {
        /// Requirements JSON file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Explain how every topology scored for one requirements object
    Explain {
        /// Requirements JSON file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List every gate rule and its penalties
    Gates,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_advise_with_input() {
        let cli = Cli::try_parse_from(["replication-advisor", "advise", "--input", "req.json"]).unwrap();
        match cli.command {
            Command::Advise { input } => assert_eq!(input, Some(PathBuf::from("req.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["replication-advisor", "gates", "--config", "a.json"]).unwrap();
        assert!(matches!(cli.command, Command::Gates));
        assert_eq!(cli.config, PathBuf::from("a.json"));
    }
}
