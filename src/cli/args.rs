//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::env::ExecutionMode;

/// chainrig - Multi-chain build/deploy configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "chainrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dotenv file layered under the process environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the toolchain configuration and print it as JSON
    Resolve(ResolveArgs),

    /// Check the environment for a mode, listing every missing variable
    Check(CheckArgs),

    /// List supported networks and their environment variables
    Networks,

    /// Print the JSON Schema of the resolved configuration object
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Execution mode override for `resolve` and `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Compile,
    Clean,
    Test,
    Normal,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Compile => ExecutionMode::Compile,
            ModeArg::Clean => ExecutionMode::Clean,
            ModeArg::Test => ExecutionMode::Test,
            ModeArg::Normal => ExecutionMode::Normal,
        }
    }
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Override mode detection
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Mask private keys and API keys in the output
    #[arg(long)]
    pub redact: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Override mode detection
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_resolve_with_flags() {
        let cli = Cli::try_parse_from(["chainrig", "resolve", "--pretty", "--redact"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert!(args.pretty);
                assert!(args.redact);
                assert_eq!(args.mode, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_mode_override() {
        let cli = Cli::try_parse_from(["chainrig", "resolve", "--mode", "compile"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.mode, Some(ModeArg::Compile)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_global_env_file() {
        let cli =
            Cli::try_parse_from(["chainrig", "check", "--env-file", "/tmp/.env"]).unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from("/tmp/.env")));
    }

    #[test]
    fn mode_arg_converts_to_execution_mode() {
        assert_eq!(ExecutionMode::from(ModeArg::Clean), ExecutionMode::Clean);
        assert_eq!(ExecutionMode::from(ModeArg::Normal), ExecutionMode::Normal);
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
