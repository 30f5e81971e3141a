//! Command-line interface.
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - command dispatch

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ModeArg, ResolveArgs};
pub use commands::run;
