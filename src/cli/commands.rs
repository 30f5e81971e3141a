//! Command dispatch.
//!
//! Each subcommand maps to one function; all of them operate on the snapshot
//! captured once in [`run`]. Exit codes: 0 on success, 1 when `check` finds
//! problems or resolution fails.

use std::io;

use clap::CommandFactory;
use schemars::schema_for;

use crate::cli::args::{CheckArgs, Cli, Commands, CompletionsArgs, ResolveArgs};
use crate::config::{preflight, NetworkId, ToolchainConfig, DEFAULT_VERIFIED_NETWORKS};
use crate::env::{EnvSnapshot, ExecutionMode};
use crate::error::Result;
use crate::secrets::OutputMasker;

/// Capture the snapshot and dispatch the parsed command.
pub fn run(cli: &Cli) -> Result<i32> {
    let snapshot = match &cli.env_file {
        Some(path) => EnvSnapshot::from_process_with_dotenv(path)?,
        None => EnvSnapshot::from_process(),
    };

    match &cli.command {
        Commands::Resolve(args) => resolve(&snapshot, args),
        Commands::Check(args) => check(&snapshot, args),
        Commands::Networks => networks(),
        Commands::Schema => schema(),
        Commands::Completions(args) => completions(args),
    }
}

fn active_mode(snapshot: &EnvSnapshot, override_mode: Option<ExecutionMode>) -> ExecutionMode {
    override_mode.unwrap_or_else(|| ExecutionMode::detect(snapshot))
}

fn resolve(snapshot: &EnvSnapshot, args: &ResolveArgs) -> Result<i32> {
    let mode = active_mode(snapshot, args.mode.map(Into::into));
    let config = ToolchainConfig::resolve_for_mode(snapshot, mode)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?
    } else {
        serde_json::to_string(&config).map_err(anyhow::Error::from)?
    };

    if args.redact {
        let masker = OutputMasker::from_config(&config);
        println!("{}", masker.mask(&rendered));
    } else {
        println!("{rendered}");
    }

    Ok(0)
}

fn check(snapshot: &EnvSnapshot, args: &CheckArgs) -> Result<i32> {
    let mode = active_mode(snapshot, args.mode.map(Into::into));
    let report = preflight(snapshot, mode);

    if report.is_ok() {
        println!("ok: environment satisfies mode '{mode}'");
        return Ok(0);
    }

    eprintln!(
        "{} problem(s) found for mode '{mode}':",
        report.issues.len()
    );
    for issue in &report.issues {
        eprintln!("  {}: {}", issue.network, issue.problem);
    }
    Ok(1)
}

fn networks() -> Result<i32> {
    for &network in NetworkId::REMOTE {
        let verified = if DEFAULT_VERIFIED_NETWORKS.contains(&network) {
            network.api_key_var()
        } else {
            "-".to_string()
        };
        println!(
            "{}\t{}\t{}\t{}",
            network,
            network.node_uri_var(),
            network.accounts_var(),
            verified
        );
    }
    Ok(0)
}

fn schema() -> Result<i32> {
    let schema = schema_for!(ToolchainConfig);
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?
    );
    Ok(0)
}

fn completions(args: &CompletionsArgs) -> Result<i32> {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "chainrig",
        &mut io::stdout(),
    );
    Ok(0)
}
