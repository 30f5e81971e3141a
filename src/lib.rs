//! chainrig - Multi-chain smart contract build/deploy configuration resolver.
//!
//! chainrig maps process environment state to a structured toolchain
//! configuration: per-network RPC endpoints and signing accounts, explorer
//! verification keys, compiler settings, and tooling toggles. The mapping is
//! a pure function of an environment snapshot taken once at startup; the
//! resolved object is immutable and consumed read-only by the build/deploy
//! runner, the compiler, the verification client, and the reporting layer.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Network, compiler, verification, and toggle resolution
//! - [`env`] - Environment snapshots, dotenv loading, execution mode
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Secret masking for rendered output
//!
//! # Example
//!
//! ```
//! use chainrig::config::ToolchainConfig;
//! use chainrig::env::{EnvSnapshot, ExecutionMode};
//!
//! // Compile runs need no live credentials: empty snapshot, empty networks.
//! let snap = EnvSnapshot::from_pairs([("CHAINRIG_COMPILE", "1")]);
//! let config = ToolchainConfig::resolve(&snap).unwrap();
//! assert_eq!(config.mode, ExecutionMode::Compile);
//! assert!(config.networks.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod secrets;

pub use error::{ChainrigError, Result};
