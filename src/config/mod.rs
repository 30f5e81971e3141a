//! Configuration resolution.
//!
//! This module maps an environment snapshot to the resolved toolchain
//! configuration:
//! - Network identifiers and descriptors in [`network`]
//! - Compiler entries and the storage-layout overlay in [`compiler`]
//! - Explorer verification keys and custom chains in [`verify`]
//! - Feature toggles in [`report`]
//! - Top-level assembly and preflight checks in [`resolver`]

pub mod compiler;
pub mod network;
pub mod report;
pub mod resolver;
pub mod verify;

// Network re-exports
pub use network::{
    accounts, node_url, AccountsSpec, NetworkDescriptor, NetworkId, DEFAULT_DERIVATION_PATH,
    DEFAULT_MNEMONIC_COUNT,
};

// Compiler re-exports
pub use compiler::{
    base_compilers, resolve_compilers, storage_layout_selection, CompilerEntry,
    OptimizerSettings, OutputSelection,
};

// Verification re-exports
pub use verify::{
    custom_chains, resolve_api_keys, ChainDescriptor, VerificationConfig,
    DEFAULT_VERIFIED_NETWORKS, PLACEHOLDER_API_KEY,
};

// Toggle re-exports
pub use report::{
    resolve_test_timeout, GasReportSettings, LogStripping, DEFAULT_CURRENCY,
    DEFAULT_TEST_TIMEOUT_MS,
};

// Resolver re-exports
pub use resolver::{
    preflight, resolve_networks, AccountRef, BindingsConfig, CheckIssue, CheckReport,
    NamedAccounts, PathsConfig, ToolchainConfig,
};
