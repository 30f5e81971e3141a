//! Top-level configuration assembly.
//!
//! [`ToolchainConfig::resolve`] is the single transition this crate performs:
//! environment snapshot in, complete configuration object out. It is evaluated
//! once at process start; a changed environment requires a restart.
//!
//! The execution mode decides network visibility: compile, clean, and test
//! invocations resolve an empty network map (no live credentials needed, so
//! absent secrets must not fail those runs), while a normal invocation
//! resolves the full fixed set and fails loudly on any missing piece.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::compiler::{resolve_compilers, CompilerEntry};
use crate::config::network::{self, NetworkDescriptor, NetworkId};
use crate::config::report::{
    resolve_test_timeout, GasReportSettings, LogStripping,
};
use crate::config::verify::{
    resolve_api_keys, VerificationConfig, DEFAULT_VERIFIED_NETWORKS,
};
use crate::env::{EnvSnapshot, ExecutionMode, TEST_FLAG};
use crate::error::Result;

/// Fixed admin account address.
const ADMIN_ADDRESS: &str = "0x1a00e1e311009e56e3b0b9ed6f86f5ce128a1c01";

/// Reference to a signing account: either an index into the active accounts
/// sequence or a literal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AccountRef {
    Index(u32),
    Address(String),
}

/// Well-known account roles used by deployment scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamedAccounts {
    pub deployer: AccountRef,
    pub admin: AccountRef,
}

impl Default for NamedAccounts {
    fn default() -> Self {
        Self {
            deployer: AccountRef::Index(0),
            admin: AccountRef::Address(ADMIN_ADDRESS.to_string()),
        }
    }
}

/// Project layout handed to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PathsConfig {
    /// Directory holding contract sources.
    pub sources: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: "./solidity".to_string(),
        }
    }
}

/// Typed-bindings generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BindingsConfig {
    pub out_dir: String,
    pub target: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            out_dir: "typechained".to_string(),
            target: "ethers-v5".to_string(),
        }
    }
}

/// The complete resolved toolchain configuration.
///
/// Produced once at startup and treated as read-only by every consumer:
/// the compiler, the network/deploy runner, the verification client, and the
/// reporting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolchainConfig {
    /// Mode this configuration was resolved for.
    pub mode: ExecutionMode,
    /// Network selected when none is named explicitly.
    pub default_network: NetworkId,
    pub named_accounts: NamedAccounts,
    /// Test-runner timeout in milliseconds. Advisory; enforced elsewhere.
    pub test_timeout_ms: u64,
    /// Remote networks visible to this invocation. Empty for compile, clean,
    /// and test modes.
    pub networks: BTreeMap<NetworkId, NetworkDescriptor>,
    pub compilers: Vec<CompilerEntry>,
    pub gas_report: GasReportSettings,
    pub log_stripping: LogStripping,
    pub verification: VerificationConfig,
    pub paths: PathsConfig,
    pub bindings: BindingsConfig,
}

impl ToolchainConfig {
    /// Resolve the configuration, detecting the mode from snapshot flags.
    pub fn resolve(snapshot: &EnvSnapshot) -> Result<Self> {
        Self::resolve_for_mode(snapshot, ExecutionMode::detect(snapshot))
    }

    /// Resolve the configuration for an explicit mode.
    pub fn resolve_for_mode(snapshot: &EnvSnapshot, mode: ExecutionMode) -> Result<Self> {
        tracing::debug!(%mode, "resolving toolchain configuration");

        let networks = resolve_networks(mode, snapshot)?;
        let verification = if mode.needs_networks() {
            VerificationConfig::resolve(DEFAULT_VERIFIED_NETWORKS, snapshot)?
        } else {
            VerificationConfig::empty()
        };

        Ok(Self {
            mode,
            default_network: NetworkId::Local,
            named_accounts: NamedAccounts::default(),
            test_timeout_ms: resolve_test_timeout(snapshot),
            networks,
            compilers: resolve_compilers(snapshot.is_truthy(TEST_FLAG)),
            gas_report: GasReportSettings::resolve(snapshot),
            log_stripping: LogStripping::resolve(snapshot),
            verification,
            paths: PathsConfig::default(),
            bindings: BindingsConfig::default(),
        })
    }
}

/// Resolve the network map for a mode.
///
/// Compile, clean, and test runs never touch a live chain, so they see an
/// empty map regardless of which variables are set. A normal run resolves
/// every network in the fixed remote set and fails on the first missing or
/// malformed variable.
pub fn resolve_networks(
    mode: ExecutionMode,
    snapshot: &EnvSnapshot,
) -> Result<BTreeMap<NetworkId, NetworkDescriptor>> {
    if !mode.needs_networks() {
        return Ok(BTreeMap::new());
    }

    let mut networks = BTreeMap::new();
    for &network in NetworkId::REMOTE {
        networks.insert(network, NetworkDescriptor::resolve(network, snapshot)?);
    }
    Ok(networks)
}

/// One problem found during a preflight check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckIssue {
    pub network: NetworkId,
    pub variable: String,
    pub problem: String,
}

/// Result of checking a snapshot against a mode's requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    pub mode: ExecutionMode,
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Whether the snapshot satisfies every requirement of the mode.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a snapshot against a mode's requirements without failing fast.
///
/// Resolution proper aborts on the first problem; this walks every network
/// independently and collects all of them, so one `check` run surfaces the
/// complete list of variables left to set.
pub fn preflight(snapshot: &EnvSnapshot, mode: ExecutionMode) -> CheckReport {
    let mut issues = Vec::new();

    // The error itself knows which variable it is about; accounts errors in
    // particular may name the mnemonic variable rather than the key list.
    fn push(issues: &mut Vec<CheckIssue>, net: NetworkId, e: crate::error::ChainrigError) {
        issues.push(CheckIssue {
            network: net,
            variable: e
                .variable()
                .map(str::to_string)
                .unwrap_or_else(|| net.accounts_var()),
            problem: e.to_string(),
        });
    }

    if mode.needs_networks() {
        for &net in NetworkId::REMOTE {
            if let Err(e) = network::node_url(net, snapshot) {
                push(&mut issues, net, e);
            }
            if let Err(e) = network::accounts(net, snapshot) {
                push(&mut issues, net, e);
            }
        }
        for &net in DEFAULT_VERIFIED_NETWORKS {
            if let Err(e) = resolve_api_keys(&[net], snapshot) {
                push(&mut issues, net, e);
            }
        }
    }

    CheckReport { mode, issues }
}
