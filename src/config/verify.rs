//! Block-explorer verification configuration.
//!
//! Source verification needs one API key per explorer. Keys are resolved only
//! for an explicit requested list of networks; anything outside the list is
//! simply not verifiable and gets no entry. Networks whose explorer plugin
//! demands *some* key string even though verification is never invoked get a
//! placeholder sentinel instead of a real key.
//!
//! The verification client does not know every chain natively; custom chain
//! descriptors carry the numeric chain id and explorer URLs for those.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::network::NetworkId;
use crate::env::EnvSnapshot;
use crate::error::{ChainrigError, Result};

/// Sentinel for networks that need a syntactically valid key without real
/// verification support.
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_STRING";

/// The networks whose explorer keys the default assembly resolves.
///
/// Deliberately a subset of [`NetworkId::REMOTE`]: some deploy targets have
/// no independent explorer to verify against.
pub const DEFAULT_VERIFIED_NETWORKS: &[NetworkId] = &[
    NetworkId::Ethereum,
    NetworkId::EthereumRopsten,
    NetworkId::EthereumRinkeby,
    NetworkId::EthereumKovan,
    NetworkId::EthereumGoerli,
    NetworkId::Optimism,
    NetworkId::OptimismKovan,
    NetworkId::Arbitrum,
    NetworkId::ArbitrumRinkeby,
    NetworkId::Polygon,
    NetworkId::PolygonMumbai,
    NetworkId::Bnb,
    NetworkId::Base,
];

/// A chain the verification client does not know natively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChainDescriptor {
    pub network: NetworkId,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}

/// Resolved verification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationConfig {
    /// Explorer API key per verifiable network.
    pub api_keys: BTreeMap<NetworkId, String>,
    /// Descriptors for chains unknown to the verification client.
    pub custom_chains: Vec<ChainDescriptor>,
}

impl VerificationConfig {
    /// Assemble the default verification configuration.
    ///
    /// Resolves a key for every network in [`DEFAULT_VERIFIED_NETWORKS`],
    /// injects the `base-goerli` placeholder, and attaches the custom chain
    /// descriptors for the Base networks. `requested` is expected to be the
    /// default list in production; tests pass narrower lists.
    pub fn resolve(requested: &[NetworkId], snapshot: &EnvSnapshot) -> Result<Self> {
        let mut api_keys = resolve_api_keys(requested, snapshot)?;
        api_keys.insert(NetworkId::BaseGoerli, PLACEHOLDER_API_KEY.to_string());

        Ok(Self {
            api_keys,
            custom_chains: custom_chains(),
        })
    }

    /// An empty configuration, still carrying the static chain descriptors.
    /// Used by modes that never verify.
    pub fn empty() -> Self {
        Self {
            api_keys: BTreeMap::new(),
            custom_chains: custom_chains(),
        }
    }
}

/// Resolve explorer API keys for exactly the requested networks.
///
/// Every requested network must have its key variable set; networks outside
/// the list are never read and never appear in the result.
pub fn resolve_api_keys(
    requested: &[NetworkId],
    snapshot: &EnvSnapshot,
) -> Result<BTreeMap<NetworkId, String>> {
    let mut keys = BTreeMap::new();
    for &network in requested {
        let variable = network.api_key_var();
        let key = snapshot
            .get(&variable)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ChainrigError::MissingConfiguration {
                variable: variable.clone(),
                network: network.to_string(),
            })?;
        keys.insert(network, key.to_string());
    }
    Ok(keys)
}

/// Static descriptors for the chains the verification client lacks.
pub fn custom_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor {
            network: NetworkId::BaseGoerli,
            chain_id: 84531,
            api_url: "https://api-goerli.basescan.org/api".to_string(),
            browser_url: "https://goerli.basescan.org".to_string(),
        },
        ChainDescriptor {
            network: NetworkId::Base,
            chain_id: 8453,
            api_url: "https://api.basescan.org/api".to_string(),
            browser_url: "https://basescan.org".to_string(),
        },
    ]
}
