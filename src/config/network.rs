//! Network identifiers and per-network descriptor resolution.
//!
//! The set of supported networks is closed: one mainnet and its test
//! network(s) per chain family, mirroring the deploy targets of the contract
//! repository. Each remote network derives its RPC endpoint and signing
//! accounts from its own environment variables; resolution is per-key and
//! independent, so a missing variable for one network never affects another.
//!
//! # Variable scheme
//!
//! For a network `ethereum-goerli` the variables are:
//!
//! ```text
//! NODE_URI_ETHEREUM_GOERLI      RPC endpoint (http/https/ws/wss)
//! ACCOUNTS_ETHEREUM_GOERLI      comma-separated 0x hex private keys
//! MNEMONIC_ETHEREUM_GOERLI      seed phrase (used when ACCOUNTS_* is unset)
//! ETHERSCAN_API_KEY_ETHEREUM_GOERLI   explorer verification key
//! ```

use std::sync::OnceLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::env::EnvSnapshot;
use crate::error::{ChainrigError, Result};

/// Default derivation path for mnemonic-based accounts.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

/// Number of accounts derived from a mnemonic by default.
pub const DEFAULT_MNEMONIC_COUNT: u32 = 10;

/// Symbolic name for a target blockchain network.
///
/// `Local` is the in-process development network: it has no endpoint or
/// credentials and never appears in the remote network map.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkId {
    Local,
    Ethereum,
    EthereumRopsten,
    EthereumRinkeby,
    EthereumKovan,
    EthereumGoerli,
    Optimism,
    OptimismKovan,
    Arbitrum,
    ArbitrumRinkeby,
    Polygon,
    PolygonMumbai,
    Avalanche,
    AvalancheFuji,
    Bnb,
    BnbTestnet,
    Fantom,
    FantomTestnet,
    Base,
    BaseGoerli,
}

impl NetworkId {
    /// Every supported network, local included.
    pub const ALL: &'static [NetworkId] = &[
        NetworkId::Local,
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
        NetworkId::Avalanche,
        NetworkId::AvalancheFuji,
        NetworkId::Bnb,
        NetworkId::BnbTestnet,
        NetworkId::Fantom,
        NetworkId::FantomTestnet,
        NetworkId::Base,
        NetworkId::BaseGoerli,
    ];

    /// The fixed set of remote networks, i.e. every network that carries an
    /// endpoint and signing credentials.
    pub const REMOTE: &'static [NetworkId] = &[
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
        NetworkId::Avalanche,
        NetworkId::AvalancheFuji,
        NetworkId::Bnb,
        NetworkId::BnbTestnet,
        NetworkId::Fantom,
        NetworkId::FantomTestnet,
        NetworkId::Base,
        NetworkId::BaseGoerli,
    ];

    /// Kebab-case network name, as used in configuration output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Ethereum => "ethereum",
            Self::EthereumRopsten => "ethereum-ropsten",
            Self::EthereumRinkeby => "ethereum-rinkeby",
            Self::EthereumKovan => "ethereum-kovan",
            Self::EthereumGoerli => "ethereum-goerli",
            Self::Optimism => "optimism",
            Self::OptimismKovan => "optimism-kovan",
            Self::Arbitrum => "arbitrum",
            Self::ArbitrumRinkeby => "arbitrum-rinkeby",
            Self::Polygon => "polygon",
            Self::PolygonMumbai => "polygon-mumbai",
            Self::Avalanche => "avalanche",
            Self::AvalancheFuji => "avalanche-fuji",
            Self::Bnb => "bnb",
            Self::BnbTestnet => "bnb-testnet",
            Self::Fantom => "fantom",
            Self::FantomTestnet => "fantom-testnet",
            Self::Base => "base",
            Self::BaseGoerli => "base-goerli",
        }
    }

    /// Uppercase underscore form used to build variable names.
    pub fn env_suffix(self) -> String {
        self.as_str().to_uppercase().replace('-', "_")
    }

    /// Name of the RPC endpoint variable for this network.
    pub fn node_uri_var(self) -> String {
        format!("NODE_URI_{}", self.env_suffix())
    }

    /// Name of the private-key-list variable for this network.
    pub fn accounts_var(self) -> String {
        format!("ACCOUNTS_{}", self.env_suffix())
    }

    /// Name of the mnemonic variable for this network.
    pub fn mnemonic_var(self) -> String {
        format!("MNEMONIC_{}", self.env_suffix())
    }

    /// Name of the explorer API key variable for this network.
    pub fn api_key_var(self) -> String {
        format!("ETHERSCAN_API_KEY_{}", self.env_suffix())
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| format!("unknown network '{s}'"))
    }
}

/// Signing credentials for a network: either an explicit ordered key list or
/// a mnemonic-based derivation descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AccountsSpec {
    /// Ordered list of 0x-prefixed 32-byte hex private keys.
    PrivateKeys(Vec<String>),
    /// Derivation-path descriptor over a seed phrase.
    Mnemonic {
        mnemonic: String,
        path: String,
        count: u32,
    },
}

impl AccountsSpec {
    /// Number of signing accounts this spec yields.
    pub fn len(&self) -> usize {
        match self {
            Self::PrivateKeys(keys) => keys.len(),
            Self::Mnemonic { count, .. } => *count as usize,
        }
    }

    /// Whether the spec yields no accounts. Never true for a resolved spec.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Secret strings carried by this spec, for output redaction.
    pub fn secret_values(&self) -> Vec<&str> {
        match self {
            Self::PrivateKeys(keys) => keys.iter().map(String::as_str).collect(),
            Self::Mnemonic { mnemonic, .. } => vec![mnemonic.as_str()],
        }
    }
}

/// Endpoint URL plus signing credentials for one remote network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkDescriptor {
    /// RPC endpoint URL.
    pub url: String,
    /// Signing credentials. Non-empty by construction.
    pub accounts: AccountsSpec,
}

impl NetworkDescriptor {
    /// Resolve the descriptor for one network from a snapshot.
    ///
    /// Fails with `MissingConfiguration` when the URL or accounts variable is
    /// absent, `InvalidNodeUrl` for a malformed endpoint, and
    /// `MalformedAccounts` for an unparsable accounts value. Resolution never
    /// consults any other network's variables.
    pub fn resolve(network: NetworkId, snapshot: &EnvSnapshot) -> Result<Self> {
        Ok(Self {
            url: node_url(network, snapshot)?,
            accounts: accounts(network, snapshot)?,
        })
    }
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(https?|wss?)://\S+$").unwrap())
}

/// Resolve the RPC endpoint for a network.
pub fn node_url(network: NetworkId, snapshot: &EnvSnapshot) -> Result<String> {
    let variable = network.node_uri_var();
    let url = snapshot
        .get(&variable)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ChainrigError::MissingConfiguration {
            variable: variable.clone(),
            network: network.to_string(),
        })?;

    if !url_regex().is_match(url) {
        return Err(ChainrigError::InvalidNodeUrl {
            variable,
            network: network.to_string(),
            url: url.to_string(),
        });
    }

    Ok(url.to_string())
}

/// Resolve signing accounts for a network.
///
/// `ACCOUNTS_<NETWORK>` takes precedence and must hold one or more
/// comma-separated hex private keys; otherwise `MNEMONIC_<NETWORK>` supplies
/// a seed phrase with the default derivation path.
pub fn accounts(network: NetworkId, snapshot: &EnvSnapshot) -> Result<AccountsSpec> {
    let keys_var = network.accounts_var();
    if let Some(raw) = snapshot.get(&keys_var) {
        return parse_private_keys(raw, &keys_var, network);
    }

    let mnemonic_var = network.mnemonic_var();
    if let Some(phrase) = snapshot.get(&mnemonic_var) {
        return parse_mnemonic(phrase, &mnemonic_var, network);
    }

    Err(ChainrigError::MissingConfiguration {
        variable: keys_var,
        network: network.to_string(),
    })
}

fn parse_private_keys(raw: &str, variable: &str, network: NetworkId) -> Result<AccountsSpec> {
    let malformed = |message: String| ChainrigError::MalformedAccounts {
        variable: variable.to_string(),
        network: network.to_string(),
        message,
    };

    let mut keys = Vec::new();
    for (idx, entry) in raw.split(',').map(str::trim).enumerate() {
        if entry.is_empty() {
            return Err(malformed(format!("entry {} is empty", idx + 1)));
        }
        let hex_part = entry.strip_prefix("0x").unwrap_or(entry);
        let bytes = hex::decode(hex_part)
            .map_err(|_| malformed(format!("entry {} is not valid hex", idx + 1)))?;
        if bytes.len() != 32 {
            return Err(malformed(format!(
                "entry {} is {} bytes, expected a 32-byte key",
                idx + 1,
                bytes.len()
            )));
        }
        keys.push(format!("0x{}", hex_part.to_lowercase()));
    }

    if keys.is_empty() {
        return Err(malformed("no keys present".to_string()));
    }

    Ok(AccountsSpec::PrivateKeys(keys))
}

fn parse_mnemonic(phrase: &str, variable: &str, network: NetworkId) -> Result<AccountsSpec> {
    let words = phrase.split_whitespace().count();
    if words < 12 {
        return Err(ChainrigError::MalformedAccounts {
            variable: variable.to_string(),
            network: network.to_string(),
            message: format!("mnemonic has {words} words, expected at least 12"),
        });
    }

    Ok(AccountsSpec::Mnemonic {
        mnemonic: phrase.trim().to_string(),
        path: DEFAULT_DERIVATION_PATH.to_string(),
        count: DEFAULT_MNEMONIC_COUNT,
    })
}
