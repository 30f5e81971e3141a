//! Error types for chainrig resolution.
//!
//! This module defines [`ChainrigError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution failures abort configuration assembly immediately; there is no
//!   partial or degraded configuration mode. A consumer trusting a half-built
//!   configuration could submit transactions with no signer or to the wrong
//!   endpoint, far from the root cause.
//! - Every resolution error names the environment variable and network involved
//!   so the fix is obvious from the message alone.
//! - Use `anyhow::Error` (via `ChainrigError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chainrig operations.
#[derive(Debug, Error)]
pub enum ChainrigError {
    /// A required environment variable is absent for a network in the active set.
    #[error("Missing configuration: {variable} is not set (required for network '{network}')")]
    MissingConfiguration { variable: String, network: String },

    /// An accounts variable is present but cannot be parsed into a non-empty
    /// sequence of secret keys.
    #[error("Malformed accounts in {variable} for network '{network}': {message}")]
    MalformedAccounts {
        variable: String,
        network: String,
        message: String,
    },

    /// A node URL variable is present but not a well-formed endpoint.
    #[error("Invalid node URL in {variable} for network '{network}': {url}")]
    InvalidNodeUrl {
        variable: String,
        network: String,
        url: String,
    },

    /// Env file not found at the requested location.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// Failed to parse an env file.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvFileParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChainrigError {
    /// The environment variable a resolution error is about, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::MissingConfiguration { variable, .. }
            | Self::MalformedAccounts { variable, .. }
            | Self::InvalidNodeUrl { variable, .. } => Some(variable),
            _ => None,
        }
    }
}

/// Result type alias for chainrig operations.
pub type Result<T> = std::result::Result<T, ChainrigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_names_variable_and_network() {
        let err = ChainrigError::MissingConfiguration {
            variable: "NODE_URI_ETHEREUM".into(),
            network: "ethereum".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("NODE_URI_ETHEREUM"));
        assert!(msg.contains("ethereum"));
    }

    #[test]
    fn malformed_accounts_names_variable_and_reason() {
        let err = ChainrigError::MalformedAccounts {
            variable: "ACCOUNTS_POLYGON".into(),
            network: "polygon".into(),
            message: "entry 2 is not a 32-byte hex key".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ACCOUNTS_POLYGON"));
        assert!(msg.contains("entry 2"));
    }

    #[test]
    fn invalid_node_url_displays_offending_value() {
        let err = ChainrigError::InvalidNodeUrl {
            variable: "NODE_URI_BASE".into(),
            network: "base".into(),
            url: "not-a-url".into(),
        };
        assert!(err.to_string().contains("not-a-url"));
    }

    #[test]
    fn env_file_not_found_displays_path() {
        let err = ChainrigError::EnvFileNotFound {
            path: PathBuf::from("/project/.env"),
        };
        assert!(err.to_string().contains("/project/.env"));
    }

    #[test]
    fn variable_accessor_covers_resolution_errors() {
        let err = ChainrigError::MalformedAccounts {
            variable: "MNEMONIC_POLYGON".into(),
            network: "polygon".into(),
            message: "mnemonic has 3 words, expected at least 12".into(),
        };
        assert_eq!(err.variable(), Some("MNEMONIC_POLYGON"));

        let err = ChainrigError::EnvFileNotFound {
            path: PathBuf::from("/project/.env"),
        };
        assert_eq!(err.variable(), None);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChainrigError = io_err.into();
        assert!(matches!(err, ChainrigError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ChainrigError::MissingConfiguration {
                variable: "X".into(),
                network: "ethereum".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
