//! Output masking for secret values.
//!
//! A resolved configuration carries private keys, mnemonics, and explorer API
//! keys. When the configuration is rendered for humans the secret values are
//! replaced with a mask; machine consumers receive the unmasked object.

use crate::config::{ToolchainConfig, PLACEHOLDER_API_KEY};

/// Masks secret values in rendered output.
///
/// # Example
///
/// ```
/// use chainrig::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("super-secret-value");
///
/// let output = masker.mask("The key is super-secret-value here");
/// assert_eq!(output, "The key is [REDACTED] here");
/// ```
pub struct OutputMasker {
    secrets: Vec<String>,
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with the default mask string.
    pub fn new() -> Self {
        Self {
            secrets: Vec::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self {
            secrets: Vec::new(),
            mask: mask.into(),
        }
    }

    /// Collect every secret a resolved configuration carries: private keys,
    /// mnemonic phrases, explorer API keys, and the pricing API key. The
    /// placeholder sentinel is not a secret and stays visible.
    pub fn from_config(config: &ToolchainConfig) -> Self {
        let mut masker = Self::new();
        for descriptor in config.networks.values() {
            masker.add_secrets(descriptor.accounts.secret_values());
        }
        for key in config.verification.api_keys.values() {
            if key != PLACEHOLDER_API_KEY {
                masker.add_secret(key);
            }
        }
        if let Some(key) = &config.gas_report.pricing_api_key {
            masker.add_secret(key);
        }
        masker
    }

    /// Register a secret value to be masked. Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() && !self.secrets.contains(&value) {
            self.secrets.push(value);
        }
    }

    /// Register multiple secret values.
    pub fn add_secrets(&mut self, values: impl IntoIterator<Item = impl Into<String>>) {
        for value in values {
            self.add_secret(value);
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for secret in &self.secrets {
            result = result.replace(secret, &self.mask);
        }
        result
    }

    /// Number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}
