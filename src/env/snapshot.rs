//! Environment snapshots.
//!
//! All resolution in chainrig is a pure function of an [`EnvSnapshot`]: the
//! process environment is read exactly once at startup, and every resolver
//! receives the snapshot as an explicit parameter. Tests build snapshots from
//! in-memory maps instead of mutating the real process environment.

use std::collections::HashMap;
use std::path::Path;

use crate::env::dotenv;
use crate::error::Result;

/// An immutable snapshot of environment variables.
///
/// # Example
///
/// ```
/// use chainrig::env::EnvSnapshot;
///
/// let snap = EnvSnapshot::from_pairs([("REPORT_GAS", "1"), ("EMPTY", "")]);
/// assert_eq!(snap.get("REPORT_GAS"), Some("1"));
/// assert!(snap.is_truthy("REPORT_GAS"));
/// assert!(!snap.is_truthy("EMPTY"));
/// assert!(!snap.is_truthy("UNSET"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Capture the process environment layered over a dotenv file.
    ///
    /// Variables already present in the process environment win over the file,
    /// matching conventional dotenv loading.
    ///
    /// # Errors
    ///
    /// Returns `EnvFileNotFound` or `EnvFileParseError` when the file is
    /// missing or malformed.
    pub fn from_process_with_dotenv(path: &Path) -> Result<Self> {
        let mut vars = dotenv::load_env_file(path)?;
        vars.extend(std::env::vars());
        Ok(Self { vars })
    }

    /// Build a snapshot from an existing map.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Build a snapshot from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is set to a non-empty value.
    ///
    /// Mirrors the truthiness rule toggle variables are documented with:
    /// unset and empty-string both count as "off".
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Whether a variable explicitly disables a default-on toggle.
    ///
    /// Only the literal values `false` and `0` disable; anything else
    /// (including unset) leaves the toggle on.
    pub fn is_disabled(&self, key: &str) -> bool {
        matches!(self.get(key), Some("false") | Some("0"))
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
