//! Execution mode detection.
//!
//! The mode is determined exactly once per process from snapshot flags and
//! drives whether live network credentials are required at all: compiling,
//! cleaning, and unit-testing never talk to a real chain, so those modes
//! resolve an empty network set and tolerate absent secrets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::env::EnvSnapshot;

/// Flag variable indicating a compile-only invocation.
pub const COMPILE_FLAG: &str = "CHAINRIG_COMPILE";
/// Flag variable indicating a clean invocation.
pub const CLEAN_FLAG: &str = "CHAINRIG_CLEAN";
/// Flag variable indicating a test invocation. Also enables the
/// storage-layout compiler output overlay.
pub const TEST_FLAG: &str = "TEST";

/// The purpose of the current process invocation.
///
/// Exactly one mode is active per process. Detection precedence is
/// compile > clean > test, falling back to [`ExecutionMode::Normal`]
/// (deploy/interact) when no flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Compiling contract sources.
    Compile,
    /// Removing build artifacts.
    Clean,
    /// Running the unit-test suite.
    Test,
    /// Deploying or otherwise interacting with live networks.
    Normal,
}

impl ExecutionMode {
    /// Detect the mode from snapshot flags.
    ///
    /// # Example
    ///
    /// ```
    /// use chainrig::env::{EnvSnapshot, ExecutionMode};
    ///
    /// let snap = EnvSnapshot::from_pairs([("TEST", "1")]);
    /// assert_eq!(ExecutionMode::detect(&snap), ExecutionMode::Test);
    ///
    /// let snap = EnvSnapshot::default();
    /// assert_eq!(ExecutionMode::detect(&snap), ExecutionMode::Normal);
    /// ```
    pub fn detect(snapshot: &EnvSnapshot) -> Self {
        if snapshot.is_truthy(COMPILE_FLAG) {
            Self::Compile
        } else if snapshot.is_truthy(CLEAN_FLAG) {
            Self::Clean
        } else if snapshot.is_truthy(TEST_FLAG) {
            Self::Test
        } else {
            Self::Normal
        }
    }

    /// Whether this mode needs live network credentials.
    pub fn needs_networks(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Clean => "clean",
            Self::Test => "test",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
