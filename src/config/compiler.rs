//! Compiler configuration assembly.
//!
//! The base compiler list is fixed: the repository pins one solc release with
//! the optimizer on. When the test flag is set every entry additionally
//! requests the storage-layout output artifact, which test assertions use to
//! map state variables to storage slots. The overlay is non-destructive:
//! version and optimizer settings pass through unchanged.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Solc optimizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

/// Compiler output-selection request, keyed by source file then contract
/// (`*` wildcards both levels).
pub type OutputSelection = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// One compiler version entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompilerEntry {
    /// Solc version, e.g. `0.8.7`.
    pub version: String,
    pub optimizer: OptimizerSettings,
    /// Additional output artifacts, present only when the test overlay applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_selection: Option<OutputSelection>,
}

impl CompilerEntry {
    /// Return a copy of this entry requesting the storage-layout artifact for
    /// every contract. All other fields are preserved.
    pub fn with_storage_layout(&self) -> Self {
        let mut entry = self.clone();
        entry.output_selection = Some(storage_layout_selection());
        entry
    }
}

/// The `*: { *: [storageLayout] }` output-selection request.
pub fn storage_layout_selection() -> OutputSelection {
    let mut inner = BTreeMap::new();
    inner.insert("*".to_string(), vec!["storageLayout".to_string()]);
    let mut outer = BTreeMap::new();
    outer.insert("*".to_string(), inner);
    outer
}

/// The fixed base compiler list.
pub fn base_compilers() -> Vec<CompilerEntry> {
    vec![CompilerEntry {
        version: "0.8.7".to_string(),
        optimizer: OptimizerSettings {
            enabled: true,
            runs: 200,
        },
        output_selection: None,
    }]
}

/// Assemble the compiler list, applying the storage-layout overlay when the
/// test flag is set.
pub fn resolve_compilers(test_flag: bool) -> Vec<CompilerEntry> {
    let base = base_compilers();
    if test_flag {
        base.iter().map(CompilerEntry::with_storage_layout).collect()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_list_has_no_output_selection() {
        let compilers = resolve_compilers(false);
        assert!(!compilers.is_empty());
        for entry in &compilers {
            assert!(entry.output_selection.is_none());
        }
    }

    #[test]
    fn test_flag_adds_storage_layout_to_every_entry() {
        let compilers = resolve_compilers(true);
        for entry in &compilers {
            let selection = entry.output_selection.as_ref().unwrap();
            assert_eq!(selection["*"]["*"], vec!["storageLayout".to_string()]);
        }
    }

    #[test]
    fn overlay_preserves_version_and_optimizer() {
        let plain = resolve_compilers(false);
        let overlaid = resolve_compilers(true);
        assert_eq!(plain.len(), overlaid.len());
        for (a, b) in plain.iter().zip(overlaid.iter()) {
            assert_eq!(a.version, b.version);
            assert_eq!(a.optimizer, b.optimizer);
        }
    }

    #[test]
    fn base_entry_pins_optimizer() {
        let compilers = base_compilers();
        assert_eq!(compilers[0].version, "0.8.7");
        assert!(compilers[0].optimizer.enabled);
        assert_eq!(compilers[0].optimizer.runs, 200);
    }

    #[test]
    fn storage_layout_serializes_as_wildcard_map() {
        let entry = base_compilers()[0].with_storage_layout();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["output_selection"]["*"]["*"][0], "storageLayout");
    }
}
