//! Integration tests for the public resolution API.

use chainrig::config::{
    preflight, resolve_api_keys, resolve_networks, NetworkDescriptor, NetworkId,
    ToolchainConfig, DEFAULT_VERIFIED_NETWORKS, PLACEHOLDER_API_KEY,
};
use chainrig::env::{EnvSnapshot, ExecutionMode};
use chainrig::ChainrigError;

const KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Every variable a normal-mode resolution needs.
fn full_pairs() -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for &net in NetworkId::REMOTE {
        pairs.push((
            net.node_uri_var(),
            format!("https://{}.example.com", net.as_str()),
        ));
        pairs.push((net.accounts_var(), KEY.to_string()));
    }
    for &net in DEFAULT_VERIFIED_NETWORKS {
        pairs.push((net.api_key_var(), format!("{}-key", net.as_str())));
    }
    pairs
}

#[test]
fn build_modes_never_see_networks() {
    // Variables set or unset makes no difference in compile/clean/test modes.
    for pairs in [Vec::new(), full_pairs()] {
        let snap = EnvSnapshot::from_pairs(pairs);
        for mode in [
            ExecutionMode::Compile,
            ExecutionMode::Clean,
            ExecutionMode::Test,
        ] {
            let config = ToolchainConfig::resolve_for_mode(&snap, mode).unwrap();
            assert!(config.networks.is_empty(), "mode {mode}");
        }
    }
}

#[test]
fn normal_mode_yields_the_complete_fixed_set() {
    let snap = EnvSnapshot::from_pairs(full_pairs());
    let config = ToolchainConfig::resolve_for_mode(&snap, ExecutionMode::Normal).unwrap();

    assert_eq!(config.networks.len(), NetworkId::REMOTE.len());
    for (net, descriptor) in &config.networks {
        assert!(!descriptor.url.is_empty(), "{net}");
        assert!(!descriptor.accounts.is_empty(), "{net}");
    }
    // Requested verification list plus the placeholder entry.
    assert_eq!(
        config.verification.api_keys.len(),
        DEFAULT_VERIFIED_NETWORKS.len() + 1
    );
    assert_eq!(
        config.verification.api_keys[&NetworkId::BaseGoerli],
        PLACEHOLDER_API_KEY
    );
}

#[test]
fn single_missing_url_fails_and_names_the_network() {
    let pairs: Vec<_> = full_pairs()
        .into_iter()
        .filter(|(k, _)| k != "NODE_URI_POLYGON")
        .collect();
    let snap = EnvSnapshot::from_pairs(pairs);

    let err = resolve_networks(ExecutionMode::Normal, &snap).unwrap_err();
    match err {
        ChainrigError::MissingConfiguration { variable, network } => {
            assert_eq!(variable, "NODE_URI_POLYGON");
            assert_eq!(network, "polygon");
        }
        other => panic!("unexpected error: {other}"),
    }

    // No other network's independent resolution is affected.
    for &net in NetworkId::REMOTE {
        if net != NetworkId::Polygon {
            assert!(NetworkDescriptor::resolve(net, &snap).is_ok(), "{net}");
        }
    }
}

#[test]
fn verification_mapping_tracks_the_requested_list_exactly() {
    let snap = EnvSnapshot::from_pairs(full_pairs());

    // One requested network, one entry, no matter how many networks exist.
    let keys = resolve_api_keys(&[NetworkId::Ethereum], &snap).unwrap();
    assert_eq!(keys.len(), 1);
    assert!(keys.contains_key(&NetworkId::Ethereum));
    assert!(!keys.contains_key(&NetworkId::Polygon));
}

#[test]
fn partial_environment_is_rejected_not_partially_resolved() {
    // Only ethereum configured: the contract requires the full fixed set, so
    // normal-mode resolution fails instead of producing a one-network map.
    let snap = EnvSnapshot::from_pairs([
        ("NODE_URI_ETHEREUM", "https://eth.example.com"),
        ("ACCOUNTS_ETHEREUM", KEY),
        ("ETHERSCAN_API_KEY_ETHEREUM", "eth-key"),
    ]);
    assert!(ToolchainConfig::resolve_for_mode(&snap, ExecutionMode::Normal).is_err());
}

#[test]
fn storage_layout_overlay_follows_the_test_flag() {
    let with_flag = EnvSnapshot::from_pairs([("TEST", "1")]);
    let without_flag = EnvSnapshot::default();

    let tested = ToolchainConfig::resolve(&with_flag).unwrap();
    for entry in &tested.compilers {
        let selection = entry.output_selection.as_ref().unwrap();
        assert_eq!(selection["*"]["*"], vec!["storageLayout".to_string()]);
    }

    let plain =
        ToolchainConfig::resolve_for_mode(&without_flag, ExecutionMode::Compile).unwrap();
    for entry in &plain.compilers {
        assert!(entry.output_selection.is_none());
    }

    // Optimizer settings are identical either way.
    for (a, b) in tested.compilers.iter().zip(plain.compilers.iter()) {
        assert_eq!(a.optimizer, b.optimizer);
        assert_eq!(a.version, b.version);
    }
}

#[test]
fn resolution_is_idempotent_for_a_fixed_snapshot() {
    let snap = EnvSnapshot::from_pairs(full_pairs());
    let first = ToolchainConfig::resolve(&snap).unwrap();
    let second = ToolchainConfig::resolve(&snap).unwrap();
    assert_eq!(first, second);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn preflight_lists_all_problems_at_once() {
    let pairs: Vec<_> = full_pairs()
        .into_iter()
        .filter(|(k, _)| k != "NODE_URI_POLYGON" && k != "ACCOUNTS_BNB")
        .collect();
    let snap = EnvSnapshot::from_pairs(pairs);

    let report = preflight(&snap, ExecutionMode::Normal);
    assert_eq!(report.issues.len(), 2);
    let variables: Vec<_> = report.issues.iter().map(|i| i.variable.as_str()).collect();
    assert!(variables.contains(&"NODE_URI_POLYGON"));
    assert!(variables.contains(&"ACCOUNTS_BNB"));
}

#[test]
fn mode_detection_flows_through_full_resolution() {
    let snap = EnvSnapshot::from_pairs([("CHAINRIG_COMPILE", "1")]);
    let config = ToolchainConfig::resolve(&snap).unwrap();
    assert_eq!(config.mode, ExecutionMode::Compile);

    let snap = EnvSnapshot::from_pairs(full_pairs());
    let config = ToolchainConfig::resolve(&snap).unwrap();
    assert_eq!(config.mode, ExecutionMode::Normal);
}
