//! Feature toggles: gas reporting, log stripping, test timeout.
//!
//! Each toggle reads its own variable and has a documented default; toggles
//! never interact. Absent variables are not errors.
//!
//! | Variable                         | Default   |
//! |----------------------------------|-----------|
//! | `REPORT_GAS`                     | disabled  |
//! | `COINMARKETCAP_DEFAULT_CURRENCY` | `USD`     |
//! | `COINMARKETCAP_API_KEY`          | absent    |
//! | `STRIP_LOGS`                     | enabled   |
//! | `TEST_TIMEOUT_MS`                | `300000`  |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::network::NetworkId;
use crate::env::EnvSnapshot;

/// Variable enabling gas reporting (set to any non-empty value).
pub const REPORT_GAS_VAR: &str = "REPORT_GAS";
/// Variable selecting the gas report currency.
pub const CURRENCY_VAR: &str = "COINMARKETCAP_DEFAULT_CURRENCY";
/// Variable holding the pricing API key.
pub const PRICING_API_KEY_VAR: &str = "COINMARKETCAP_API_KEY";
/// Variable disabling console-log stripping (`false`/`0`).
pub const STRIP_LOGS_VAR: &str = "STRIP_LOGS";
/// Variable overriding the test-runner timeout in milliseconds.
pub const TEST_TIMEOUT_VAR: &str = "TEST_TIMEOUT_MS";

/// Default gas report currency.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Default test-runner timeout in milliseconds.
pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 300_000;

/// Gas reporting settings handed to the reporting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GasReportSettings {
    pub enabled: bool,
    pub currency: String,
    /// Pricing API key; reports fall back to gas-only figures without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_api_key: Option<String>,
    /// Show full method signatures in the report.
    pub show_method_signatures: bool,
    /// Include methods the test run never called.
    pub include_uncalled_methods: bool,
}

impl GasReportSettings {
    /// Resolve from the snapshot. Never fails; every field has a default.
    pub fn resolve(snapshot: &EnvSnapshot) -> Self {
        Self {
            enabled: snapshot.is_truthy(REPORT_GAS_VAR),
            currency: snapshot
                .get(CURRENCY_VAR)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_CURRENCY)
                .to_string(),
            pricing_api_key: snapshot
                .get(PRICING_API_KEY_VAR)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            show_method_signatures: true,
            include_uncalled_methods: true,
        }
    }
}

/// Console-log stripping rule.
///
/// Contract sources keep their debug logging on the local dev network; every
/// remote network gets logs stripped before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LogStripping {
    pub enabled: bool,
    /// Networks exempt from stripping.
    pub exempt: Vec<NetworkId>,
}

impl LogStripping {
    /// Resolve from the snapshot. Enabled unless `STRIP_LOGS` is `false`/`0`.
    pub fn resolve(snapshot: &EnvSnapshot) -> Self {
        Self {
            enabled: !snapshot.is_disabled(STRIP_LOGS_VAR),
            exempt: vec![NetworkId::Local],
        }
    }

    /// Whether logs should be stripped when building for `network`.
    pub fn applies_to(&self, network: NetworkId) -> bool {
        self.enabled && !self.exempt.contains(&network)
    }
}

/// Resolve the test-runner timeout.
///
/// An unparsable value falls back to the default with a warning rather than
/// failing resolution; the timeout is advisory data for an external runner,
/// not a credential.
pub fn resolve_test_timeout(snapshot: &EnvSnapshot) -> u64 {
    match snapshot.get(TEST_TIMEOUT_VAR) {
        None => DEFAULT_TEST_TIMEOUT_MS,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = raw,
                default = DEFAULT_TEST_TIMEOUT_MS,
                "ignoring unparsable {TEST_TIMEOUT_VAR}"
            );
            DEFAULT_TEST_TIMEOUT_MS
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_report_defaults() {
        let settings = GasReportSettings::resolve(&EnvSnapshot::default());
        assert!(!settings.enabled);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.pricing_api_key, None);
        assert!(settings.show_method_signatures);
        assert!(settings.include_uncalled_methods);
    }

    #[test]
    fn report_gas_any_non_empty_value_enables() {
        for value in ["1", "true", "yes"] {
            let snap = EnvSnapshot::from_pairs([(REPORT_GAS_VAR, value)]);
            assert!(GasReportSettings::resolve(&snap).enabled);
        }
        let snap = EnvSnapshot::from_pairs([(REPORT_GAS_VAR, "")]);
        assert!(!GasReportSettings::resolve(&snap).enabled);
    }

    #[test]
    fn currency_and_api_key_come_from_their_variables() {
        let snap = EnvSnapshot::from_pairs([
            (CURRENCY_VAR, "EUR"),
            (PRICING_API_KEY_VAR, "cmc-key"),
        ]);
        let settings = GasReportSettings::resolve(&snap);
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.pricing_api_key, Some("cmc-key".to_string()));
    }

    #[test]
    fn toggles_do_not_interact() {
        // Enabling gas reporting changes nothing about currency or key.
        let snap = EnvSnapshot::from_pairs([(REPORT_GAS_VAR, "1")]);
        let settings = GasReportSettings::resolve(&snap);
        assert!(settings.enabled);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.pricing_api_key, None);
    }

    #[test]
    fn log_stripping_defaults_on_and_exempts_local() {
        let stripping = LogStripping::resolve(&EnvSnapshot::default());
        assert!(stripping.enabled);
        assert!(!stripping.applies_to(NetworkId::Local));
        assert!(stripping.applies_to(NetworkId::Ethereum));
        assert!(stripping.applies_to(NetworkId::BaseGoerli));
    }

    #[test]
    fn log_stripping_can_be_disabled() {
        let snap = EnvSnapshot::from_pairs([(STRIP_LOGS_VAR, "false")]);
        let stripping = LogStripping::resolve(&snap);
        assert!(!stripping.enabled);
        assert!(!stripping.applies_to(NetworkId::Ethereum));
    }

    #[test]
    fn timeout_default_and_override() {
        assert_eq!(
            resolve_test_timeout(&EnvSnapshot::default()),
            DEFAULT_TEST_TIMEOUT_MS
        );
        let snap = EnvSnapshot::from_pairs([(TEST_TIMEOUT_VAR, "60000")]);
        assert_eq!(resolve_test_timeout(&snap), 60_000);
    }

    #[test]
    fn unparsable_timeout_falls_back_to_default() {
        let snap = EnvSnapshot::from_pairs([(TEST_TIMEOUT_VAR, "five minutes")]);
        assert_eq!(resolve_test_timeout(&snap), DEFAULT_TEST_TIMEOUT_MS);
    }
}
