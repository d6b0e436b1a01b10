//! Typed response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a successful login.
///
/// Documented fields are typed; anything else the gateway sends is kept
/// in [`LoginResponse::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Endpoint of the real-time streaming feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightstreamer_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Account type, e.g. `CFD` or `SPREADBET`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_iso_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    /// Client timezone offset from UTC, in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_info: Option<AccountInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_demo_accounts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_live_accounts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stops_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealing_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerouting_environment: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Balance summary of the current account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub profit_loss: Option<f64>,
    #[serde(default)]
    pub available: Option<f64>,
}

/// One of the accounts available to the logged-in client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub preferred: Option<bool>,
}
