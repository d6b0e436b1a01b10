//! Gateway header names and wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Header Names
// ============================================================================

/// Request header carrying the application API key.
pub const API_KEY_HEADER: &str = "X-IG-API-KEY";

/// Request header carrying the client security token.
pub const CST_HEADER: &str = "CST";

/// Request header carrying the account security token.
pub const XST_HEADER: &str = "X-SECURITY-TOKEN";

/// Login response header holding the client security token.
pub const CST_RESPONSE_HEADER: &str = "cst";

/// Login response header holding the account security token.
pub const XST_RESPONSE_HEADER: &str = "x-security-token";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for the session endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Error envelope returned by the gateway on failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayErrorResponse {
    #[serde(default)]
    pub error_code: Option<String>,
}
