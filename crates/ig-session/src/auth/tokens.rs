//! Security token types returned at login.

use std::fmt;

/// The client security token (CST) identifying the session.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecurityToken(String);

impl ClientSecurityToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in the `CST` request header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecurityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientSecurityToken")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// The account security token (XST) returned alongside the CST.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccountSecurityToken(String);

impl AccountSecurityToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in the `X-SECURITY-TOKEN` request header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountSecurityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccountSecurityToken")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// The pair of tokens attached to every authenticated request.
///
/// A session either holds both tokens or neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityTokens {
    pub cst: ClientSecurityToken,
    pub xst: AccountSecurityToken,
}

impl SecurityTokens {
    /// Build the pair from raw header values. Empty values count as absent.
    ///
    /// Returns `Err((has_cst, has_xst))` when either is missing.
    pub(crate) fn from_headers(
        cst: Option<&str>,
        xst: Option<&str>,
    ) -> Result<Self, (bool, bool)> {
        let cst = cst.filter(|v| !v.is_empty());
        let xst = xst.filter(|v| !v.is_empty());

        match (cst, xst) {
            (Some(cst), Some(xst)) => Ok(Self {
                cst: ClientSecurityToken::new(cst),
                xst: AccountSecurityToken::new(xst),
            }),
            (cst, xst) => Err((cst.is_some(), xst.is_some())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_hide_values_in_debug() {
        let tokens = SecurityTokens::from_headers(Some("cst-abc123"), Some("xst-def456")).unwrap();
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("cst-abc123"));
        assert!(!debug.contains("xst-def456"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn both_tokens_required() {
        assert_eq!(
            SecurityTokens::from_headers(Some("cst"), None).unwrap_err(),
            (true, false)
        );
        assert_eq!(
            SecurityTokens::from_headers(None, Some("xst")).unwrap_err(),
            (false, true)
        );
        assert_eq!(
            SecurityTokens::from_headers(None, None).unwrap_err(),
            (false, false)
        );
    }

    #[test]
    fn empty_header_counts_as_missing() {
        assert_eq!(
            SecurityTokens::from_headers(Some(""), Some("xst")).unwrap_err(),
            (false, true)
        );
    }

    #[test]
    fn pair_keeps_header_values() {
        let tokens = SecurityTokens::from_headers(Some("cst-1"), Some("xst-1")).unwrap();
        assert_eq!(tokens.cst.as_str(), "cst-1");
        assert_eq!(tokens.xst.as_str(), "xst-1");
    }
}
