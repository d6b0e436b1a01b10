//! Gateway URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

const LIVE_GATEWAY: &str = "https://api.ig.com/gateway/deal";
const DEMO_GATEWAY: &str = "https://demo-api.ig.com/gateway/deal";

/// A validated base URL of the IG REST trading gateway.
///
/// The URL must be absolute, use HTTPS (or HTTP for localhost), and is
/// normalized so that endpoint paths can be appended directly.
///
/// # Example
///
/// ```
/// use ig_session::GatewayUrl;
///
/// let gateway = GatewayUrl::live();
/// assert_eq!(gateway.session_url(), "https://api.ig.com/gateway/deal/session");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GatewayUrl(Url);

impl GatewayUrl {
    /// Create a new gateway URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::GatewayUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        let path = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&path);
        normalized.set_query(None);
        normalized.set_fragment(None);

        Ok(Self(normalized))
    }

    /// The production gateway.
    pub fn live() -> Self {
        Self(Url::parse(LIVE_GATEWAY).expect("live gateway URL is valid"))
    }

    /// The demo-account gateway.
    pub fn demo() -> Self {
        Self(Url::parse(DEMO_GATEWAY).expect("demo gateway URL is valid"))
    }

    /// Returns the authentication endpoint URL.
    pub fn session_url(&self) -> String {
        self.endpoint("session")
    }

    /// Returns the market search URL for `search_term`.
    ///
    /// The term is appended verbatim; callers wanting reserved characters
    /// escaped must escape them first.
    pub fn market_search_url(&self, search_term: &str) -> String {
        format!("{}?searchTerm={}", self.endpoint("markets"), search_term)
    }

    /// Returns the URL of an arbitrary endpoint path below the gateway.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // HTTP only for a local mock gateway
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for GatewayUrl {
    fn default() -> Self {
        Self::live()
    }
}

impl fmt::Display for GatewayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GatewayUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for GatewayUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for GatewayUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GatewayUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for GatewayUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
