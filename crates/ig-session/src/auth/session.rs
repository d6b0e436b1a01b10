//! Session management for authenticated gateway operations.

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{AuthError, Error, InvalidInputError};
use crate::models::LoginResponse;
use crate::rest::{
    API_KEY_HEADER, CST_HEADER, CST_RESPONSE_HEADER, LoginRequest, RestClient, XST_HEADER,
    XST_RESPONSE_HEADER, insert_header, json_headers,
};
use crate::types::GatewayUrl;

use super::credentials::Credentials;
use super::tokens::SecurityTokens;

/// A session with the IG gateway.
///
/// A session starts unauthenticated. A successful [`Session::login()`]
/// stores the client and account security tokens, which are then attached
/// to every [`Session::perform()`] call.
///
/// # Token policy
///
/// Tokens and the streaming endpoint are written only when a login fully
/// succeeds. A failed login leaves whatever an earlier login stored.
///
/// # Concurrency
///
/// Sessions are cheap to clone and share one state. Only one login may be
/// in flight at a time; a second call made meanwhile fails with
/// [`AuthError::LoginInProgress`] instead of racing the first.
///
/// # Example
///
/// ```no_run
/// use ig_session::{Credentials, Session};
///
/// # async fn example() -> Result<(), ig_session::Error> {
/// let session = Session::new(Credentials::new("api-key", "trader01", "password"))?;
/// let login = session.login().await?;
/// println!("Logged in to account {:?}", login.current_account_id);
///
/// let markets = session.market_search("EURUSD").await?;
/// println!("{}", markets);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    credentials: Credentials,
    gateway: GatewayUrl,
    client: RestClient,
    state: RwLock<SessionState>,
    login_guard: Mutex<()>,
}

#[derive(Default)]
struct SessionState {
    tokens: Option<SecurityTokens>,
    streaming_endpoint: Option<String>,
}

impl Session {
    /// Create an unauthenticated session against the live gateway.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_gateway(credentials, GatewayUrl::live())
    }

    /// Create an unauthenticated session against the given gateway.
    pub fn with_gateway(credentials: Credentials, gateway: GatewayUrl) -> Result<Self, Error> {
        let client = RestClient::new()?;

        Ok(Self {
            inner: Arc::new(SessionInner {
                credentials,
                gateway,
                client,
                state: RwLock::new(SessionState::default()),
                login_guard: Mutex::new(()),
            }),
        })
    }

    /// Authenticate with the gateway and store the returned security tokens.
    ///
    /// Succeeds only when the status is exactly 200, both the `cst` and
    /// `x-security-token` headers are present, and the body parses.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be completed
    /// - [`Error::Protocol`] for any status other than 200
    /// - [`AuthError::MissingSecurityTokens`] if either token header is absent
    /// - [`Error::MalformedBody`] if the body is not a JSON object
    /// - [`AuthError::LoginInProgress`] if another login has not finished
    #[instrument(skip(self), fields(gateway = %self.inner.gateway, username = %self.inner.credentials.username()))]
    pub async fn login(&self) -> Result<LoginResponse, Error> {
        let _guard = self
            .inner
            .login_guard
            .try_lock()
            .map_err(|_| AuthError::LoginInProgress)?;

        info!("Creating new session");

        let credentials = &self.inner.credentials;
        let mut headers = json_headers();
        insert_header(&mut headers, API_KEY_HEADER, credentials.api_key())?;

        let request = LoginRequest {
            identifier: credentials.username(),
            password: credentials.password(),
        };
        let body = serde_json::to_vec(&request).map_err(|e| InvalidInputError::Other {
            message: e.to_string(),
        })?;

        let url = parse_url(&self.inner.gateway.session_url())?;
        let response = self
            .inner
            .client
            .send(Method::POST, url, headers, Some(body))
            .await?;

        response.ensure_ok()?;

        let tokens = SecurityTokens::from_headers(
            response.header(CST_RESPONSE_HEADER),
            response.header(XST_RESPONSE_HEADER),
        )
        .map_err(|(cst, xst)| AuthError::MissingSecurityTokens { cst, xst })?;

        let login: LoginResponse = response.json()?;

        {
            let mut state = self.inner.state.write().await;
            state.tokens = Some(tokens);
            state.streaming_endpoint = login.lightstreamer_endpoint.clone();
        }

        debug!(
            account = ?login.current_account_id,
            streaming_endpoint = ?login.lightstreamer_endpoint,
            "Session created successfully"
        );

        Ok(login)
    }

    /// Perform an arbitrary request with the session's authentication headers.
    ///
    /// Sends JSON `Content-Type`/`Accept` headers, the API key, and the
    /// stored CST and XST. When `body` is `None` no request body is sent.
    /// Token presence is not checked: before a login the token headers are
    /// sent empty and the gateway is expected to refuse the request.
    ///
    /// Returns the parsed JSON body of a 200 response.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be completed
    /// - [`Error::Protocol`] for any status other than 200
    /// - [`Error::MalformedBody`] if the body is not valid JSON
    pub async fn perform(
        &self,
        url: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.perform_as(url, method, body).await
    }

    /// Like [`Session::perform()`], deserializing the body into `R`.
    #[instrument(skip(self, body), fields(gateway = %self.inner.gateway))]
    pub async fn perform_as<R: DeserializeOwned>(
        &self,
        url: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<R, Error> {
        let url = Url::parse(url).map_err(|e| InvalidInputError::RequestUrl {
            value: url.to_string(),
            reason: e.to_string(),
        })?;

        let headers = self.auth_headers().await?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| InvalidInputError::Other {
                message: e.to_string(),
            })?;

        let response = self.inner.client.send(method, url, headers, body).await?;
        response.ensure_ok()?;
        response.json()
    }

    /// Search markets by name or epic.
    ///
    /// The search term is appended to the query string as given.
    pub async fn market_search(&self, search_term: &str) -> Result<Value, Error> {
        let url = self.inner.gateway.market_search_url(search_term);
        self.perform(&url, Method::GET, None).await
    }

    /// Returns `true` once a login has stored both security tokens.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.tokens.is_some()
    }

    /// Returns a copy of the stored security tokens, if logged in.
    ///
    /// # Security
    ///
    /// Handle the returned tokens securely. They grant access to the account.
    pub async fn security_tokens(&self) -> Option<SecurityTokens> {
        self.inner.state.read().await.tokens.clone()
    }

    /// Returns the streaming endpoint captured at the last successful login.
    pub async fn streaming_endpoint(&self) -> Option<String> {
        self.inner.state.read().await.streaming_endpoint.clone()
    }

    /// Returns the credentials this session was created with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns the gateway this session talks to.
    pub fn gateway(&self) -> &GatewayUrl {
        &self.inner.gateway
    }

    async fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let state = self.inner.state.read().await;
        let (cst, xst) = match state.tokens {
            Some(ref tokens) => (tokens.cst.as_str(), tokens.xst.as_str()),
            None => {
                debug!("No security tokens; sending empty token headers");
                ("", "")
            }
        };

        let mut headers = json_headers();
        insert_header(&mut headers, API_KEY_HEADER, self.inner.credentials.api_key())?;
        insert_header(&mut headers, CST_HEADER, cst)?;
        insert_header(&mut headers, XST_HEADER, xst)?;
        Ok(headers)
    }
}

fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| {
        InvalidInputError::RequestUrl {
            value: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credentials", &self.inner.credentials)
            .field("gateway", &self.inner.gateway)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Credentials::new("key-abc", "trader01", "secret")).unwrap()
    }

    #[tokio::test]
    async fn new_session_is_unauthenticated() {
        let session = session();
        assert!(!session.is_authenticated().await);
        assert!(session.security_tokens().await.is_none());
        assert!(session.streaming_endpoint().await.is_none());
        assert_eq!(session.gateway(), &GatewayUrl::live());
    }

    #[tokio::test]
    async fn unauthenticated_headers_are_empty() {
        let headers = session().auth_headers().await.unwrap();
        assert_eq!(headers["x-ig-api-key"], "key-abc");
        assert_eq!(headers["cst"], "");
        assert_eq!(headers["x-security-token"], "");
        assert_eq!(headers["accept"], "application/json");
    }

    #[tokio::test]
    async fn invalid_request_url_is_rejected() {
        let err = session()
            .perform("not a url", Method::GET, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::RequestUrl { .. })
        ));
    }

    #[test]
    fn debug_redacts_secrets() {
        let debug = format!("{:?}", session());
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("key-abc"));
        assert!(debug.contains("trader01"));
    }
}
