//! Error types for the ig-session library.
//!
//! Every network-calling operation reports failures through one [`Error`]
//! type, with explicit variants for transport failures, unexpected status
//! codes, malformed bodies, authentication problems and invalid input.

use std::fmt;
use thiserror::Error;

/// The unified error type for ig-session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The gateway answered with a status code other than 200.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body was not valid JSON, or not the expected shape.
    #[error("malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// Authentication errors (missing security tokens, overlapping logins).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (gateway URL, request URL, header values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code if this is an unexpected-status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns `true` if the failure relates to authentication, either a
    /// login that produced no tokens or a request the gateway refused as
    /// unauthenticated.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Auth(_) => true,
            Error::Protocol(err) => err.is_auth_error(),
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login response was accepted but lacked one or both tokens.
    #[error("response had no cst or x-security-token headers (cst: {cst}, x-security-token: {xst})")]
    MissingSecurityTokens {
        /// Whether a non-empty `cst` header was present.
        cst: bool,
        /// Whether a non-empty `x-security-token` header was present.
        xst: bool,
    },

    /// Another login on the same session has not completed yet.
    #[error("a login is already in progress on this session")]
    LoginInProgress,
}

/// An unexpected status code returned by the gateway.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Gateway error code (e.g. `error.security.invalid-details`), if the
    /// body carried one.
    pub error_code: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status code: {}", self.status)?;
        if let Some(ref code) = self.error_code {
            write!(f, " [{}]", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error_code: Option<String>) -> Self {
        Self { status, error_code }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self
                .error_code
                .as_deref()
                .is_some_and(|code| code.starts_with("error.security."))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid gateway URL.
    #[error("invalid gateway URL '{value}': {reason}")]
    GatewayUrl { value: String, reason: String },

    /// Invalid request URL passed to `perform`.
    #[error("invalid request URL '{value}': {reason}")]
    RequestUrl { value: String, reason: String },

    /// A credential or token cannot be sent as an HTTP header value.
    #[error("invalid value for header {header}")]
    HeaderValue { header: &'static str },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
