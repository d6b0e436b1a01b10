//! Login credentials type.

use std::fmt;

/// Credentials for authenticating with the IG gateway.
///
/// Holds the API key sent with every request, and the username and
/// password exchanged for security tokens at login. Credentials are fixed
/// at construction and never mutated.
///
/// # Security
///
/// The API key and password are never exposed in Debug output.
///
/// # Example
///
/// ```
/// use ig_session::Credentials;
///
/// let creds = Credentials::new("api-key", "trader01", "hunter2");
/// assert_eq!(creds.username(), "trader01");
/// ```
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The application API key issued by IG
    /// * `username` - The account username, sent as the login identifier
    /// * `password` - The account password
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Use this only when constructing the login request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
