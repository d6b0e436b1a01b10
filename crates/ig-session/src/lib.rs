//! ig-session - IG Trading REST API Session Client
//!
//! This library authenticates against the IG REST trading gateway with an
//! API key and account credentials, stores the returned security tokens,
//! and attaches them to further requests. All operations flow through a
//! [`Session`] object owned by the caller.
//!
//! # Example
//!
//! ```no_run
//! use ig_session::{Credentials, GatewayUrl, Method, Session};
//!
//! # async fn example() -> Result<(), ig_session::Error> {
//! let credentials = Credentials::new("api-key", "trader01", "password");
//! let session = Session::with_gateway(credentials, GatewayUrl::demo())?;
//!
//! let login = session.login().await?;
//! println!("streaming endpoint: {:?}", login.lightstreamer_endpoint);
//!
//! let url = session.gateway().endpoint("positions");
//! let positions = session.perform(&url, Method::GET, None).await?;
//! println!("{}", positions);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod models;
mod rest;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, SecurityTokens, Session};
pub use error::Error;
pub use models::LoginResponse;
pub use reqwest::Method;
pub use types::GatewayUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
