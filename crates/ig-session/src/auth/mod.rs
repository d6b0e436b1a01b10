//! Authentication types and session management.
//!
//! All gateway operations flow through a [`Session`], which owns the
//! credentials and, once logged in, the security tokens.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub use tokens::{AccountSecurityToken, ClientSecurityToken, SecurityTokens};
