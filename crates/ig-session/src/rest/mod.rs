//! REST transport for the IG gateway.
//!
//! This module provides the HTTP client a session uses to reach the gateway.

mod client;
mod endpoints;

pub(crate) use client::{RestClient, insert_header, json_headers};
pub(crate) use endpoints::*;
