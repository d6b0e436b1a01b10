//! Arbitrary request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ig_session::Method;

use crate::output;

use super::GatewayArgs;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Absolute URL, or a path relative to the gateway (e.g. `accounts`)
    pub url: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(gateway: &GatewayArgs, args: RequestArgs) -> Result<()> {
    let method = Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method: {}", args.method))?;

    let body = args
        .body
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .context("Invalid JSON body")?;

    let (session, _) = gateway.login().await?;

    let url = if args.url.contains("://") {
        args.url.clone()
    } else {
        session.gateway().endpoint(&args.url)
    };

    let result = session
        .perform(&url, method, body.as_ref())
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    output::json(&result, args.pretty)
}
