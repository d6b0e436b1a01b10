//! Market search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;

use super::GatewayArgs;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term, e.g. an instrument name or epic
    pub term: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(gateway: &GatewayArgs, args: SearchArgs) -> Result<()> {
    let (session, _) = gateway.login().await?;

    let result = session
        .market_search(&args.term)
        .await
        .context("Failed to search markets")?;

    output::json(&result, args.pretty)
}
