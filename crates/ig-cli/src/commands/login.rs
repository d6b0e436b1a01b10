//! Login command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;

use super::GatewayArgs;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Print the full login response as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(gateway: &GatewayArgs, args: LoginArgs) -> Result<()> {
    let (session, login) = gateway.login().await?;

    if args.json {
        return output::json(&login, true);
    }

    output::success("Logged in successfully");
    output::field("Gateway", session.gateway().as_str());
    output::field("Username", session.credentials().username());

    if let Some(account) = &login.current_account_id {
        output::field("Account", account);
    }
    if let Some(client_id) = &login.client_id {
        output::field("Client ID", client_id);
    }
    if let Some(account_type) = &login.account_type {
        output::field("Account type", account_type);
    }
    if let Some(currency) = &login.currency_iso_code {
        output::field("Currency", currency);
    }
    if let Some(endpoint) = session.streaming_endpoint().await {
        output::field("Streaming endpoint", &endpoint);
    }

    Ok(())
}
