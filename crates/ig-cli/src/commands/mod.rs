//! Subcommand implementations.

pub mod login;
pub mod request;
pub mod search;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use ig_session::{Credentials, GatewayUrl, LoginResponse, Session};

use crate::cli::Commands;

/// Credentials and gateway selection shared by every command.
#[derive(Args, Debug)]
pub struct GatewayArgs {
    /// Application API key
    #[arg(long, env = "IG_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Account username
    #[arg(long, env = "IG_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(long, env = "IG_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Gateway base URL (defaults to the live gateway)
    #[arg(long, env = "IG_GATEWAY", conflicts_with = "demo")]
    pub gateway: Option<String>,

    /// Use the demo-account gateway
    #[arg(long)]
    pub demo: bool,
}

impl GatewayArgs {
    pub fn gateway_url(&self) -> Result<GatewayUrl> {
        match (&self.gateway, self.demo) {
            (Some(url), _) => GatewayUrl::new(url).context("Invalid gateway URL"),
            (None, true) => Ok(GatewayUrl::demo()),
            (None, false) => Ok(GatewayUrl::live()),
        }
    }

    /// Create a session and log in.
    pub async fn login(&self) -> Result<(Session, LoginResponse)> {
        let gateway = self.gateway_url()?;
        let credentials = Credentials::new(&self.api_key, &self.username, &self.password);
        let session = Session::with_gateway(credentials, gateway.clone())
            .context("Failed to create session")?;

        info!(%gateway, username = %self.username, "Logging in");

        let login = session.login().await.context("Failed to login")?;

        debug!(account = ?login.current_account_id, "Logged in");
        Ok((session, login))
    }
}

pub async fn handle(gateway: GatewayArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(&gateway, args).await,
        Commands::Search(args) => search::run(&gateway, args).await,
        Commands::Request(args) => request::run(&gateway, args).await,
    }
}
