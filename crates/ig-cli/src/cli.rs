//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{GatewayArgs, login, request, search};

/// IG trading REST API explorer.
#[derive(Parser, Debug)]
#[command(name = "ig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and show the session details
    Login(login::LoginArgs),

    /// Search markets by name or epic
    Search(search::SearchArgs),

    /// Perform an arbitrary authenticated request
    Request(request::RequestArgs),
}
