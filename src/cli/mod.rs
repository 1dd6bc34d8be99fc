//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// haloctl - CLI companion for the Halo dashboard platform
#[derive(Parser, Debug)]
#[command(name = "haloctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "HALOCTL_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "HALOCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the Halo API host
    #[arg(long, global = true, env = "HALOCTL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "HALOCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a Halo account (does not log you in)
    Register {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "HALOCTL_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Log in and persist the session
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "HALOCTL_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Log out, dropping the persisted session
    Logout,

    /// Show the logged-in user without touching the network
    Whoami,

    /// Fetch the dashboard payload
    Dashboard,

    /// Display version information
    Version,
}
