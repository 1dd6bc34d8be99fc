//! haloctl - CLI companion for the Halo dashboard platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => cli::register::run(&opts, name, email, password).await,
        Commands::Login { email, password } => cli::login::run(&opts, email, password).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Whoami => cli::whoami::run(&opts),
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Version => {
            println!("haloctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
