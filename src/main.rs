//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `vgmdb` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing results as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use vgmdb::api::Client;
use vgmdb::config::{Command, Opt};
use vgmdb::initialization::init_logger_with;
use vgmdb::{Config, Scraper};

#[tokio::main]
async fn main() -> Result<()> {
    // Load AUTH_COOKIE and friends from .env (if it exists) before clap reads the environment
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from(&opt);

    match run(opt.command, &config).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Executes one command and returns its pretty-printed JSON output.
async fn run(command: Command, config: &Config) -> Result<String> {
    let output = match command {
        Command::Role { id } => {
            let scraper = Scraper::new(config).context("unable to create scraper")?;
            let role = scraper
                .roles()
                .get_role(id)
                .await
                .context("unable to get role")?;
            serde_json::to_string_pretty(&role).context("unable to marshal role")?
        }
        Command::Album { id } => {
            let client = Client::new(config).context("unable to create API client")?;
            let album = client
                .albums()
                .get_album(id)
                .await
                .context("unable to get album")?;
            serde_json::to_string_pretty(&album).context("unable to marshal album")?
        }
        Command::Product { id } => {
            let client = Client::new(config).context("unable to create API client")?;
            let product = client
                .products()
                .get_product(id)
                .await
                .context("unable to get product")?;
            serde_json::to_string_pretty(&product).context("unable to marshal product")?
        }
    };
    Ok(output)
}
