//! Contact Book - main entry point
//!
//! Starts one interactive session on stdin/stdout. Logging goes to stderr so
//! the conversation stays clean.

use anyhow::Result;
use contact_book::{AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting the prompt loop)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    info!("Starting contact book session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    contact_book::repl::run(&mut book, &config, stdin.lock(), &mut stdout.lock())?;

    info!("Contact book session ended");
    Ok(())
}
