//! Contact Book - Main entry point
//!
//! Runs one interactive session on the terminal. Contacts live only for the
//! lifetime of the process.

use anyhow::{Context, Result};
use contact_book::{Config, ContactStore, Shell};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout carries the session)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = ContactStore::with_capacity(config.max_contacts);
    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout());

    shell.run().context("terminal I/O failed")?;

    info!("Contact book shutdown complete");
    Ok(())
}
