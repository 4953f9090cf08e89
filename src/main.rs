//! Contact book - Main entry point
//!
//! Loads the address book, runs one command and saves the book again when
//! the command changed it.

use anyhow::{Context, Result};
use clap::Parser;
use contact_book::cli::{self, Cli};
use contact_book::{AddressBook, Config};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = cli.resolve_config(Config::from_env()?)?;

    // Logging goes to stderr so command output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using address book at {} (page size {})",
        config.storage_path.display(),
        config.page_size
    );

    let mut book = AddressBook::new(&config);
    book.load().with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.storage_path.display()
        )
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::execute(&cli.command, &mut book, &mut out) {
        error!("Command failed: {:#}", e);
        eprintln!("{}", cli::user_message(&e));
        return Ok(ExitCode::FAILURE);
    }

    if cli.command.is_mutating() {
        book.save().with_context(|| {
            format!(
                "Failed to save address book to {}",
                config.storage_path.display()
            )
        })?;
    }

    Ok(ExitCode::SUCCESS)
}
