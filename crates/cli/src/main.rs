//! Sole & Ankle CLI - Offline card rendering and catalog checks.
//!
//! # Usage
//!
//! ```bash
//! # Render the card for a single shoe record
//! sole-cli render shoe.json
//!
//! # Render as of a fixed moment
//! sole-cli render shoe.json --now 2026-10-18T12:00:00Z
//!
//! # Validate a catalog and count its variants
//! sole-cli check crates/storefront/content/shoes.json
//! ```
//!
//! # Commands
//!
//! - `render` - Print card HTML for one shoe record
//! - `check` - Load a catalog and print shoe counts per variant

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sole-cli")]
#[command(author, version, about = "Sole & Ankle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the card HTML for a shoe record
    Render {
        /// JSON file holding one shoe record
        file: PathBuf,

        /// Reference time (RFC 3339), defaults to now
        #[arg(long, value_parser = commands::parse_now)]
        now: Option<DateTime<Utc>>,
    },
    /// Validate a catalog file and count cards per variant
    Check {
        /// Catalog JSON file
        file: PathBuf,

        /// Reference time (RFC 3339), defaults to now
        #[arg(long, value_parser = commands::parse_now)]
        now: Option<DateTime<Utc>>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sole_cli=info,sole_storefront=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Render { file, now } => {
            commands::render::run(&file, now.unwrap_or_else(Utc::now), &mut out)?;
        }
        Commands::Check { file, now } => {
            commands::check::run(&file, now.unwrap_or_else(Utc::now), &mut out)?;
        }
    }
    Ok(())
}
