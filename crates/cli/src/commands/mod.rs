//! Subcommand implementations.
//!
//! Each command writes its report to the given writer so it can be driven
//! from tests without touching stdout.

pub mod check;
pub mod render;

use std::path::Path;

use chrono::{DateTime, Utc};
use sole_storefront::CatalogError;
use thiserror::Error;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid shoe record: {0}")]
    Record(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to render card: {0}")]
    Render(#[from] askama::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Parse a `--now` argument.
///
/// # Errors
///
/// Returns the chrono parse message if `value` is not RFC 3339.
pub fn parse_now(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })
}
