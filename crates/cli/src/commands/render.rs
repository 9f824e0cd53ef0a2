//! Render a single shoe card.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use sole_core::Shoe;
use sole_storefront::render_card;
use tracing::debug;

use super::{CommandError, read_file};

/// Read one shoe record from `path` and write its card HTML to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a shoe record, or the
/// card fails to render.
pub fn run(path: &Path, now: DateTime<Utc>, out: &mut impl Write) -> Result<(), CommandError> {
    let content = read_file(path)?;
    let shoe: Shoe = serde_json::from_str(&content)?;
    debug!(slug = %shoe.slug, now = %now, "Rendering card");

    let html = render_card(&shoe, now)?;
    writeln!(out, "{html}").map_err(CommandError::Output)?;
    Ok(())
}
