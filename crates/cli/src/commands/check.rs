//! Validate a catalog file.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use sole_core::{Variant, pluralize};
use sole_storefront::Catalog;
use tracing::info;

use super::CommandError;

const VARIANTS: [Variant; 3] = [Variant::OnSale, Variant::NewRelease, Variant::Default];

/// Load the catalog at `path` and write a per-variant summary to `out`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn run(path: &Path, now: DateTime<Utc>, out: &mut impl Write) -> Result<(), CommandError> {
    let catalog = Catalog::load(path)?;

    let total = u32::try_from(catalog.len()).unwrap_or(u32::MAX);
    writeln!(out, "{} in {}", pluralize("Shoe", total), path.display())
        .map_err(CommandError::Output)?;
    for variant in VARIANTS {
        let count = catalog
            .all()
            .iter()
            .filter(|shoe| shoe.variant(now) == variant)
            .count();
        writeln!(out, "{variant}: {count}").map_err(CommandError::Output)?;
    }

    info!(total, "Catalog OK");
    Ok(())
}
