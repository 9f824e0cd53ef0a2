//! Card variant classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Shoe, is_new_shoe};

/// Display mode of a shoe card.
///
/// Exactly one variant applies to a shoe at a given reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The shoe has a sale price.
    OnSale,
    /// The shoe was released within the trailing window and is not on sale.
    NewRelease,
    #[default]
    Default,
}

impl Variant {
    /// Kebab-case name, also used as the CSS modifier suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Variant`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid variant: {0}")]
pub struct VariantParseError(pub String);

impl std::str::FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-sale" => Ok(Self::OnSale),
            "new-release" => Ok(Self::NewRelease),
            "default" => Ok(Self::Default),
            _ => Err(VariantParseError(s.to_string())),
        }
    }
}

/// Classify a shoe into its card variant.
///
/// A sale price always wins over a recent release date.
#[must_use]
pub fn classify(shoe: &Shoe, now: DateTime<Utc>) -> Variant {
    if shoe.sale_price.is_some() {
        Variant::OnSale
    } else if is_new_shoe(shoe.release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}
