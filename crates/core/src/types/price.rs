//! Type-safe price representation.
//!
//! Catalog prices are integers in the smallest currency unit (cents). Display
//! goes through [`rust_decimal::Decimal`] so the rendered amount never picks
//! up float artifacts: `16500` renders as `$165`, `16550` as `$165.5`.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in cents.
///
/// Serializes as a bare integer so catalog files can write `"price": 16500`.
/// No range checks are performed; negative amounts keep their sign after the
/// currency symbol (`$-2.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in the currency's standard unit (e.g., dollars).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Format for display (e.g., "$165", "$165.5").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount().normalize())
    }
}

impl From<i64> for Price {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}
