//! Core types for Sole & Ankle.
//!
//! This module provides type-safe wrappers for the shoe listing domain.

pub mod price;
pub mod shoe;
pub mod slug;
pub mod variant;

pub use price::Price;
pub use shoe::{NEW_RELEASE_WINDOW_MS, Shoe, is_new_shoe};
pub use slug::{Slug, SlugError};
pub use variant::{Variant, VariantParseError, classify};
