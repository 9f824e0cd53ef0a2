//! Sole & Ankle Core - Shared types library.
//!
//! This crate provides the types every Sole & Ankle component agrees on:
//! - `storefront` - Server-rendered shoe listing
//! - `cli` - Offline card rendering and catalog checks
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O,
//! no HTTP, no templates. Anything that depends on "now" takes the reference
//! time as a parameter; [`clock::Clock`] supplies it at the edges.
//!
//! # Modules
//!
//! - [`types`] - Shoe records, prices, slugs and card variants
//! - [`format`] - Display helpers shared by templates
//! - [`clock`] - Injectable reference time

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod format;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::pluralize;
pub use types::*;
