//! Integration tests for Sole & Ankle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sole-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_routes` - Listing, detail, card fragment and theme routes
//! - `shipped_catalog` - The catalog file the storefront ships with
//!
//! Requests run in-process against [`sole_storefront::app`]; no server or
//! network is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, TimeZone, Utc};
use sole_core::FixedClock;
use sole_storefront::{AppState, Catalog, CatalogError, StorefrontConfig, config::ConfigError};
use thiserror::Error;
use tower::ServiceExt;

/// Storefront crate root, resolved at compile time.
const STOREFRONT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront");

/// Path of the catalog the storefront ships with.
#[must_use]
pub fn shipped_catalog_path() -> PathBuf {
    PathBuf::from(STOREFRONT_DIR).join("content/shoes.json")
}

/// The moment every test request is rendered at.
#[must_use]
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Errors building a [`TestContext`].
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A response reduced to what the tests assert on.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Storefront router wired to the shipped catalog and a fixed clock.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Context with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipped catalog does not load.
    pub fn new() -> Result<Self, SetupError> {
        Self::with_env(&[])
    }

    /// Context with extra environment variables applied to the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is invalid or the shipped catalog does
    /// not load.
    pub fn with_env(vars: &[(&str, &str)]) -> Result<Self, SetupError> {
        let static_dir = format!("{STOREFRONT_DIR}/static");
        let config = StorefrontConfig::from_vars(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
                .or_else(|| (key == "STOREFRONT_STATIC_DIR").then(|| static_dir.clone()))
        })?;
        let catalog = Catalog::load(&shipped_catalog_path())?;

        Ok(Self {
            state: AppState::with_clock(config, catalog, FixedClock(reference_time())),
        })
    }

    #[must_use]
    pub fn router(&self) -> Router {
        sole_storefront::app(self.state.clone())
    }

    /// Issue a GET request against a fresh router.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    #[allow(clippy::unwrap_used)]
    pub async fn get(&self, uri: &str) -> TestResponse {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}
