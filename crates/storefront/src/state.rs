//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sole_core::{Clock, SystemClock};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::theme::Theme;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the theme and the reference clock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    theme: Theme,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Create a new application state using the wall clock.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self::with_clock(config, catalog, SystemClock)
    }

    /// Create a new application state with an explicit clock.
    #[must_use]
    pub fn with_clock(
        config: StorefrontConfig,
        catalog: Catalog,
        clock: impl Clock + 'static,
    ) -> Self {
        let theme = config.theme.theme();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                theme,
                clock: Box::new(clock),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shoe catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.inner.theme
    }

    /// Reference time for the current request.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }
}
