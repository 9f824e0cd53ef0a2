//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - Shoe catalog JSON (default: crates/storefront/content/shoes.json)
//! - `STOREFRONT_STATIC_DIR` - Static assets (default: crates/storefront/static)
//! - `STOREFRONT_THEME_PRIMARY` - Primary accent color (sale badge, sale price)
//! - `STOREFRONT_THEME_SECONDARY` - Secondary accent color (new release badge)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::theme::Theme;

/// Characters that would let a color value escape its CSS declaration.
const FORBIDDEN_COLOR_CHARS: &[char] = &[';', '{', '}', '<', '>', '"', '\'', '\\'];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the shoe catalog JSON file
    pub catalog_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Palette overrides
    pub theme: ThemeConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Accent color overrides applied on top of the default palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl ThemeConfig {
    /// Build the theme these overrides describe.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::with_accents(self.primary.clone(), self.secondary.clone())
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let host = get_or("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_or("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;

        let catalog_path = PathBuf::from(get_or(
            "STOREFRONT_CATALOG_PATH",
            "crates/storefront/content/shoes.json",
        ));
        let static_dir = PathBuf::from(get_or("STOREFRONT_STATIC_DIR", "crates/storefront/static"));

        let theme = ThemeConfig {
            primary: var("STOREFRONT_THEME_PRIMARY")
                .map(|v| validate_color("STOREFRONT_THEME_PRIMARY", v))
                .transpose()?,
            secondary: var("STOREFRONT_THEME_SECONDARY")
                .map(|v| validate_color("STOREFRONT_THEME_SECONDARY", v))
                .transpose()?,
        };

        let sentry_sample_rate =
            parse_sample_rate("SENTRY_SAMPLE_RATE", var("SENTRY_SAMPLE_RATE"), 1.0)?;
        let sentry_traces_sample_rate = parse_sample_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            var("SENTRY_TRACES_SAMPLE_RATE"),
            0.0,
        )?;

        Ok(Self {
            host,
            port,
            catalog_path,
            static_dir,
            theme,
            sentry_dsn: var("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: var("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check that a color can be dropped into a CSS declaration as-is.
fn validate_color(var_name: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "color cannot be empty".to_string(),
        ));
    }
    if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_COLOR_CHARS.contains(c)) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("color contains forbidden character {c:?}"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a sample rate in `[0.0, 1.0]`, falling back to `default` when unset.
fn parse_sample_rate(
    var_name: &str,
    value: Option<String>,
    default: f32,
) -> Result<f32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let rate = value
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.catalog_path,
            PathBuf::from("crates/storefront/content/shoes.json")
        );
        assert_eq!(config.static_dir, PathBuf::from("crates/storefront/static"));
        assert_eq!(config.theme, ThemeConfig::default());
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
        assert!(config.sentry_traces_sample_rate.abs() < f32::EPSILON);
    }

    #[test]
    fn test_host_and_port() {
        let config = load(&[("STOREFRONT_HOST", "0.0.0.0"), ("STOREFRONT_PORT", "8080")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STOREFRONT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(load(&[("STOREFRONT_HOST", "localhost:3000")]).is_err());
    }

    #[test]
    fn test_theme_overrides() {
        let config = load(&[("STOREFRONT_THEME_PRIMARY", " #d11d5c ")]).unwrap();
        assert_eq!(config.theme.primary.as_deref(), Some("#d11d5c"));
        assert_eq!(config.theme.theme().colors.primary, "#d11d5c");
    }

    #[test]
    fn test_theme_color_rejects_css_injection() {
        assert!(load(&[("STOREFRONT_THEME_PRIMARY", "red; } body { display: none")]).is_err());
        assert!(load(&[("STOREFRONT_THEME_SECONDARY", "  ")]).is_err());
    }

    #[test]
    fn test_sample_rate_range() {
        let config = load(&[("SENTRY_SAMPLE_RATE", "0.25")]).unwrap();
        assert!((config.sentry_sample_rate - 0.25).abs() < f32::EPSILON);

        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        assert!(load(&[("SENTRY_TRACES_SAMPLE_RATE", "-0.1")]).is_err());
        assert!(load(&[("SENTRY_TRACES_SAMPLE_RATE", "lots")]).is_err());
    }

    #[test]
    fn test_empty_sentry_dsn_is_disabled() {
        let config = load(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
