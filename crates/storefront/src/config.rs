//! Storefront client configuration.
//!
//! The client embeds in a page, so configuration is supplied
//! programmatically by the page shell rather than loaded from environment
//! variables or files. [`StorefrontConfig::new`] validates the catalog
//! endpoint up front; everything else ships with the storefront's stock
//! values and can be adjusted field by field.

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

/// Stock catalog endpoint for the hosted storefront.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://api.luxtive.shop/v1/products.json";

/// Upper bound of the price slider, in the store currency.
const DEFAULT_PRICE_CEILING: i64 = 10_000;

/// Canonical compare-tray capacity.
const DEFAULT_COMPARE_CAPACITY: usize = 4;

/// Hero orbital auto-rotation period.
const DEFAULT_HERO_ROTATION: Duration = Duration::from_secs(3);

/// Promo spotlight auto-rotation period.
const DEFAULT_PROMO_ROTATION: Duration = Duration::from_secs(7);

/// Manual hero selection animation lockout.
const DEFAULT_HERO_ANIMATION: Duration = Duration::from_millis(800);

/// Viewport width (px) at and below which the mobile chrome is active.
const DEFAULT_DESKTOP_BREAKPOINT: u32 = 768;

/// Configuration errors that can occur during construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid catalog endpoint {0}: {1}")]
    InvalidEndpoint(String, String),
    #[error("Catalog endpoint {0} must use http or https")]
    UnsupportedScheme(String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Read-only catalog endpoint returning the full product list as JSON.
    pub catalog_endpoint: String,
    /// Default price-slider ceiling used by a fresh filter state.
    pub price_ceiling: Decimal,
    /// Maximum number of products in the compare tray.
    pub compare_capacity: usize,
    /// Hero orbital auto-rotation period.
    pub hero_rotation: Duration,
    /// Hero manual-selection animation lockout.
    pub hero_animation: Duration,
    /// Promo spotlight auto-rotation period.
    pub promo_rotation: Duration,
    /// Viewport width above which mobile menu/search are force-closed.
    pub desktop_breakpoint: u32,
}

impl StorefrontConfig {
    /// Create a configuration for the given catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint is not a valid http(s) URL.
    pub fn new(catalog_endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let catalog_endpoint = catalog_endpoint.into();
        validate_endpoint(&catalog_endpoint)?;

        Ok(Self {
            catalog_endpoint,
            ..Self::default()
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            price_ceiling: Decimal::from(DEFAULT_PRICE_CEILING),
            compare_capacity: DEFAULT_COMPARE_CAPACITY,
            hero_rotation: DEFAULT_HERO_ROTATION,
            hero_animation: DEFAULT_HERO_ANIMATION,
            promo_rotation: DEFAULT_PROMO_ROTATION,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
        }
    }
}

/// Validate that an endpoint parses as an absolute http(s) URL.
fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(endpoint.to_string()));
    }
    Ok(())
}
