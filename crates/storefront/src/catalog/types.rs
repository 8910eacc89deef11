//! Catalog domain and wire types.

use chrono::{DateTime, Utc};
use luxtive_core::ProductId;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A catalog product, immutable for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// List price in the store currency.
    pub price: Decimal,
    /// Promotional price; always strictly less than `price` when present.
    pub promo_price: Option<Decimal>,
    /// Normalized lowercase metal set.
    pub metals: Vec<String>,
    pub sub_category: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub featured: bool,
    pub bestseller: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price the customer pays: promo price if set, else list price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.promo_price.unwrap_or(self.price)
    }

    /// Whether the product carries an active promotion.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.promo_price.is_some()
    }
}

/// Wire record returned by the catalog endpoint.
///
/// The endpoint returns a JSON array of these; conversion into a
/// [`Product`] normalizes metals, validates the promo price, and parses
/// the creation timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub promo_price: Option<Decimal>,
    /// Comma-delimited metal names.
    #[serde(default)]
    pub metal: String,
    pub sub_category: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bestseller: bool,
    pub created_at: String,
}
