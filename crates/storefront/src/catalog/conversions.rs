//! Wire-to-domain conversion for catalog records.

use chrono::{DateTime, NaiveDate, Utc};
use luxtive_core::{ProductId, parse_metals};
use tracing::warn;

use super::types::{Product, ProductRecord};

/// Convert a wire record into a catalog product.
///
/// Validation failures degrade silently: a promo price that does not
/// undercut the list price is dropped, and an unparseable creation
/// timestamp falls back to the epoch. Neither blocks the product from
/// appearing in the catalog.
pub fn convert_product(record: ProductRecord) -> Product {
    let promo_price = match record.promo_price {
        Some(promo) if promo < record.price => Some(promo),
        Some(promo) => {
            warn!(
                product_id = record.id,
                %promo,
                price = %record.price,
                "dropping promo price that does not undercut list price"
            );
            None
        }
        None => None,
    };

    Product {
        id: ProductId::new(record.id),
        name: record.name,
        price: record.price,
        promo_price,
        metals: parse_metals(&record.metal),
        sub_category: record.sub_category,
        category: record.category,
        description: record.description,
        image_url: record.image_url,
        featured: record.featured,
        bestseller: record.bestseller,
        created_at: parse_created_at(record.id, &record.created_at),
    }
}

/// Parse the endpoint's date string, accepting RFC 3339 or a bare date.
fn parse_created_at(product_id: i64, raw: &str) -> DateTime<Utc> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.with_timezone(&Utc);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return midnight.and_utc();
        }
    }

    warn!(product_id, raw, "unparseable created_at, defaulting to epoch");
    DateTime::UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: 7,
            name: "Radiance Pendant".to_string(),
            price: Decimal::from(1200),
            promo_price: None,
            metal: "Gold, Rose Gold".to_string(),
            sub_category: "pendants".to_string(),
            category: "necklaces".to_string(),
            description: "A stunning centerpiece.".to_string(),
            image_url: "images/pendant.png".to_string(),
            featured: true,
            bestseller: false,
            created_at: "2025-06-15".to_string(),
        }
    }

    #[test]
    fn test_convert_normalizes_metals() {
        let product = convert_product(record());
        assert_eq!(product.metals, vec!["gold", "rose gold"]);
        assert_eq!(product.id.as_i64(), 7);
    }

    #[test]
    fn test_valid_promo_is_kept() {
        let mut rec = record();
        rec.promo_price = Some(Decimal::from(600));
        let product = convert_product(rec);
        assert_eq!(product.promo_price, Some(Decimal::from(600)));
        assert_eq!(product.effective_price(), Decimal::from(600));
    }

    #[test]
    fn test_non_discounting_promo_is_dropped() {
        let mut rec = record();
        rec.promo_price = Some(Decimal::from(1200));
        let product = convert_product(rec);
        assert_eq!(product.promo_price, None);

        let mut rec = record();
        rec.promo_price = Some(Decimal::from(1500));
        let product = convert_product(rec);
        assert_eq!(product.promo_price, None);
    }

    #[test]
    fn test_created_at_accepts_rfc3339() {
        let mut rec = record();
        rec.created_at = "2025-06-15T10:30:00Z".to_string();
        let product = convert_product(rec);
        assert_eq!(product.created_at.to_rfc3339(), "2025-06-15T10:30:00+00:00");
    }

    #[test]
    fn test_created_at_accepts_bare_date() {
        let product = convert_product(record());
        assert_eq!(product.created_at.to_rfc3339(), "2025-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_unparseable_created_at_defaults_to_epoch() {
        let mut rec = record();
        rec.created_at = "last tuesday".to_string();
        let product = convert_product(rec);
        assert_eq!(product.created_at, DateTime::UNIX_EPOCH);
    }
}
