//! Integration tests for the shop page: catalog snapshot, filter state,
//! and the rendered grid.
//!
//! Each scenario drives a full page-load flow: construct an `AppContext`
//! over an in-memory store, install a catalog snapshot, mutate the filter
//! state through the context, and assert on the markup a `BufferSurface`
//! captures.

use std::sync::Arc;

use rust_decimal::Decimal;
use url::Url;

use luxtive_core::ProductId;
use luxtive_storefront::app::CatalogState;
use luxtive_storefront::catalog::{
    Category, CategoryFilter, Feature, FetchError, Product, ProductRecord, SortKey,
};
use luxtive_storefront::render::BufferSurface;
use luxtive_storefront::storage::MemoryStore;
use luxtive_storefront::{AppContext, StorefrontConfig};

/// Build a catalog product from the endpoint's wire shape.
fn wire_product(id: i64, name: &str, price: i64, sub_category: &str) -> Product {
    let record: ProductRecord = serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "price": price.to_string(),
        "metal": "Gold",
        "sub_category": sub_category,
        "category": "necklaces",
        "description": format!("{name}, handcrafted."),
        "image_url": format!("images/{id}.png"),
        "created_at": "2025-03-01"
    }))
    .expect("valid wire record");
    luxtive_storefront::catalog::convert_product(record)
}

fn page_load(products: Vec<Product>) -> AppContext {
    let mut app = AppContext::new(StorefrontConfig::default(), Arc::new(MemoryStore::new()));
    app.install_catalog(Ok(products));
    app
}

// =============================================================================
// Page Initialization
// =============================================================================

#[test]
fn test_shop_page_pre_selects_category_and_search_from_url() {
    let mut app = page_load(vec![
        wire_product(1, "Solitaire Ring", 4200, "rings"),
        wire_product(2, "Moon Necklace", 1100, "necklaces"),
    ]);

    let url = Url::parse("https://luxtive.shop/shop.html?category=rings&search=solitaire")
        .expect("valid url");
    app.init_from_url(&url);

    assert_eq!(app.filter().category, CategoryFilter::Only(Category::Rings));
    assert_eq!(app.filter().search, "solitaire");

    let visible = app.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.first().map(|p| p.id), Some(ProductId::new(1)));
}

#[test]
fn test_loading_then_snapshot_then_grid() {
    let mut app = AppContext::new(StorefrontConfig::default(), Arc::new(MemoryStore::new()));
    let mut surface = BufferSurface::new();

    // Before the fetch resolves the shop shows the loading state
    app.render_catalog(&mut surface).expect("render");
    assert!(surface.contents().contains("catalog-loading"));

    app.install_catalog(Ok(vec![wire_product(1, "Moon Necklace", 1100, "necklaces")]));
    app.render_catalog(&mut surface).expect("render");
    assert!(surface.contents().contains("product-card"));
    assert!(surface.contents().contains("Moon Necklace"));
}

#[test]
fn test_failed_fetch_renders_error_panel_not_empty_state() {
    let mut app = AppContext::new(StorefrontConfig::default(), Arc::new(MemoryStore::new()));
    app.install_catalog(Err(FetchError::Status(502)));

    let mut surface = BufferSurface::new();
    app.render_catalog(&mut surface).expect("render");

    let html = surface.contents();
    assert!(html.contains("reload-btn"), "error panel offers a manual reload");
    assert!(!html.contains("catalog-empty"), "failure is not the empty state");
    assert!(matches!(app.catalog(), CatalogState::Failed(_)));
}

// =============================================================================
// Filtering and Sorting Against the Rendered Grid
// =============================================================================

#[test]
fn test_category_selection_narrows_grid_in_fetched_order() {
    // One ring, two necklace-family pieces, none featured
    let mut app = page_load(vec![
        wire_product(1, "Solitaire Ring", 4200, "rings"),
        wire_product(2, "Radiance Pendant", 1200, "pendants"),
        wire_product(3, "Moon Necklace", 1100, "necklaces"),
    ]);
    app.set_category(Some(Category::Necklaces));
    app.set_sort(SortKey::Featured);

    let visible = app.visible_products();
    let ids: Vec<i64> = visible.iter().map(|p| p.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 3], "both mapped sub-categories, fetched order");

    let mut surface = BufferSurface::new();
    app.render_catalog(&mut surface).expect("render");
    let html = surface.contents();
    assert!(!html.contains("Solitaire Ring"));
    assert!(html.contains("Radiance Pendant"));
    assert!(html.contains("Moon Necklace"));
}

#[test]
fn test_price_slider_uses_the_promo_price() {
    let mut discounted = wire_product(1, "Radiance Pendant", 100, "pendants");
    discounted.promo_price = Some(Decimal::from(40));
    let mut app = page_load(vec![discounted]);

    app.set_max_price(Decimal::from(50));
    assert_eq!(app.visible_products().len(), 1);

    app.set_max_price(Decimal::from(30));
    assert!(app.visible_products().is_empty());
}

#[test]
fn test_no_matches_renders_the_explicit_empty_state() {
    let mut app = page_load(vec![wire_product(1, "Moon Necklace", 1100, "necklaces")]);
    app.set_search("tiara");

    let mut surface = BufferSurface::new();
    app.render_catalog(&mut surface).expect("render");

    let html = surface.contents();
    assert!(html.contains("catalog-empty"));
    assert!(!html.contains("product-card"));
}

#[test]
fn test_sale_filter_with_price_sort() {
    let mut on_sale = wire_product(1, "Radiance Pendant", 1200, "pendants");
    on_sale.promo_price = Some(Decimal::from(600));
    let mut cheaper_sale = wire_product(2, "Chain Anklet", 500, "anklets");
    cheaper_sale.promo_price = Some(Decimal::from(250));
    let full_price = wire_product(3, "Moon Necklace", 1100, "necklaces");

    let mut app = page_load(vec![on_sale, cheaper_sale, full_price]);
    app.toggle_feature(Feature::Sale);
    app.set_sort(SortKey::PriceAsc);

    let ids: Vec<i64> = app.visible_products().iter().map(|p| p.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_clearing_filters_restores_the_full_grid() {
    let mut app = page_load(vec![
        wire_product(1, "Solitaire Ring", 4200, "rings"),
        wire_product(2, "Moon Necklace", 1100, "necklaces"),
    ]);

    app.set_category(Some(Category::Rings));
    app.toggle_metal("silver");
    assert!(app.visible_products().is_empty(), "gold ring fails the silver filter");

    app.toggle_metal("silver");
    app.set_category(None);
    assert_eq!(app.visible_products().len(), 2);
}

// =============================================================================
// Rendered Card Contract
// =============================================================================

#[test]
fn test_cards_carry_the_data_quick_view_needs() {
    let mut piece = wire_product(7, "Radiance Pendant", 1200, "pendants");
    piece.promo_price = Some(Decimal::from(600));
    let app = page_load(vec![piece]);

    let mut surface = BufferSurface::new();
    app.render_catalog(&mut surface).expect("render");

    let html = surface.contents();
    for attribute in [
        r#"data-id="7""#,
        r#"data-name="Radiance Pendant""#,
        r#"data-price="600""#,
        r#"data-image="images/7.png""#,
        r#"data-metal="gold""#,
        r#"data-sub-category="pendants""#,
    ] {
        assert!(html.contains(attribute), "missing {attribute}");
    }
}

#[test]
fn test_markup_significant_product_text_cannot_break_the_grid() {
    let hostile = wire_product(1, r#"<img src=x onerror=alert(1)> "Gold" & Co"#, 100, "rings");
    let app = page_load(vec![hostile]);

    let mut surface = BufferSurface::new();
    app.render_catalog(&mut surface).expect("render");

    let html = surface.contents();
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;img"));
}
