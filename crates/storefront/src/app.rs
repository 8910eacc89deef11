//! Application context: one object owning all page state.
//!
//! Constructed once per page load and passed to whatever needs it; there
//! are no ambient singletons. The context owns the catalog snapshot, the
//! filter state (the single source of truth the DOM reflects), the cart
//! controller, and the navigation chrome, and it keeps the published
//! counters consistent with the persisted collections after every
//! mutation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};
use url::Url;

use luxtive_core::ProductId;

use crate::cart::{CartController, CartUpdate};
use crate::catalog::{
    Category, CategoryFilter, Feature, FetchError, FilterState, Product, SortKey, apply,
};
use crate::chrome::Chrome;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::render::{self, Surface};
use crate::storage::{CATALOG_UPDATED_KEY, StorageArea, StorageEvent, StoreAdapter};

/// Lifecycle of the session's catalog snapshot.
#[derive(Debug)]
pub enum CatalogState {
    /// The fetch is in flight; render the loading state.
    Loading,
    /// The immutable session snapshot.
    Ready(Vec<Product>),
    /// The fetch failed; render the error panel with a manual reload.
    Failed(FetchError),
}

/// What the shell should do after a storage-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageChangeAction {
    /// Counters were re-read from the store; re-render counter badges.
    Synced,
    /// The catalog-changed flag was observed (and cleared); re-fetch the
    /// catalog and re-render.
    RefreshCatalog,
}

/// Page-wide application state.
pub struct AppContext {
    config: StorefrontConfig,
    store: StoreAdapter,
    cart: CartController,
    chrome: Chrome,
    catalog: CatalogState,
    filter: FilterState,
}

impl AppContext {
    /// Build the context for a page load.
    ///
    /// Counters are seeded from the persisted collections so the chrome
    /// is correct before any interaction.
    #[must_use]
    pub fn new(config: StorefrontConfig, area: Arc<dyn StorageArea>) -> Self {
        let store = StoreAdapter::new(area);
        let cart = CartController::new(store.clone());

        let mut chrome = Chrome::new();
        let counters = cart.counters();
        chrome.set_cart_count(counters.cart_count);
        chrome.set_wishlist_count(counters.wishlist_count);

        let filter = FilterState::with_ceiling(config.price_ceiling);

        Self {
            config,
            store,
            cart,
            chrome,
            catalog: CatalogState::Loading,
            filter,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &StoreAdapter {
        &self.store
    }

    #[must_use]
    pub const fn cart(&self) -> &CartController {
        &self.cart
    }

    #[must_use]
    pub const fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    #[must_use]
    pub const fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    // --- Initialization ---

    /// Apply the page URL's `category` and `search` query parameters.
    ///
    /// Called once at initialization; unknown parameters and unknown
    /// category slugs are ignored.
    pub fn init_from_url(&mut self, url: &Url) {
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "category" => {
                    if let Some(category) = Category::parse(&value) {
                        self.filter.category = CategoryFilter::Only(category);
                    } else {
                        warn!(slug = %value, "ignoring unknown category parameter");
                    }
                }
                "search" => self.filter.search = value.trim().to_string(),
                _ => {}
            }
        }
    }

    /// Install the outcome of the one-shot catalog fetch.
    pub fn install_catalog(&mut self, outcome: std::result::Result<Vec<Product>, FetchError>) {
        self.catalog = match outcome {
            Ok(products) => {
                info!(count = products.len(), "catalog snapshot installed");
                CatalogState::Ready(products)
            }
            Err(error) => {
                warn!(%error, "catalog fetch failed");
                CatalogState::Failed(error)
            }
        };
    }

    // --- Filter state (the DOM reflects these; never the reverse) ---

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    /// Select a category, or `None` for "all".
    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category.map_or(CategoryFilter::All, CategoryFilter::Only);
    }

    pub fn toggle_metal(&mut self, metal: &str) {
        self.filter.toggle_metal(metal);
    }

    pub fn toggle_feature(&mut self, feature: Feature) {
        self.filter.toggle_feature(feature);
    }

    pub fn set_max_price(&mut self, max_price: Decimal) {
        self.filter.max_price = max_price;
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.trim().to_string();
    }

    /// The filtered, sorted subset the grid shows right now.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        match &self.catalog {
            CatalogState::Ready(products) => apply(products, &self.filter),
            CatalogState::Loading | CatalogState::Failed(_) => Vec::new(),
        }
    }

    // --- Rendering ---

    /// Render the catalog area: loading, error panel, grid, or the
    /// explicit empty state.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if template rendering fails.
    pub fn render_catalog(&self, surface: &mut dyn Surface) -> Result<()> {
        match &self.catalog {
            CatalogState::Loading => render::render_loading(surface)?,
            CatalogState::Failed(error) => render::render_fetch_error(surface, error)?,
            CatalogState::Ready(products) => {
                render::render_catalog(surface, &apply(products, &self.filter))?;
            }
        }
        Ok(())
    }

    /// Render the cart page list or the empty-bag placeholder.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if template rendering fails.
    pub fn render_cart_page(&self, surface: &mut dyn Surface) -> Result<()> {
        render::render_cart(surface, &self.cart.cart())?;
        Ok(())
    }

    // --- Cart and wishlist operations ---

    /// Add a product from the session snapshot to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the
    /// snapshot, or `AppError::Storage` if persisting fails.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<CartUpdate> {
        let product = self.find_product(id)?.clone();
        let update = self.cart.add_to_cart(&product)?;

        self.chrome.set_cart_count(update.cart_count);
        self.chrome.push_toast("Item added to cart");
        Ok(update)
    }

    /// Set a cart line's quantity (clamped to at least 1).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if persisting fails.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<CartUpdate> {
        let update = self.cart.set_quantity(id, quantity)?;
        self.chrome.set_cart_count(update.cart_count);
        Ok(update)
    }

    /// Remove a cart line. An empty update means the caller should show
    /// the empty-bag placeholder.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if persisting fails.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<CartUpdate> {
        let update = self.cart.remove_from_cart(id)?;
        self.chrome.set_cart_count(update.cart_count);
        Ok(update)
    }

    /// Toggle a snapshot product on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the product is not in the
    /// snapshot, or `AppError::Storage` if persisting fails.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Result<()> {
        let product = self.find_product(id)?.clone();
        let update = self.cart.toggle_wishlist(&product)?;

        self.chrome.set_wishlist_count(update.wishlist_count);
        self.chrome.push_toast(if update.added {
            "Added to wishlist"
        } else {
            "Removed from wishlist"
        });
        Ok(())
    }

    // --- Cross-tab synchronization ---

    /// React to a storage-change notification from another page.
    ///
    /// The store is the source of truth: counters are re-read in full
    /// rather than merged. Observing the catalog-changed flag clears it
    /// and asks the shell to re-fetch.
    pub fn handle_storage_change(&mut self, event: &StorageEvent) -> StorageChangeAction {
        if event.key == CATALOG_UPDATED_KEY && self.store.take_catalog_updated() {
            info!("catalog-changed flag observed, requesting refresh");
            self.catalog = CatalogState::Loading;
            return StorageChangeAction::RefreshCatalog;
        }

        let counters = self.cart.counters();
        self.chrome.set_cart_count(counters.cart_count);
        self.chrome.set_wishlist_count(counters.wishlist_count);
        StorageChangeAction::Synced
    }

    fn find_product(&self, id: ProductId) -> Result<&Product> {
        let CatalogState::Ready(products) = &self.catalog else {
            return Err(AppError::NotFound(format!("product {id}")));
        };
        products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;
    use crate::render::BufferSurface;
    use crate::storage::MemoryStore;

    fn context_with_catalog(products: Vec<Product>) -> AppContext {
        let mut app = AppContext::new(
            StorefrontConfig::default(),
            Arc::new(MemoryStore::new()),
        );
        app.install_catalog(Ok(products));
        app
    }

    #[test]
    fn test_init_from_url_applies_both_parameters_once() {
        let mut app = context_with_catalog(Vec::new());
        let url = Url::parse("https://luxtive.shop/shop.html?category=rings&search=gold").unwrap();
        app.init_from_url(&url);

        assert_eq!(
            app.filter().category,
            CategoryFilter::Only(Category::Rings)
        );
        assert_eq!(app.filter().search, "gold");
    }

    #[test]
    fn test_init_from_url_ignores_unknown_values() {
        let mut app = context_with_catalog(Vec::new());
        let url = Url::parse("https://luxtive.shop/shop.html?category=pottery&page=2").unwrap();
        app.init_from_url(&url);
        assert_eq!(app.filter().category, CategoryFilter::All);
    }

    #[test]
    fn test_add_to_cart_updates_chrome_and_toasts() {
        let mut app = context_with_catalog(vec![product(1, "Radiance Pendant", 1200)]);

        app.add_to_cart(ProductId::new(1)).unwrap();
        app.add_to_cart(ProductId::new(1)).unwrap();

        assert_eq!(app.chrome().cart_count(), 2);
        let toasts = app.chrome_mut().drain_toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.first().unwrap().message, "Item added to cart");
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let mut app = context_with_catalog(vec![product(1, "Radiance Pendant", 1200)]);
        let result = app.add_to_cart(ProductId::new(99));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(app.chrome().cart_count(), 0);
    }

    #[test]
    fn test_counters_seed_from_persisted_store() {
        let area = Arc::new(MemoryStore::new());
        {
            let mut first_load = AppContext::new(StorefrontConfig::default(), area.clone());
            first_load.install_catalog(Ok(vec![product(1, "Radiance Pendant", 1200)]));
            first_load.add_to_cart(ProductId::new(1)).unwrap();
        }

        // A later page load over the same store starts with the badge set
        let second_load = AppContext::new(StorefrontConfig::default(), area);
        assert_eq!(second_load.chrome().cart_count(), 1);
    }

    #[test]
    fn test_wishlist_toggle_toasts_both_ways() {
        let mut app = context_with_catalog(vec![product(2, "Eternity Band", 980)]);

        app.toggle_wishlist(ProductId::new(2)).unwrap();
        assert_eq!(app.chrome().wishlist_count(), 1);

        app.toggle_wishlist(ProductId::new(2)).unwrap();
        assert_eq!(app.chrome().wishlist_count(), 0);

        let messages: Vec<String> = app
            .chrome_mut()
            .drain_toasts()
            .into_iter()
            .map(|t| t.message)
            .collect();
        assert_eq!(messages, vec!["Added to wishlist", "Removed from wishlist"]);
    }

    #[test]
    fn test_render_states_follow_catalog_lifecycle() {
        let mut app = AppContext::new(
            StorefrontConfig::default(),
            Arc::new(MemoryStore::new()),
        );

        let mut surface = BufferSurface::new();
        app.render_catalog(&mut surface).unwrap();
        assert!(surface.contents().contains("catalog-loading"));

        app.install_catalog(Err(FetchError::Status(500)));
        app.render_catalog(&mut surface).unwrap();
        assert!(surface.contents().contains("reload-btn"));

        app.install_catalog(Ok(vec![product(1, "Radiance Pendant", 1200)]));
        app.render_catalog(&mut surface).unwrap();
        assert!(surface.contents().contains("product-card"));
    }

    #[test]
    fn test_filter_mutations_drive_visible_products() {
        let mut ring = product(1, "Solitaire Ring", 4200);
        ring.sub_category = "rings".to_string();
        let necklace = product(2, "Moon Necklace", 1100);
        let mut app = context_with_catalog(vec![ring, necklace]);

        app.set_category(Some(Category::Necklaces));
        let visible = app.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().unwrap().name, "Moon Necklace");

        app.set_category(None);
        assert_eq!(app.visible_products().len(), 2);
    }

    #[test]
    fn test_storage_change_resyncs_counters() {
        let area = Arc::new(MemoryStore::new());
        let mut app = AppContext::new(StorefrontConfig::default(), area.clone());
        app.install_catalog(Ok(vec![product(1, "Radiance Pendant", 1200)]));

        // Another tab writes a cart behind this context's back
        let other_tab = CartController::new(StoreAdapter::new(area));
        other_tab
            .add_to_cart(&product(1, "Radiance Pendant", 1200))
            .unwrap();
        assert_eq!(app.chrome().cart_count(), 0);

        let action = app.handle_storage_change(&StorageEvent {
            key: crate::storage::CART_KEY.to_string(),
            old_value: None,
            new_value: Some("[...]".to_string()),
        });
        assert_eq!(action, StorageChangeAction::Synced);
        assert_eq!(app.chrome().cart_count(), 1);
    }

    #[test]
    fn test_catalog_flag_requests_refresh_and_clears() {
        let area = Arc::new(MemoryStore::new());
        let mut app = AppContext::new(StorefrontConfig::default(), area.clone());
        app.install_catalog(Ok(Vec::new()));

        app.store().signal_catalog_updated().unwrap();
        let event = StorageEvent {
            key: CATALOG_UPDATED_KEY.to_string(),
            old_value: None,
            new_value: Some("1".to_string()),
        };

        assert_eq!(
            app.handle_storage_change(&event),
            StorageChangeAction::RefreshCatalog
        );
        assert!(matches!(app.catalog(), CatalogState::Loading));

        // The flag was cleared on observation; a second event is a no-op
        assert_eq!(
            app.handle_storage_change(&event),
            StorageChangeAction::Synced
        );
    }
}
