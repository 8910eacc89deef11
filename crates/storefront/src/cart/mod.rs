//! Cart and wishlist controller.
//!
//! The controller is the only mutator of the two persisted collections.
//! Every operation persists first and then recomputes the published
//! counters strictly from the just-persisted collection; there is no
//! incrementally tracked counter that could drift from the store.

use luxtive_core::{ProductId, format_metals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Product;
use crate::storage::{CART_KEY, StorageError, StoreAdapter, WISHLIST_KEY};

/// A (product, quantity) pair in the cart.
///
/// Display fields are denormalized at add time so the cart page renders
/// without re-fetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Effective unit price at the time the item was added.
    pub unit_price: Decimal,
    pub image_url: String,
    pub metal: String,
    /// Always at least 1; a line at quantity 0 is removed instead.
    pub quantity: u32,
}

impl CartLineItem {
    /// Denormalize a catalog product into a fresh line item.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.effective_price(),
            image_url: product.image_url.clone(),
            metal: format_metals(&product.metals),
            quantity: 1,
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A saved product on the wishlist. No quantity; membership only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub metal: String,
}

impl WishlistEntry {
    /// Denormalize a catalog product into a wishlist entry.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.effective_price(),
            image_url: product.image_url.clone(),
            metal: format_metals(&product.metals),
        }
    }
}

/// Snapshot of the cart after an operation, read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    pub lines: Vec<CartLineItem>,
    /// Sum of all line quantities (not the number of lines).
    pub cart_count: u32,
}

impl CartUpdate {
    /// Whether the cart page should show the empty-bag placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Snapshot of the wishlist after a toggle, read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistUpdate {
    pub entries: Vec<WishlistEntry>,
    pub wishlist_count: u32,
    /// Whether the toggle inserted (`true`) or removed (`false`).
    pub added: bool,
}

/// Published counter values, always derived from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub cart_count: u32,
    pub wishlist_count: u32,
}

/// Mutates the persisted cart and wishlist collections.
#[derive(Clone)]
pub struct CartController {
    store: StoreAdapter,
}

impl CartController {
    /// Create a controller over the given store adapter.
    #[must_use]
    pub const fn new(store: StoreAdapter) -> Self {
        Self { store }
    }

    /// Add a product to the cart.
    ///
    /// A product already in the cart has its quantity incremented; there
    /// is never more than one line per product id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated collection cannot be
    /// persisted.
    pub fn add_to_cart(&self, product: &Product) -> Result<CartUpdate, StorageError> {
        let mut lines: Vec<CartLineItem> = self.store.load(CART_KEY);

        if let Some(line) = lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += 1;
        } else {
            lines.push(CartLineItem::from_product(product));
        }

        self.store.save(CART_KEY, &lines)?;
        info!(product_id = %product.id, "added to cart");
        Ok(self.persisted_cart())
    }

    /// Set a line's quantity exactly.
    ///
    /// A quantity below 1 is clamped to 1 rather than rejected. Setting
    /// the quantity of a product that is not in the cart is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated collection cannot be
    /// persisted.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<CartUpdate, StorageError> {
        let quantity = quantity.max(1);
        let mut lines: Vec<CartLineItem> = self.store.load(CART_KEY);

        if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
            self.store.save(CART_KEY, &lines)?;
        }
        Ok(self.persisted_cart())
    }

    /// Remove a line from the cart.
    ///
    /// When the returned update is empty, the cart view renders the
    /// empty-bag placeholder instead of an empty container.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated collection cannot be
    /// persisted.
    pub fn remove_from_cart(&self, id: ProductId) -> Result<CartUpdate, StorageError> {
        let mut lines: Vec<CartLineItem> = self.store.load(CART_KEY);
        lines.retain(|l| l.id != id);

        self.store.save(CART_KEY, &lines)?;
        info!(product_id = %id, "removed from cart");
        Ok(self.persisted_cart())
    }

    /// Toggle a product on the wishlist: remove if present, insert if
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated collection cannot be
    /// persisted.
    pub fn toggle_wishlist(&self, product: &Product) -> Result<WishlistUpdate, StorageError> {
        let mut entries: Vec<WishlistEntry> = self.store.load(WISHLIST_KEY);

        let added = if entries.iter().any(|e| e.id == product.id) {
            entries.retain(|e| e.id != product.id);
            false
        } else {
            entries.push(WishlistEntry::from_product(product));
            true
        };

        self.store.save(WISHLIST_KEY, &entries)?;
        info!(product_id = %product.id, added, "wishlist toggled");

        let entries: Vec<WishlistEntry> = self.store.load(WISHLIST_KEY);
        let wishlist_count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
        Ok(WishlistUpdate {
            entries,
            wishlist_count,
            added,
        })
    }

    /// The current cart contents, read from the store.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLineItem> {
        self.store.load(CART_KEY)
    }

    /// The current wishlist contents, read from the store.
    #[must_use]
    pub fn wishlist(&self) -> Vec<WishlistEntry> {
        self.store.load(WISHLIST_KEY)
    }

    /// Counter values derived from the persisted collections.
    #[must_use]
    pub fn counters(&self) -> Counters {
        let cart: Vec<CartLineItem> = self.store.load(CART_KEY);
        let wishlist: Vec<WishlistEntry> = self.store.load(WISHLIST_KEY);
        Counters {
            cart_count: cart.iter().map(|l| l.quantity).sum(),
            wishlist_count: u32::try_from(wishlist.len()).unwrap_or(u32::MAX),
        }
    }

    /// Sum of line subtotals for the order summary.
    #[must_use]
    pub fn cart_subtotal(&self) -> Decimal {
        self.cart().iter().map(CartLineItem::subtotal).sum()
    }

    /// Re-read the cart from the store and derive its counter.
    fn persisted_cart(&self) -> CartUpdate {
        let lines: Vec<CartLineItem> = self.store.load(CART_KEY);
        let cart_count = lines.iter().map(|l| l.quantity).sum();
        CartUpdate { lines, cart_count }
    }
}
