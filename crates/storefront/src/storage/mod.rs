//! Browser-style key-value storage for cart and wishlist collections.
//!
//! The page's persistent store (HTML5 `localStorage` in the shipped
//! storefront) is an external collaborator reached through the
//! [`StorageArea`] trait. The [`StoreAdapter`] wraps one area and is the
//! only component allowed to read or write the two persisted collection
//! keys; everything else goes through the cart controller.
//!
//! # Keys
//!
//! - `cart` - JSON array of cart line items
//! - `wishlist` - JSON array of wishlist entries
//! - `catalog_updated` - transient flag signalling other open pages that
//!   the catalog changed; cleared by the consumer immediately after being
//!   observed
//!
//! # Change notification
//!
//! Every mutation publishes a [`StorageEvent`] to registered subscribers.
//! Consumers treat the store as the source of truth and re-read fully
//! rather than merging incrementally; concurrent mutation from another
//! tab resolves as last-write-wins.

mod adapter;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

pub use adapter::{CART_KEY, CATALOG_UPDATED_KEY, StoreAdapter, WISHLIST_KEY};

/// Errors surfaced by a storage backend.
///
/// Read-side failures never surface as errors: a missing key is an empty
/// collection and corrupted contents degrade to empty with a warning.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected the write (e.g., quota exceeded).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A collection could not be serialized for persistence.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A key-value storage backend.
///
/// Mirrors the browser storage surface: string keys, string values, reads
/// that cannot fail, writes that can.
pub trait StorageArea: Send + Sync {
    /// Read a value, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove_item(&self, key: &str);
}

/// Describes a change to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// The key that changed.
    pub key: String,
    /// The value before the change, if any.
    pub old_value: Option<String>,
    /// The value after the change; `None` for a removal.
    pub new_value: Option<String>,
}

/// In-memory [`StorageArea`] for tests and ephemeral embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
