//! Store adapter owning the persisted collection keys.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::{StorageArea, StorageError, StorageEvent};

/// Persisted cart collection key.
pub const CART_KEY: &str = "cart";

/// Persisted wishlist collection key.
pub const WISHLIST_KEY: &str = "wishlist";

/// Transient cross-page "catalog changed" flag key.
pub const CATALOG_UPDATED_KEY: &str = "catalog_updated";

type Subscriber = Box<dyn Fn(&StorageEvent) + Send + Sync>;

/// Adapter over a [`StorageArea`] holding the two persisted collections.
///
/// Cheaply cloneable; clones share the same backing area and subscriber
/// list. Absence of a key means an empty collection; contents that fail to
/// parse degrade to an empty collection rather than an error.
#[derive(Clone)]
pub struct StoreAdapter {
    inner: Arc<StoreAdapterInner>,
}

struct StoreAdapterInner {
    area: Arc<dyn StorageArea>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl StoreAdapter {
    /// Create an adapter over the given storage area.
    #[must_use]
    pub fn new(area: Arc<dyn StorageArea>) -> Self {
        Self {
            inner: Arc::new(StoreAdapterInner {
                area,
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Load a collection, treating an absent or corrupted value as empty.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.inner.area.get_item(key) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(error) => {
                warn!(key, %error, "discarding corrupted stored collection");
                Vec::new()
            }
        }
    }

    /// Persist a collection and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization fails or the backend
    /// rejects the write.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(items)?;
        let old_value = self.inner.area.get_item(key);
        self.inner.area.set_item(key, &serialized)?;

        self.publish(&StorageEvent {
            key: key.to_string(),
            old_value,
            new_value: Some(serialized),
        });
        Ok(())
    }

    /// Raise the cross-page "catalog changed" flag.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    pub fn signal_catalog_updated(&self) -> Result<(), StorageError> {
        let old_value = self.inner.area.get_item(CATALOG_UPDATED_KEY);
        self.inner.area.set_item(CATALOG_UPDATED_KEY, "1")?;

        self.publish(&StorageEvent {
            key: CATALOG_UPDATED_KEY.to_string(),
            old_value,
            new_value: Some("1".to_string()),
        });
        Ok(())
    }

    /// Observe and clear the "catalog changed" flag.
    ///
    /// Returns whether the flag was set. The flag is removed before this
    /// returns so other consumers do not observe it twice.
    #[must_use]
    pub fn take_catalog_updated(&self) -> bool {
        let was_set = self.inner.area.get_item(CATALOG_UPDATED_KEY).is_some();
        if was_set {
            self.inner.area.remove_item(CATALOG_UPDATED_KEY);
        }
        was_set
    }

    /// Register a subscriber for storage change events.
    pub fn subscribe(&self, subscriber: impl Fn(&StorageEvent) + Send + Sync + 'static) {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    fn publish(&self, event: &StorageEvent) {
        let subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Entry {
        id: i64,
        name: String,
    }

    fn adapter() -> StoreAdapter {
        StoreAdapter::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_absent_key_is_empty_collection() {
        let store = adapter();
        let items: Vec<Entry> = store.load(CART_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = adapter();
        let items = vec![Entry {
            id: 1,
            name: "Radiance Pendant".to_string(),
        }];
        store.save(CART_KEY, &items).expect("save");

        let loaded: Vec<Entry> = store.load(CART_KEY);
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupted_contents_degrade_to_empty() {
        let area = Arc::new(MemoryStore::new());
        area.set_item(CART_KEY, "{not json").expect("write");

        let store = StoreAdapter::new(area);
        let items: Vec<Entry> = store.load(CART_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        // Valid JSON, but an object rather than an array
        let area = Arc::new(MemoryStore::new());
        area.set_item(WISHLIST_KEY, r#"{"id":1}"#).expect("write");

        let store = StoreAdapter::new(area);
        let items: Vec<Entry> = store.load(WISHLIST_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_catalog_updated_flag_is_cleared_on_take() {
        let store = adapter();
        assert!(!store.take_catalog_updated());

        store.signal_catalog_updated().expect("signal");
        assert!(store.take_catalog_updated());
        // Second observer sees nothing
        assert!(!store.take_catalog_updated());
    }

    #[test]
    fn test_save_publishes_event() {
        let store = adapter();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_subscriber = Arc::clone(&seen);
        store.subscribe(move |event| {
            assert_eq!(event.key, CART_KEY);
            assert!(event.new_value.is_some());
            seen_by_subscriber.fetch_add(1, Ordering::SeqCst);
        });

        store
            .save(
                CART_KEY,
                &[Entry {
                    id: 2,
                    name: "Eternity Band".to_string(),
                }],
            )
            .expect("save");
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
