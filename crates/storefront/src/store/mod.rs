//! Local key/value state store.
//!
//! The cart and favorites collections persist as independently keyed JSON
//! documents in a local store, one document per key. The store is injected
//! as `Arc<dyn StateStore>` everywhere so tests can substitute the
//! in-memory backend for the file-backed one.
//!
//! Reads are deliberately forgiving: an absent key or an unparsable
//! document reads as an empty collection, never an error. Writes replace
//! the whole document - there are no partial writes, no versioning, and no
//! isolation between the read and write halves of a read-modify-write
//! cycle. Single-writer usage is assumed.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::StorefrontConfig;

/// Store keys for the persisted collections.
pub mod keys {
    /// Key for the shopping cart collection.
    pub const CART: &str = "cart";

    /// Key for the favorites collection.
    pub const FAVORITES: &str = "favorites";
}

/// Errors from the write side of the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be serialized.
    #[error("store serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A named key/value store of JSON text documents.
///
/// `load` never fails: backends log read problems and report the key as
/// absent, matching the lazy-creation contract (absent key == empty
/// collection).
pub trait StateStore: Send + Sync {
    /// Fetch the raw document stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, fully overwriting prior contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot persist the value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the document stored under `key`. Deleting an absent key is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend cannot delete the value.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read a collection from the store.
///
/// Returns an empty `Vec` when the key is absent or the stored text is
/// not valid JSON for `T`. The malformed case is logged at `warn` but
/// never surfaced to the caller.
pub fn read_collection<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Vec<T> {
    let Some(raw) = store.load(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unparsable stored collection");
            Vec::new()
        }
    }
}

/// Serialize a collection and write it to the store, fully overwriting
/// the prior document.
///
/// # Errors
///
/// Returns `StoreError` if serialization or the backend write fails.
pub fn write_collection<T: Serialize>(
    store: &dyn StateStore,
    key: &str,
    collection: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(collection)?;
    store.save(key, &raw)
}

/// Build the store backend selected by configuration.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file store's data directory cannot be
/// created.
pub fn create_store(config: &StorefrontConfig) -> Result<Arc<dyn StateStore>, StoreError> {
    if config.data_dir == ":memory:" {
        tracing::info!("using in-memory state store");
        Ok(Arc::new(MemoryStore::new()))
    } else {
        tracing::info!(dir = %config.data_dir, "using file state store");
        Ok(Arc::new(FileStore::new(&config.data_dir)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_collection_absent_key() {
        let store = MemoryStore::new();
        let cart: Vec<vitrine_core::CartLine> = read_collection(&store, keys::CART);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_read_collection_malformed_json() {
        let store = MemoryStore::new();
        store.save(keys::CART, "not json").unwrap();
        let cart: Vec<vitrine_core::CartLine> = read_collection(&store, keys::CART);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_read_collection_wrong_shape() {
        let store = MemoryStore::new();
        store.save(keys::CART, r#"{"id": 1}"#).unwrap();
        let cart: Vec<vitrine_core::CartLine> = read_collection(&store, keys::CART);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = MemoryStore::new();
        let favorites = vec![vitrine_core::FavoriteEntry {
            id: vitrine_core::ProductId::new(4),
            title: "Lamp".to_string(),
            price: rust_decimal::dec!(25),
            images: vec!["https://img.example/lamp.jpg".to_string()],
        }];
        write_collection(&store, keys::FAVORITES, &favorites).unwrap();
        let back: Vec<vitrine_core::FavoriteEntry> = read_collection(&store, keys::FAVORITES);
        assert_eq!(back, favorites);
    }

    #[test]
    fn test_write_overwrites_whole_document() {
        let store = MemoryStore::new();
        write_collection(&store, keys::CART, &["a", "b"]).unwrap();
        write_collection(&store, keys::CART, &["c"]).unwrap();
        let back: Vec<String> = read_collection(&store, keys::CART);
        assert_eq!(back, vec!["c".to_string()]);
    }
}
