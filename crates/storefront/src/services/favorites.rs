//! Favorites manager: the persisted saved-products collection.
//!
//! Set semantics keyed by product id, insertion order preserved for
//! display. Same read-modify-write model as the cart manager: every call
//! re-reads the store, mutates, and writes the whole collection back.

use std::sync::Arc;

use tracing::debug;

use vitrine_core::{FavoriteEntry, ProductId};

use crate::catalog::types::Product;
use crate::store::{self, StateStore, StoreError, keys};

/// Outcome of a toggle call. Exactly one occurs per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The product was not a favorite and has been added.
    Added,
    /// The product was a favorite and has been removed.
    Removed,
}

/// Owns all reads and writes of the persisted favorites collection.
#[derive(Clone)]
pub struct FavoritesManager {
    store: Arc<dyn StateStore>,
}

impl FavoritesManager {
    /// Create a manager over the given store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Current persisted favorites. Empty when nothing has been stored
    /// yet or the stored document is unreadable. No side effects.
    #[must_use]
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        store::read_collection(self.store.as_ref(), keys::FAVORITES)
    }

    /// Number of favorited products (the nav badge number).
    #[must_use]
    pub fn count(&self) -> usize {
        self.favorites().len()
    }

    /// Membership test. Pure read, no side effects.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites().iter().any(|entry| entry.id == id)
    }

    /// Flip membership for `product`: remove the entry when present,
    /// append a snapshot when absent. One atomic toggle, written back
    /// regardless of outcome.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written back.
    pub fn toggle(&self, product: &Product) -> Result<ToggleOutcome, StoreError> {
        let mut favorites = self.favorites();

        let outcome = if let Some(index) = favorites.iter().position(|e| e.id == product.id) {
            favorites.remove(index);
            ToggleOutcome::Removed
        } else {
            favorites.push(FavoriteEntry {
                id: product.id,
                title: product.title.clone(),
                price: product.price,
                images: product.images.clone(),
            });
            ToggleOutcome::Added
        };

        store::write_collection(self.store.as_ref(), keys::FAVORITES, &favorites)?;
        debug!(product_id = %product.id, ?outcome, "toggled favorite");
        Ok(outcome)
    }

    /// Delete the entry for `id`, if present. Unlike [`Self::toggle`] this
    /// needs no catalog record, so a product that has vanished upstream
    /// can still be unfavorited. Removing an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written back.
    pub fn remove(&self, id: ProductId) -> Result<(), StoreError> {
        let mut favorites = self.favorites();
        favorites.retain(|entry| entry.id != id);
        store::write_collection(self.store.as_ref(), keys::FAVORITES, &favorites)?;
        debug!(product_id = %id, "removed favorite");
        Ok(())
    }
}
