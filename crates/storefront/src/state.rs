//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::services::{CartManager, FavoritesManager};
use crate::store::{self, StoreError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the catalog client and the two
/// state managers, which share one injected store backend.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartManager,
    favorites: FavoritesManager,
}

impl AppState {
    /// Create a new application state, building the store backend
    /// selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file store's data directory cannot be
    /// created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = store::create_store(&config)?;
        let catalog = CatalogClient::new(&config.catalog);
        let cart = CartManager::new(Arc::clone(&store));
        let favorites = FavoritesManager::new(store);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                favorites,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart manager.
    #[must_use]
    pub fn cart(&self) -> &CartManager {
        &self.inner.cart
    }

    /// Get a reference to the favorites manager.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesManager {
        &self.inner.favorites
    }
}
