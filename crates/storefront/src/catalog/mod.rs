//! Read-only client for the remote catalog REST API.
//!
//! # Architecture
//!
//! - Plain JSON-over-HTTP via `reqwest`, no schema validation beyond
//!   field access
//! - The catalog is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for API responses (TTL from config)
//! - A failed fetch surfaces once per page load; there is no retry
//!
//! # Endpoints
//!
//! ```text
//! GET {base}/products                   - all products
//! GET {base}/products/{id}              - single product
//! GET {base}/categories                 - all categories
//! GET {base}/categories/{id}/products   - products in a category
//! ```

mod cache;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use vitrine_core::{CategoryId, ProductId};

use crate::config::CatalogConfig;
use cache::{CacheKey, CacheValue};
use types::{Category, Product};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status.
    #[error("catalog returned HTTP {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the catalog REST API.
///
/// Cheaply cloneable; all reads go through the shared response cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base.trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    /// Fetch all products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on network failure, non-2xx status, or an
    /// unparsable body.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("catalog cache hit: products");
            return Ok(products);
        }

        let products: Vec<Product> = self.get_json("products").await?;
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on network failure, non-2xx status, or an
    /// unparsable body.
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(CacheValue::Product(product)) =
            self.inner.cache.get(&CacheKey::Product(id)).await
        {
            debug!(%id, "catalog cache hit: product");
            return Ok(*product);
        }

        let product: Product = self.get_json(&format!("products/{id}")).await?;
        self.inner
            .cache
            .insert(
                CacheKey::Product(id),
                CacheValue::Product(Box::new(product.clone())),
            )
            .await;
        Ok(product)
    }

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on network failure, non-2xx status, or an
    /// unparsable body.
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("catalog cache hit: categories");
            return Ok(categories);
        }

        let categories: Vec<Category> = self.get_json("categories").await?;
        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(categories.clone()),
            )
            .await;
        Ok(categories)
    }

    /// Fetch the products belonging to a category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on network failure, non-2xx status, or an
    /// unparsable body.
    pub async fn category_products(&self, id: CategoryId) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) = self
            .inner
            .cache
            .get(&CacheKey::CategoryProducts(id))
            .await
        {
            debug!(%id, "catalog cache hit: category products");
            return Ok(products);
        }

        let products: Vec<Product> = self.get_json(&format!("categories/{id}/products")).await?;
        self.inner
            .cache
            .insert(
                CacheKey::CategoryProducts(id),
                CacheValue::Products(products.clone()),
            )
            .await;
        Ok(products)
    }

    /// Execute a GET request against `{base}/{path}` and decode the body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                %status,
                path,
                body = %body.chars().take(500).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                path: path.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}
