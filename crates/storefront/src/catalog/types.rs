//! Catalog entity types as served by the REST API.
//!
//! These are the live catalog entities. The persisted `CartLine` /
//! `FavoriteEntry` types in `vitrine-core` are separate on purpose: they
//! are snapshots frozen at action time, not views of these records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, ProductId};

/// A product record from the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
}

impl Product {
    /// First image, or a blank placeholder when the catalog sent none.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }
}

/// A category record from the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub image: String,
}
