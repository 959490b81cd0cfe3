//! Cart manager: the persisted shopping cart collection.
//!
//! Every operation is a full read-modify-write cycle against the store:
//! read the collection, mutate in memory, write the whole collection
//! back. Nothing is cached between calls, so each call observes the
//! latest persisted state. There is no isolation between the read and
//! write halves; single-writer usage is the contract.
//!
//! Catalog fields (`title`, `price`, `images`) are snapshotted into the
//! line at add time and never re-synced. A later catalog price change
//! does not touch existing lines.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use vitrine_core::{CartLine, ProductId, cart_total, item_count};

use crate::catalog::types::Product;
use crate::store::{self, StateStore, StoreError, keys};

/// Owns all reads and writes of the persisted cart collection.
#[derive(Clone)]
pub struct CartManager {
    store: Arc<dyn StateStore>,
}

impl CartManager {
    /// Create a manager over the given store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Current persisted cart. Empty when no cart has been stored yet or
    /// the stored document is unreadable. No side effects.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        store::read_collection(self.store.as_ref(), keys::CART)
    }

    /// Total item count across all lines (the nav badge number).
    #[must_use]
    pub fn count(&self) -> u32 {
        item_count(&self.cart())
    }

    /// Cart total, rounded to two decimal places. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        cart_total(&self.cart())
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is appended with catalog fields
    /// snapshotted from `product`. A quantity of zero is treated as one.
    /// Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be written back.
    pub fn add(&self, product: &Product, quantity: u32) -> Result<Vec<CartLine>, StoreError> {
        let quantity = quantity.max(1);
        let mut cart = self.cart();

        if let Some(line) = cart.iter_mut().find(|line| line.id == product.id) {
            // quantity comes from a form field; saturate instead of
            // overflowing on absurd values
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            cart.push(CartLine {
                id: product.id,
                title: product.title.clone(),
                price: product.price,
                images: product.images.clone(),
                quantity,
            });
        }

        store::write_collection(self.store.as_ref(), keys::CART, &cart)?;
        debug!(product_id = %product.id, quantity, "added to cart");
        Ok(cart)
    }

    /// Delete the line for `id`, if present. Removing an absent id leaves
    /// the cart unchanged and is not an error. Returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be written back.
    pub fn remove(&self, id: ProductId) -> Result<Vec<CartLine>, StoreError> {
        let mut cart = self.cart();
        cart.retain(|line| line.id != id);
        store::write_collection(self.store.as_ref(), keys::CART, &cart)?;
        debug!(product_id = %id, "removed from cart");
        Ok(cart)
    }

    /// "Buy now": discard the entire existing cart and write a new cart
    /// containing exactly one line for `product`. The destructive
    /// overwrite is deliberate - express checkout does not merge with
    /// prior contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be written.
    pub fn replace_with(
        &self,
        product: &Product,
        quantity: u32,
    ) -> Result<Vec<CartLine>, StoreError> {
        let cart = vec![CartLine {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            images: product.images.clone(),
            quantity: quantity.max(1),
        }];
        store::write_collection(self.store.as_ref(), keys::CART, &cart)?;
        debug!(product_id = %product.id, quantity, "cart replaced for express checkout");
        Ok(cart)
    }

    /// Delete the persisted cart entirely (checkout completion).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the stored document cannot be deleted.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(keys::CART)?;
        debug!("cart cleared");
        Ok(())
    }
}

/// Transient quantity counter for the product detail page.
///
/// Floor-clamped at 1: decrementing below 1 is a no-op. Independent of
/// any cart line until an add operation consumes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
}

impl QuantityStepper {
    /// Start at the floor value of 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 1 }
    }

    /// Resume from a previously displayed value, clamping to the floor.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self {
            value: if value < 1 { 1 } else { value },
        }
    }

    /// Current counter value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Step up by one, saturating at the ceiling of `u32`.
    pub const fn increase(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Step down by one, no-op at the floor.
    pub const fn decrease(&mut self) {
        if self.value > 1 {
            self.value -= 1;
        }
    }
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self::new()
    }
}
