//! Domain services over the persisted state store.

pub mod cart;
pub mod favorites;

pub use cart::{CartManager, QuantityStepper};
pub use favorites::{FavoritesManager, ToggleOutcome};
