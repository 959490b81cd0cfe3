//! Core type definitions.

pub mod cart;
pub mod id;
pub mod money;

pub use cart::{CartLine, FavoriteEntry, cart_total, item_count};
pub use id::{CategoryId, ProductId};
pub use money::format_usd;
