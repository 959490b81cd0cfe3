//! Persisted cart and favorites snapshot types.
//!
//! Both types are denormalized snapshots: `title`, `price`, and `images`
//! are copied from the catalog entity at the moment the user acts and are
//! never re-synced against the live catalog afterwards. A line whose price
//! later changes upstream keeps the price it was added at.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// One cart line per distinct product.
///
/// Invariant: `quantity >= 1`. A line at quantity zero must not exist;
/// removal deletes the line rather than zeroing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub images: Vec<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// One favorites entry per favorited product. No quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub images: Vec<String>,
}

/// Sum of `price * quantity` over all lines, rounded to two decimal
/// places for display. Zero for an empty cart.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(CartLine::line_total)
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Total item count across all lines (the nav badge number).
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn line(id: i64, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            images: vec![format!("https://img.example/{id}.jpg")],
            quantity,
        }
    }

    #[test]
    fn test_cart_total() {
        let cart = vec![line(1, dec!(10), 2), line(2, dec!(5.50), 1)];
        assert_eq!(cart_total(&cart), dec!(25.50));
    }

    #[test]
    fn test_cart_total_empty() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(1, dec!(3.25), 3).line_total(), dec!(9.75));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = vec![line(1, dec!(1), 2), line(2, dec!(1), 5)];
        assert_eq!(item_count(&cart), 7);
    }

    #[test]
    fn test_cart_line_persisted_shape() {
        // Stored layout is {id, title, price, images, quantity}.
        let json = serde_json::to_value(line(3, dec!(12.5), 1)).expect("serialize");
        let obj = json.as_object().expect("object");
        for key in ["id", "title", "price", "images", "quantity"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 5);
    }
}
