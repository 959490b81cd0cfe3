//! Synthetic merchandising values for product cards.
//!
//! The catalog API carries no discount or rating data, so the cards show
//! synthetic values regenerated on every render. They are pure functions
//! of the injected random source and are never persisted; tests seed a
//! `StdRng` to get deterministic output.

use rand::Rng;
use rust_decimal::Decimal;

/// Discount percentages the badge can show.
const DISCOUNT_STEPS: &[u32] = &[10, 15, 20, 25, 30];

/// Synthetic promo data for one rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Promo {
    /// Discount percentage, one of [`DISCOUNT_STEPS`].
    pub discount_percent: u32,
    /// Star rating in [3.0, 5.0).
    pub rating: f64,
    /// Fake review count.
    pub review_count: u32,
}

impl Promo {
    /// Draw a fresh promo from `rng`. `review_range` bounds the fake
    /// review count (the grid uses 50..250, the detail page 100..600).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, review_range: std::ops::Range<u32>) -> Self {
        let index = rng.random_range(0..DISCOUNT_STEPS.len());
        Self {
            discount_percent: DISCOUNT_STEPS.get(index).copied().unwrap_or(10),
            rating: rng.random_range(3.0..5.0),
            review_count: rng.random_range(review_range),
        }
    }

    /// The inflated "original" price the discount badge claims:
    /// `price * (1 + discount / 100)`.
    #[must_use]
    pub fn original_price(&self, price: Decimal) -> Decimal {
        price * Decimal::from(100 + self.discount_percent) / Decimal::ONE_HUNDRED
    }

    /// Claimed savings: original price minus the real price.
    #[must_use]
    pub fn savings(&self, price: Decimal) -> Decimal {
        self.original_price(price) - price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::dec;

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let a = Promo::generate(&mut StdRng::seed_from_u64(7), 50..250);
        let b = Promo::generate(&mut StdRng::seed_from_u64(7), 50..250);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let promo = Promo::generate(&mut rng, 50..250);
            assert!(DISCOUNT_STEPS.contains(&promo.discount_percent));
            assert!((3.0..5.0).contains(&promo.rating));
            assert!((50..250).contains(&promo.review_count));
        }
    }

    #[test]
    fn test_original_price_and_savings() {
        let promo = Promo {
            discount_percent: 20,
            rating: 4.0,
            review_count: 100,
        };
        assert_eq!(promo.original_price(dec!(10)), dec!(12));
        assert_eq!(promo.savings(dec!(10)), dec!(2));
    }
}
