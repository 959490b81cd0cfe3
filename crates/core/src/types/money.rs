//! Money formatting over decimal arithmetic.
//!
//! All catalog prices are USD. Amounts are carried as [`Decimal`] end to
//! end so that cart totals never accumulate float error; formatting rounds
//! to two decimal places at the display boundary only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount as a USD price string (e.g., "$19.99").
///
/// Rounds half-up to two decimal places.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
