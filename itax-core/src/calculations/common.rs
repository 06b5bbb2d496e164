//! Decimal helpers shared by the slab computation and report formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a rupee amount to two decimal places, half-up.
///
/// Midpoints round away from zero, so `0.005` becomes `0.01`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2820.004)), dec!(2820.00));
/// assert_eq!(round_half_up(dec!(2820.005)), dec!(2820.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Expresses a fractional rate as a percentage.
pub fn percent(rate: Decimal) -> Decimal {
    rate * Decimal::ONE_HUNDRED
}
