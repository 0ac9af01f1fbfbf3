//! Currency rounding for monetary outputs.
//!
//! All intermediate arithmetic runs on exact `Decimal` values; amounts are
//! rounded to 2 decimal places only when stored into a result record. The
//! half-up strategy here replaces the epsilon-biased float rounding a
//! binary floating-point implementation would need.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to 2 decimal places, half-up at the midpoint.
///
/// # Example
///
/// ```
/// use clt_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("121.575").unwrap();
/// assert_eq!(round2(value), Decimal::from_str("121.58").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a monetary value to zero when negative.
///
/// Deductions exceeding gross never surface as negative net pay.
pub fn floor_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
