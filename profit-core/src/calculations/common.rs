//! Common utility functions for profit calculations.
//!
//! This module provides the rounding used when derived figures are shown to
//! a user. The calculation itself never rounds.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `places` decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// the midpoint are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use profit_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454), 2), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455), 2), dec!(-123.46)); // Away from zero
/// assert_eq!(round_half_up(dec!(0.25), 1), dec!(0.3));
/// ```
pub fn round_half_up(
    value: Decimal,
    places: u32,
) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds half-up and pads so the result carries `places` fraction digits
/// (`0.7` at 2 places becomes `0.70`).
///
/// Padding stops short when the integer part leaves no room in the 96-bit
/// mantissa; text output must pad those itself.
pub fn fixed_places(
    value: Decimal,
    places: u32,
) -> Decimal {
    let mut rounded = round_half_up(value, places);
    rounded.rescale(places);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
