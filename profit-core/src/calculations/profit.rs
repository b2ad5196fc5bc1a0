//! Partnership profit split.
//!
//! Profit is a share of the partner's turnover multiplied by the spread
//! between the sell rate and the fixed buy rate.
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Rate difference: (sell rate − buy rate) / 100 |
//! | 2    | First 6 months: turnover × rate difference × 30% |
//! | 3    | Second 6 months: turnover × rate difference × 15% |
//! | 4    | Yearly: line 2 + line 3 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use profit_core::calculations::compute;
//! use profit_core::BUY_RATE;
//!
//! let breakdown = compute(dec!(100000), dec!(1.0), BUY_RATE);
//!
//! assert_eq!(breakdown.first_half_profit(), dec!(210.00));
//! assert_eq!(breakdown.second_half_profit(), dec!(105.00));
//! assert_eq!(breakdown.yearly_profit(), dec!(315.00));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::{BUY_RATE, ProfitBreakdown, SellRate, Turnover};

/// Share of the spread paid out for the first six months.
pub const FIRST_HALF_SHARE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Share of the spread paid out for the second six months.
pub const SECOND_HALF_SHARE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Spread between sell and buy rate, in percentage points.
pub fn rate_difference(
    sell_rate: Decimal,
    buy_rate: Decimal,
) -> Decimal {
    sell_rate.saturating_sub(buy_rate)
}

/// Computes the profit breakdown for any turnover and rates.
///
/// No range checks are applied: a sell rate below the buy rate yields
/// negative profits, and a zero turnover yields zero everywhere. Products
/// beyond the `Decimal` range saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn compute(
    turnover: Decimal,
    sell_rate: Decimal,
    buy_rate: Decimal,
) -> ProfitBreakdown {
    let spread = rate_difference(sell_rate, buy_rate) / PERCENT;
    let base = turnover.saturating_mul(spread);

    let first_half = base.saturating_mul(FIRST_HALF_SHARE);
    let second_half = base.saturating_mul(SECOND_HALF_SHARE);

    trace!(%turnover, %sell_rate, %buy_rate, %first_half, %second_half, "profit computed");

    ProfitBreakdown::from_halves(first_half, second_half)
}

/// [`compute`] for validated inputs against the fixed [`BUY_RATE`].
pub fn compute_for(
    turnover: Turnover,
    sell_rate: SellRate,
) -> ProfitBreakdown {
    compute(turnover.value(), sell_rate.value(), BUY_RATE)
}
