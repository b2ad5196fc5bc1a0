use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;
use thiserror::Error;

/// Fixed buy rate, in percent.
pub const BUY_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SellRateError {
    #[error("sell rate '{0}' is not a number")]
    NotANumber(String),

    #[error("sell rate must be between {min}% and {max}%, got {0}", min = SellRate::MIN, max = SellRate::MAX)]
    OutOfRange(Decimal),

    #[error("sell rate must be a multiple of {step}% above {min}%, got {0}", step = SellRate::STEP, min = SellRate::MIN)]
    OffStep(Decimal),
}

/// Sell rate in percent, always a slider position: within
/// [`SellRate::MIN`, `SellRate::MAX`] on a [`SellRate::STEP`] grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SellRate(Decimal);

impl SellRate {
    pub const MIN: Decimal = Decimal::from_parts(4, 0, 0, false, 1);
    pub const MAX: Decimal = Decimal::from_parts(50, 0, 0, false, 1);
    pub const STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
    pub const DEFAULT: SellRate = SellRate(Decimal::from_parts(10, 0, 0, false, 1));

    /// Accepts `value` only if it is an exact slider position.
    pub fn new(value: Decimal) -> Result<Self, SellRateError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SellRateError::OutOfRange(value));
        }
        if !((value - Self::MIN) % Self::STEP).is_zero() {
            return Err(SellRateError::OffStep(value));
        }
        Ok(Self(value.round_dp(1)))
    }

    /// Maps an arbitrary position onto the slider: clamps to the range, then
    /// snaps to the nearest step (midpoints move up).
    pub fn from_slider(raw: Decimal) -> Self {
        let clamped = raw.clamp(Self::MIN, Self::MAX);
        let steps = ((clamped - Self::MIN) / Self::STEP)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self((Self::MIN + steps * Self::STEP).round_dp(1))
    }

    /// Moves `steps` slider positions, saturating at either end.
    pub fn step(
        self,
        steps: i32,
    ) -> Self {
        Self::from_slider(self.0 + Self::STEP * Decimal::from(steps))
    }

    /// Every slider position from `from` to `to`, inclusive, in ascending order.
    pub fn range(
        from: SellRate,
        to: SellRate,
    ) -> impl Iterator<Item = SellRate> {
        let count = ((to.0 - from.0) / Self::STEP)
            .round()
            .to_i32()
            .unwrap_or(-1);
        (0..=count).map(move |i| from.step(i))
    }

    /// All 47 slider positions.
    pub fn all() -> impl Iterator<Item = SellRate> {
        Self::range(Self(Self::MIN), Self(Self::MAX))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for SellRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for SellRate {
    type Err = SellRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        let value = Decimal::from_str(trimmed)
            .map_err(|_| SellRateError::NotANumber(s.trim().to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for SellRate {
    type Error = SellRateError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SellRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_one_percent() {
        assert_eq!(SellRate::default().value(), dec!(1.0));
    }

    #[test]
    fn buy_rate_is_three_tenths() {
        assert_eq!(BUY_RATE, dec!(0.3));
    }

    #[test]
    fn new_accepts_range_ends() {
        assert_eq!(SellRate::new(dec!(0.4)).unwrap().value(), dec!(0.4));
        assert_eq!(SellRate::new(dec!(5.0)).unwrap().value(), dec!(5.0));
    }

    #[test]
    fn new_accepts_trailing_zeros() {
        assert_eq!(SellRate::new(dec!(1.20)).unwrap().value(), dec!(1.2));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            SellRate::new(dec!(0.3)),
            Err(SellRateError::OutOfRange(dec!(0.3)))
        );
        assert_eq!(
            SellRate::new(dec!(5.1)),
            Err(SellRateError::OutOfRange(dec!(5.1)))
        );
    }

    #[test]
    fn new_rejects_off_step_values() {
        assert_eq!(
            SellRate::new(dec!(1.05)),
            Err(SellRateError::OffStep(dec!(1.05)))
        );
    }

    #[test]
    fn from_slider_clamps_to_range() {
        assert_eq!(SellRate::from_slider(dec!(7)).value(), dec!(5.0));
        assert_eq!(SellRate::from_slider(dec!(-2)).value(), dec!(0.4));
    }

    #[test]
    fn from_slider_snaps_to_nearest_step() {
        assert_eq!(SellRate::from_slider(dec!(0.44)).value(), dec!(0.4));
        assert_eq!(SellRate::from_slider(dec!(1.06)).value(), dec!(1.1));
        assert_eq!(SellRate::from_slider(dec!(1.05)).value(), dec!(1.1));
    }

    #[test]
    fn step_moves_and_saturates() {
        let rate = SellRate::default();

        assert_eq!(rate.step(1).value(), dec!(1.1));
        assert_eq!(rate.step(-3).value(), dec!(0.7));
        assert_eq!(rate.step(100).value(), dec!(5.0));
        assert_eq!(rate.step(-100).value(), dec!(0.4));
    }

    #[test]
    fn all_yields_every_slider_position() {
        let rates: Vec<_> = SellRate::all().collect();

        assert_eq!(rates.len(), 47);
        assert_eq!(rates[0].value(), dec!(0.4));
        assert_eq!(rates[6].value(), dec!(1.0));
        assert_eq!(rates[46].value(), dec!(5.0));
    }

    #[test]
    fn range_is_empty_when_reversed() {
        let from = SellRate::new(dec!(2.0)).unwrap();
        let to = SellRate::new(dec!(1.0)).unwrap();

        assert_eq!(SellRate::range(from, to).count(), 0);
    }

    #[test]
    fn from_str_accepts_percent_suffix() {
        assert_eq!("2.5%".parse::<SellRate>().unwrap().value(), dec!(2.5));
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert_eq!(
            "fast".parse::<SellRate>(),
            Err(SellRateError::NotANumber("fast".to_string()))
        );
    }
}
