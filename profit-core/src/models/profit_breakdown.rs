use rust_decimal::Decimal;
use serde::Serialize;

/// Profit split across the two halves of the partnership year.
///
/// Only [`crate::calculations::compute`] builds one, so the yearly figure is
/// always the sum of the two halves (saturating at the `Decimal` range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitBreakdown {
    first_half_profit: Decimal,
    second_half_profit: Decimal,
    yearly_profit: Decimal,
}

impl ProfitBreakdown {
    pub(crate) fn from_halves(
        first_half_profit: Decimal,
        second_half_profit: Decimal,
    ) -> Self {
        Self {
            first_half_profit,
            second_half_profit,
            yearly_profit: first_half_profit.saturating_add(second_half_profit),
        }
    }

    /// Profit for the first six months (30% share).
    pub fn first_half_profit(&self) -> Decimal {
        self.first_half_profit
    }

    /// Profit for the second six months (15% share).
    pub fn second_half_profit(&self) -> Decimal {
        self.second_half_profit
    }

    /// Total profit for the year.
    pub fn yearly_profit(&self) -> Decimal {
        self.yearly_profit
    }
}
