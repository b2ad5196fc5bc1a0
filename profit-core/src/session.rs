//! Calculator session state.
//!
//! A session holds the two user inputs and hands out the derived breakdown
//! on request. It applies the input-acceptance policy: a turnover entry that
//! is not a non-negative number is ignored and the previous value stays.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::{
    BUY_RATE, ProfitBreakdown, SellRate, Turnover, TurnoverError,
    calculations::{compute_for, rate_difference},
};

/// Outcome of offering a turnover entry to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnoverInput {
    /// The entry replaced the current turnover.
    Accepted(Turnover),
    /// The entry was dropped; the current turnover is unchanged.
    Ignored(TurnoverError),
}

impl TurnoverInput {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Everything a surface needs to draw the calculator once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitSnapshot {
    pub turnover: Turnover,
    pub sell_rate: SellRate,
    pub buy_rate: Decimal,
    /// Sell rate minus buy rate, in percentage points.
    pub rate_difference: Decimal,
    pub breakdown: ProfitBreakdown,
}

/// In-memory calculator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorSession {
    turnover: Turnover,
    sell_rate: SellRate,
    initial: (Turnover, SellRate),
}

impl CalculatorSession {
    /// Creates a session starting from (and resetting to) the given inputs.
    pub fn new(
        turnover: Turnover,
        sell_rate: SellRate,
    ) -> Self {
        Self {
            turnover,
            sell_rate,
            initial: (turnover, sell_rate),
        }
    }

    pub fn turnover(&self) -> Turnover {
        self.turnover
    }

    pub fn sell_rate(&self) -> SellRate {
        self.sell_rate
    }

    /// Offers raw text as the new turnover.
    pub fn input_turnover(
        &mut self,
        candidate: &str,
    ) -> TurnoverInput {
        match Turnover::parse(candidate) {
            Ok(turnover) => {
                self.set_turnover(turnover);
                TurnoverInput::Accepted(turnover)
            }
            Err(reason) => {
                debug!(%reason, kept = %self.turnover, "turnover entry ignored");
                TurnoverInput::Ignored(reason)
            }
        }
    }

    pub fn set_turnover(
        &mut self,
        turnover: Turnover,
    ) {
        self.turnover = turnover;
    }

    pub fn set_sell_rate(
        &mut self,
        sell_rate: SellRate,
    ) {
        self.sell_rate = sell_rate;
    }

    /// Moves the sell rate slider to `raw`, snapped onto the slider grid.
    pub fn slide_sell_rate(
        &mut self,
        raw: Decimal,
    ) -> SellRate {
        self.sell_rate = SellRate::from_slider(raw);
        self.sell_rate
    }

    /// Moves the sell rate slider by `steps` positions.
    pub fn step_sell_rate(
        &mut self,
        steps: i32,
    ) -> SellRate {
        self.sell_rate = self.sell_rate.step(steps);
        self.sell_rate
    }

    /// Restores the inputs the session was created with.
    pub fn reset(&mut self) {
        (self.turnover, self.sell_rate) = self.initial;
    }

    pub fn rate_difference(&self) -> Decimal {
        rate_difference(self.sell_rate.value(), BUY_RATE)
    }

    pub fn breakdown(&self) -> ProfitBreakdown {
        compute_for(self.turnover, self.sell_rate)
    }

    pub fn snapshot(&self) -> ProfitSnapshot {
        ProfitSnapshot {
            turnover: self.turnover,
            sell_rate: self.sell_rate,
            buy_rate: BUY_RATE,
            rate_difference: self.rate_difference(),
            breakdown: self.breakdown(),
        }
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(Turnover::default(), SellRate::default())
    }
}
