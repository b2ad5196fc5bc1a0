//! CSV scenario evaluation.
//!
//! ## Input
//!
//! | Column      | Type    | Notes                                  |
//! |-------------|---------|----------------------------------------|
//! | `turnover`  | decimal | Must not be negative                   |
//! | `sell_rate` | decimal | Slider position: 0.4 to 5.0, step 0.1  |
//!
//! ## Output
//!
//! `turnover,sell_rate,rate_difference,first_half_profit,second_half_profit,yearly_profit`
//! with money rounded half-up to two places.
//!
//! ```csv
//! turnover,sell_rate
//! 100000,1.0
//! 0,4.5
//! ```

use std::io::{Read, Write};

use profit_core::{
    BUY_RATE, SellRate, SellRateError, Turnover, TurnoverError,
    calculations::{common::fixed_places, compute_for, rate_difference},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    /// Structurally invalid CSV or a missing column.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("row {row}: {column} '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: {source}")]
    InvalidTurnover {
        row: usize,
        #[source]
        source: TurnoverError,
    },

    #[error("row {row}: {source}")]
    InvalidSellRate {
        row: usize,
        #[source]
        source: SellRateError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    turnover: String,
    sell_rate: String,
}

/// One validated calculator input pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub turnover: Turnover,
    pub sell_rate: SellRate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    pub turnover: Decimal,
    pub sell_rate: Decimal,
    pub rate_difference: Decimal,
    pub first_half_profit: Decimal,
    pub second_half_profit: Decimal,
    pub yearly_profit: Decimal,
}

impl Scenario {
    pub fn evaluate(&self) -> ScenarioResult {
        let breakdown = compute_for(self.turnover, self.sell_rate);

        ScenarioResult {
            turnover: self.turnover.value(),
            sell_rate: self.sell_rate.value(),
            rate_difference: rate_difference(self.sell_rate.value(), BUY_RATE),
            first_half_profit: fixed_places(breakdown.first_half_profit(), 2),
            second_half_profit: fixed_places(breakdown.second_half_profit(), 2),
            yearly_profit: fixed_places(breakdown.yearly_profit(), 2),
        }
    }
}

/// row_number is 1-based (header excluded).
fn convert_row(
    row: ScenarioRow,
    row_number: usize,
) -> Result<Scenario, BatchError> {
    let turnover = parse_cell(&row.turnover, "turnover", row_number)?;
    let sell_rate = parse_cell(&row.sell_rate, "sell_rate", row_number)?;

    let turnover = Turnover::new(turnover).map_err(|source| BatchError::InvalidTurnover {
        row: row_number,
        source,
    })?;
    let sell_rate = SellRate::new(sell_rate).map_err(|source| BatchError::InvalidSellRate {
        row: row_number,
        source,
    })?;

    Ok(Scenario {
        turnover,
        sell_rate,
    })
}

fn parse_cell(
    value: &str,
    column: &'static str,
    row_number: usize,
) -> Result<Decimal, BatchError> {
    value.parse().map_err(|_| BatchError::InvalidNumber {
        row: row_number,
        column,
        value: value.to_string(),
    })
}

/// Reads scenarios in file order.
pub fn load_scenarios<R: Read>(input: R) -> Result<Vec<Scenario>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input);

    reader
        .deserialize::<ScenarioRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Writes one result row per scenario, with a header.
pub fn write_results<W: Write>(
    output: W,
    scenarios: &[Scenario],
) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_writer(output);
    for scenario in scenarios {
        writer.serialize(scenario.evaluate())?;
    }
    writer.flush()?;
    Ok(())
}
