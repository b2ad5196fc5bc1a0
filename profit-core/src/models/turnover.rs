use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Reasons a turnover candidate is not accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnoverError {
    #[error("turnover is empty")]
    Empty,

    #[error("turnover '{0}' is not a number")]
    NotANumber(String),

    #[error("turnover must not be negative, got {0}")]
    Negative(Decimal),

    #[error("turnover '{0}' is outside the supported range")]
    OutOfRange(String),
}

/// The partner's transaction volume in currency units. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Turnover(Decimal);

impl Turnover {
    /// Turnover shown when the calculator first opens.
    pub const DEFAULT: Turnover = Turnover(Decimal::from_parts(100_000, 0, 0, false, 0));

    pub fn new(value: Decimal) -> Result<Self, TurnoverError> {
        if value.is_zero() {
            return Ok(Self(Decimal::ZERO));
        }
        if value.is_sign_negative() {
            return Err(TurnoverError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Parses user-typed text.
    ///
    /// Surrounding whitespace and `,` thousands separators are ignored and
    /// scientific notation (`1e5`) is understood.
    pub fn parse(input: &str) -> Result<Self, TurnoverError> {
        let normalized = input.trim().replace(',', "");
        if normalized.is_empty() {
            return Err(TurnoverError::Empty);
        }

        let value = Decimal::from_str(&normalized)
            .or_else(|_| Decimal::from_scientific(&normalized))
            .map_err(|_| {
                let text = input.trim().to_string();
                if looks_numeric(&normalized) {
                    TurnoverError::OutOfRange(text)
                } else {
                    TurnoverError::NotANumber(text)
                }
            })?;

        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Well-formed decimal or scientific literal, whether or not `Decimal` can
/// hold it.
fn looks_numeric(text: &str) -> bool {
    let mantissa = text.split(['e', 'E']).next().unwrap_or_default();
    mantissa.chars().any(|c| c.is_ascii_digit())
        && !text.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

impl Default for Turnover {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Turnover {
    type Err = TurnoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Turnover {
    type Error = TurnoverError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Turnover {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
