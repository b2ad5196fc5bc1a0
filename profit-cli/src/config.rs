//! TOML configuration for the calculator binary.
//!
//! ```toml
//! [defaults]
//! turnover = 100000
//! sell_rate = 1.0
//!
//! [logging]
//! level = "warn"
//! file = "profit.log"
//! ```
//!
//! Every key is optional; missing keys fall back to the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use profit_core::{CalculatorSession, SellRate, SellRateError, Turnover, TurnoverError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid default turnover: {0}")]
    Turnover(#[from] TurnoverError),

    #[error("invalid default sell rate: {0}")]
    SellRate(#[from] SellRateError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

/// Inputs the calculator opens with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub turnover: Decimal,
    pub sell_rate: Decimal,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            turnover: Turnover::DEFAULT.value(),
            sell_rate: SellRate::DEFAULT.value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, or returns the built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.turnover()?;
        self.defaults.sell_rate()?;
        Ok(())
    }

    /// A fresh session opened on the configured defaults.
    pub fn session(&self) -> Result<CalculatorSession, ConfigError> {
        Ok(CalculatorSession::new(
            self.defaults.turnover()?,
            self.defaults.sell_rate()?,
        ))
    }
}

impl DefaultsConfig {
    pub fn turnover(&self) -> Result<Turnover, TurnoverError> {
        Turnover::new(self.turnover)
    }

    pub fn sell_rate(&self) -> Result<SellRate, SellRateError> {
        SellRate::new(self.sell_rate)
    }
}
