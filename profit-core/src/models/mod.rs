mod profit_breakdown;
mod sell_rate;
mod turnover;

pub use profit_breakdown::ProfitBreakdown;
pub use sell_rate::{BUY_RATE, SellRate, SellRateError};
pub use turnover::{Turnover, TurnoverError};
