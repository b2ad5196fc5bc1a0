pub mod calculations;
pub mod format;
pub mod models;
pub mod session;

pub use calculations::{compute, compute_for, rate_difference};
pub use models::*;
pub use session::{CalculatorSession, ProfitSnapshot, TurnoverInput};
