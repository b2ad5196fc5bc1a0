//! Profit calculation for the partnership calculator.
//!
//! The computation itself lives in [`profit`]; [`common`] holds the rounding
//! helpers shared with the display layer.

pub mod common;
pub mod profit;

pub use profit::{FIRST_HALF_SHARE, SECOND_HALF_SHARE, compute, compute_for, rate_difference};
