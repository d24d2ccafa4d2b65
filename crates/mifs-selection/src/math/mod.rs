//! Numeric helpers shared by the scoring code.
pub mod decimal;

pub use decimal::{decimal_precision, sum_precise};
