//! Portfolio return metrics.
//!
//! Aggregates each asset category's first and latest snapshot into portfolio
//! totals and derives an absolute return and an approximate annualized return.

mod metrics_calculator;
mod metrics_model;

pub use metrics_calculator::*;
pub use metrics_model::*;
