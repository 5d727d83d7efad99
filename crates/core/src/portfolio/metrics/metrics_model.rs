//! Portfolio return metrics models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate value and return figures derived from the current snapshot set.
///
/// Recomputed on every query; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    /// Sum of each category's latest snapshot.
    pub total_value: f64,
    /// Change from the initial to the current total, in percent (2 dp).
    pub absolute_return_percent: f64,
    /// CAGR-style approximation over the global first/last dates, in percent (2 dp).
    pub annualized_return_percent: f64,
}

/// Portfolio-level aggregates that the metrics are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioTotals {
    /// Sum of each category's earliest snapshot.
    pub initial_value: f64,
    /// Sum of each category's latest snapshot.
    pub current_value: f64,
    /// Earliest snapshot date across all categories.
    pub start_date: NaiveDate,
    /// Latest snapshot date across all categories.
    pub end_date: NaiveDate,
}
