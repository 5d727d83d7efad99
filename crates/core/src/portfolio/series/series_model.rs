//! Chart series models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One date on the chart's x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesRow {
    pub date: NaiveDate,
    /// Sum of every category's most recent value as of `date`.
    pub total_value: f64,
    /// Only the categories with a snapshot on exactly this date.
    pub amount_by_category: BTreeMap<String, f64>,
}

impl ChartSeriesRow {
    /// The explicit value for `category` on this date, if one was logged.
    pub fn amount_for(&self, category: &str) -> Option<f64> {
        self.amount_by_category.get(category).copied()
    }
}

/// Chart-ready view of all snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSeries {
    /// Distinct categories in order of first appearance in the input.
    pub categories: Vec<String>,
    /// Rows in ascending date order.
    pub rows: Vec<ChartSeriesRow>,
}
