//! Absolute and annualized return over sparse per-category snapshots.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

use super::metrics_model::{PortfolioMetrics, PortfolioTotals};
use crate::constants::{DAYS_PER_YEAR, PERCENT_PRECISION};
use crate::snapshots::Snapshot;

impl PortfolioTotals {
    /// Sums each category's first and last snapshot.
    ///
    /// Categories are grouped in first-seen order and each group is stably sorted
    /// by date, so snapshots sharing a date keep their input order. The date range
    /// is global across all categories, not per category.
    ///
    /// Returns `None` for an empty snapshot list.
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Option<Self> {
        let start_date = snapshots.iter().map(|s| s.date).min()?;
        let end_date = snapshots.iter().map(|s| s.date).max()?;

        let mut category_order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&Snapshot>> = HashMap::new();
        for snapshot in snapshots {
            groups
                .entry(snapshot.asset_category.as_str())
                .or_insert_with(|| {
                    category_order.push(snapshot.asset_category.as_str());
                    Vec::new()
                })
                .push(snapshot);
        }

        let mut initial_value = 0.0;
        let mut current_value = 0.0;
        for category in category_order {
            let Some(history) = groups.get_mut(category) else {
                continue;
            };
            history.sort_by_key(|s| s.date);
            if let (Some(first), Some(last)) = (history.first(), history.last()) {
                initial_value += first.amount;
                current_value += last.amount;
            }
        }

        Some(Self {
            initial_value,
            current_value,
            start_date,
            end_date,
        })
    }
}

/// Computes dashboard metrics for the given snapshots.
///
/// Empty input yields all-zero metrics. Non-positive initial totals and
/// zero-length date ranges yield zero returns instead of errors.
pub fn calculate_portfolio_metrics(snapshots: &[Snapshot]) -> PortfolioMetrics {
    let Some(totals) = PortfolioTotals::from_snapshots(snapshots) else {
        return PortfolioMetrics::default();
    };

    let absolute = absolute_return_percent(totals.initial_value, totals.current_value);
    let annualized = annualized_return(
        totals.initial_value,
        totals.start_date,
        totals.current_value,
        totals.end_date,
    ) * 100.0;

    debug!(
        "Portfolio totals: initial={} current={} range={}..{}",
        totals.initial_value, totals.current_value, totals.start_date, totals.end_date
    );

    PortfolioMetrics {
        total_value: totals.current_value,
        absolute_return_percent: round_percent(absolute),
        annualized_return_percent: round_percent(annualized),
    }
}

/// Percentage change from `initial` to `current`; zero when `initial <= 0`.
pub fn absolute_return_percent(initial: f64, current: f64) -> f64 {
    if initial > 0.0 {
        (current - initial) / initial * 100.0
    } else {
        0.0
    }
}

/// Single-period compound annual growth rate, as a fraction (`0.1` is 10%).
///
/// `initial` is treated as one outflow at `start` and `current` as one inflow
/// at `end`. Returns zero when `initial <= 0` or both dates are the same day.
pub fn annualized_return(initial: f64, start: NaiveDate, current: f64, end: NaiveDate) -> f64 {
    if initial <= 0.0 {
        return 0.0;
    }

    let days = (end - start).num_days().abs();
    if days == 0 {
        return 0.0;
    }

    let years = days as f64 / DAYS_PER_YEAR;
    let ratio = current / initial;
    ratio.powf(1.0 / years) - 1.0
}

/// Rounds to the presented precision. Values that overflow `f64` are reported as zero.
fn round_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(PERCENT_PRECISION);
    (value * factor).round() / factor
}
