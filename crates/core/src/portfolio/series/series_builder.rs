use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::series_model::{ChartSeriesRow, PortfolioSeries};
use crate::snapshots::Snapshot;

/// Reshapes snapshots into date-indexed chart rows.
///
/// Per-category values stay sparse so the renderer can interpolate across gaps.
/// The row total carries each category's last known value forward; a category
/// that has not reported yet contributes nothing. When a category has several
/// snapshots on one date, the last one in input order wins.
///
/// All bookkeeping is local to the call; the same input always yields the same
/// output.
pub fn build_portfolio_series(snapshots: &[Snapshot]) -> PortfolioSeries {
    let categories = categories_in_first_seen_order(snapshots);

    let mut amounts_by_date: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
    for snapshot in snapshots {
        amounts_by_date
            .entry(snapshot.date)
            .or_default()
            .insert(snapshot.asset_category.clone(), snapshot.amount);
    }

    let mut last_known: HashMap<&str, f64> = HashMap::with_capacity(categories.len());
    let mut rows = Vec::with_capacity(amounts_by_date.len());
    for (date, amount_by_category) in amounts_by_date {
        let mut total_value = 0.0;
        for category in &categories {
            if let Some(amount) = amount_by_category.get(category) {
                last_known.insert(category.as_str(), *amount);
            }
            if let Some(amount) = last_known.get(category.as_str()) {
                total_value += amount;
            }
        }
        rows.push(ChartSeriesRow {
            date,
            total_value,
            amount_by_category,
        });
    }

    PortfolioSeries { categories, rows }
}

/// Distinct asset categories in order of first appearance.
pub fn categories_in_first_seen_order(snapshots: &[Snapshot]) -> Vec<String> {
    let mut seen = HashSet::new();
    snapshots
        .iter()
        .filter(|s| seen.insert(s.asset_category.as_str()))
        .map(|s| s.asset_category.clone())
        .collect()
}
