//! Wire types for the HTTP API.
//!
//! These mirror the core models field for field and carry the OpenAPI schema
//! annotations, so the core crate stays free of HTTP concerns.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snapfolio_core::{
    portfolio::{
        metrics::PortfolioMetrics as CoreMetrics,
        series::{ChartSeriesRow as CoreSeriesRow, PortfolioSeries as CoreSeries},
        Dashboard as CoreDashboard,
    },
    snapshots as core_snapshots,
};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: i32,
    pub asset_category: String,
    pub amount: f64,
    #[schema(value_type = String, format = Date, example = "2024-01-31")]
    pub date: NaiveDate,
}

impl From<core_snapshots::Snapshot> for Snapshot {
    fn from(s: core_snapshots::Snapshot) -> Self {
        Self {
            id: s.id,
            asset_category: s.asset_category,
            amount: s.amount,
            date: s.date,
        }
    }
}

/// Entry form payload. Fields are optional so that omissions surface as
/// validation errors with a 400 status.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewSnapshot {
    #[serde(alias = "asset_type", alias = "asset_category")]
    pub asset_category: Option<String>,
    pub amount: Option<f64>,
    #[schema(example = "2024-01-31")]
    pub date: Option<String>,
}

impl From<NewSnapshot> for core_snapshots::NewSnapshot {
    fn from(s: NewSnapshot) -> Self {
        Self {
            asset_category: s.asset_category,
            amount: s.amount,
            date: s.date,
        }
    }
}

/// Entry form choices.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AssetCategories {
    pub categories: Vec<String>,
    /// Preselected category.
    pub default: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: f64,
    pub absolute_return_percent: f64,
    pub annualized_return_percent: f64,
}

impl From<CoreMetrics> for PortfolioMetrics {
    fn from(m: CoreMetrics) -> Self {
        Self {
            total_value: m.total_value,
            absolute_return_percent: m.absolute_return_percent,
            annualized_return_percent: m.annualized_return_percent,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesRow {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub total_value: f64,
    /// Only categories logged on exactly this date.
    pub amount_by_category: BTreeMap<String, f64>,
}

impl From<CoreSeriesRow> for ChartSeriesRow {
    fn from(r: CoreSeriesRow) -> Self {
        Self {
            date: r.date,
            total_value: r.total_value,
            amount_by_category: r.amount_by_category,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSeries {
    pub categories: Vec<String>,
    pub rows: Vec<ChartSeriesRow>,
}

impl From<CoreSeries> for PortfolioSeries {
    fn from(s: CoreSeries) -> Self {
        Self {
            categories: s.categories,
            rows: s.rows.into_iter().map(ChartSeriesRow::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: PortfolioMetrics,
    pub series: PortfolioSeries,
    pub recent: Vec<Snapshot>,
}

impl From<CoreDashboard> for Dashboard {
    fn from(d: CoreDashboard) -> Self {
        Self {
            metrics: d.metrics.into(),
            series: d.series.into(),
            recent: d.recent.into_iter().map(Snapshot::from).collect(),
        }
    }
}

// Shapes served under `/api/investments` and `/api/metrics` for older clients.

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LegacyInvestment {
    pub id: i32,
    pub asset_type: String,
    pub amount: f64,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
}

impl From<core_snapshots::Snapshot> for LegacyInvestment {
    fn from(s: core_snapshots::Snapshot) -> Self {
        Self {
            id: s.id,
            asset_type: s.asset_category,
            amount: s.amount,
            date: s.date,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMetrics {
    pub total_value: f64,
    pub absolute_return: f64,
    pub xirr: f64,
}

impl From<CoreMetrics> for LegacyMetrics {
    fn from(m: CoreMetrics) -> Self {
        Self {
            total_value: m.total_value,
            absolute_return: m.absolute_return_percent,
            xirr: m.annualized_return_percent,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
