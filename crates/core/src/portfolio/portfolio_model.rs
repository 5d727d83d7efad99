//! Dashboard response model.

use serde::{Deserialize, Serialize};

use super::metrics::PortfolioMetrics;
use super::series::PortfolioSeries;
use crate::snapshots::Snapshot;

/// Everything the dashboard renders, computed from a single snapshot read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: PortfolioMetrics,
    pub series: PortfolioSeries,
    /// Newest entries first.
    pub recent: Vec<Snapshot>,
}
