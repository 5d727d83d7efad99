use log::debug;
use std::sync::Arc;

use super::metrics::{calculate_portfolio_metrics, PortfolioMetrics};
use super::portfolio_model::Dashboard;
use super::portfolio_traits::PortfolioServiceTrait;
use super::series::{build_portfolio_series, PortfolioSeries};
use crate::errors::Result;
use crate::snapshots::SnapshotRepositoryTrait;

/// Computes metrics and chart series from the stored snapshots.
pub struct PortfolioService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        Self {
            snapshot_repository,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_metrics(&self) -> Result<PortfolioMetrics> {
        let snapshots = self.snapshot_repository.list()?;
        Ok(calculate_portfolio_metrics(&snapshots))
    }

    fn get_series(&self) -> Result<PortfolioSeries> {
        let snapshots = self.snapshot_repository.list()?;
        Ok(build_portfolio_series(&snapshots))
    }

    fn get_dashboard(&self, recent_limit: usize) -> Result<Dashboard> {
        let snapshots = self.snapshot_repository.list()?;
        debug!("Building dashboard from {} snapshots", snapshots.len());

        let metrics = calculate_portfolio_metrics(&snapshots);
        let series = build_portfolio_series(&snapshots);
        let recent = snapshots.iter().rev().take(recent_limit).cloned().collect();

        Ok(Dashboard {
            metrics,
            series,
            recent,
        })
    }
}
