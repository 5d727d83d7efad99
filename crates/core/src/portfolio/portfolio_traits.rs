use super::metrics::PortfolioMetrics;
use super::portfolio_model::Dashboard;
use super::series::PortfolioSeries;
use crate::errors::Result;

/// Trait for portfolio read operations.
///
/// Every call reads a fresh snapshot list; nothing is cached between calls.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_metrics(&self) -> Result<PortfolioMetrics>;
    fn get_series(&self) -> Result<PortfolioSeries>;
    fn get_dashboard(&self, recent_limit: usize) -> Result<Dashboard>;
}
