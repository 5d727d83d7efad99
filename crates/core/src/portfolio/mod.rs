//! Portfolio module - return metrics, chart series and the dashboard service.

pub mod metrics;
pub mod series;

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::Dashboard;
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
