use std::sync::Arc;

use crate::config::Config;
use snapfolio_core::{
    portfolio::{PortfolioService, PortfolioServiceTrait},
    snapshots::{SnapshotService, SnapshotServiceTrait},
};
use snapfolio_storage_sqlite::{
    db::{self, write_actor},
    snapshots::SnapshotRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub snapshot_service: Arc<dyn SnapshotServiceTrait + Send + Sync>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, applies migrations and wires the services.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let snapshot_repository = Arc::new(SnapshotRepository::new(pool.clone(), writer.clone()));
    let snapshot_service = Arc::new(SnapshotService::new(snapshot_repository.clone()));
    let portfolio_service = Arc::new(PortfolioService::new(snapshot_repository));

    Ok(Arc::new(AppState {
        snapshot_service,
        portfolio_service,
    }))
}
