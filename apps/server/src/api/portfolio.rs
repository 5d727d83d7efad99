use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use snapfolio_core::constants::DEFAULT_RECENT_LIMIT;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Dashboard, PortfolioMetrics, PortfolioSeries},
};

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Number of recent entries to include.
    recent_limit: Option<usize>,
}

#[utoipa::path(get, path = "/api/v1/metrics", responses((status = 200, body = PortfolioMetrics)))]
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioMetrics>> {
    let metrics = state.portfolio_service.get_metrics()?;
    Ok(Json(metrics.into()))
}

#[utoipa::path(get, path = "/api/v1/portfolio/series", responses((status = 200, body = PortfolioSeries)))]
pub async fn get_series(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSeries>> {
    let series = state.portfolio_service.get_series()?;
    Ok(Json(series.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    params(DashboardQuery),
    responses((status = 200, body = Dashboard))
)]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<Dashboard>> {
    let limit = query.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let dashboard = state.portfolio_service.get_dashboard(limit)?;
    Ok(Json(dashboard.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/portfolio/series", get(get_series))
        .route("/dashboard", get(get_dashboard))
}
