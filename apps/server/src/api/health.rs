use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::{error::ApiResult, main_lib::AppState};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the snapshot store answers a query.
#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses((status = 200, description = "Ready"), (status = 500, description = "Storage unavailable"))
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.snapshot_service.recent_snapshots(1)?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
