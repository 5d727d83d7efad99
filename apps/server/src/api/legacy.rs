//! Unversioned routes kept for clients written against the first release.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use snapfolio_core::snapshots::DeleteOutcome;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{LegacyInvestment, LegacyMetrics, MessageResponse, NewSnapshot},
};

async fn list_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LegacyInvestment>>> {
    let snapshots = state.snapshot_service.list_snapshots()?;
    Ok(Json(snapshots.into_iter().map(LegacyInvestment::from).collect()))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewSnapshot>, JsonRejection>,
) -> ApiResult<Json<LegacyInvestment>> {
    let Json(payload) = payload?;
    let created = state.snapshot_service.create_snapshot(payload.into()).await?;
    Ok(Json(LegacyInvestment::from(created)))
}

async fn delete_investment(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    match state.snapshot_service.delete_snapshot(id).await? {
        DeleteOutcome::Deleted => Ok(Json(MessageResponse {
            message: "Deleted successfully".to_string(),
        })),
        DeleteOutcome::NotFound => Err(ApiError::NotFound("Investment not found".to_string())),
    }
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> ApiResult<Json<LegacyMetrics>> {
    let metrics = state.portfolio_service.get_metrics()?;
    Ok(Json(metrics.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route("/investments/{id}", delete(delete_investment))
        .route("/metrics", get(get_metrics))
}
