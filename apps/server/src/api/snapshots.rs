use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use snapfolio_core::{constants::DEFAULT_RECENT_LIMIT, snapshots::DeleteOutcome};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AssetCategories, NewSnapshot, Snapshot},
};

#[derive(Deserialize, utoipa::IntoParams)]
pub struct RecentQuery {
    /// Maximum number of entries, newest first.
    limit: Option<usize>,
}

#[utoipa::path(get, path = "/api/v1/snapshots", responses((status = 200, body = [Snapshot])))]
pub async fn list_snapshots(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Snapshot>>> {
    let snapshots = state.snapshot_service.list_snapshots()?;
    Ok(Json(snapshots.into_iter().map(Snapshot::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/snapshots/recent",
    params(RecentQuery),
    responses((status = 200, body = [Snapshot]))
)]
pub async fn recent_snapshots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<Vec<Snapshot>>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let snapshots = state.snapshot_service.recent_snapshots(limit)?;
    Ok(Json(snapshots.into_iter().map(Snapshot::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/snapshots",
    request_body = NewSnapshot,
    responses((status = 200, body = Snapshot), (status = 400, description = "Missing or invalid field"))
)]
pub async fn create_snapshot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewSnapshot>, JsonRejection>,
) -> ApiResult<Json<Snapshot>> {
    let Json(payload) = payload?;
    let created = state.snapshot_service.create_snapshot(payload.into()).await?;
    Ok(Json(Snapshot::from(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/snapshots/{id}",
    params(("id" = i32, Path, description = "Snapshot id")),
    responses((status = 204), (status = 404, description = "No snapshot with this id"))
)]
pub async fn delete_snapshot(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    match state.snapshot_service.delete_snapshot(id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::NotFound => Err(ApiError::NotFound(format!("Snapshot {} not found", id))),
    }
}

#[utoipa::path(get, path = "/api/v1/asset-categories", responses((status = 200, body = AssetCategories)))]
pub async fn asset_categories(State(state): State<Arc<AppState>>) -> Json<AssetCategories> {
    Json(AssetCategories {
        categories: state.snapshot_service.asset_categories(),
        default: state.snapshot_service.default_asset_category(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/snapshots", get(list_snapshots).post(create_snapshot))
        .route("/snapshots/recent", get(recent_snapshots))
        .route("/snapshots/{id}", delete(delete_snapshot))
        .route("/asset-categories", get(asset_categories))
}
