use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        AssetCategories, ChartSeriesRow, Dashboard, NewSnapshot, PortfolioMetrics,
        PortfolioSeries, Snapshot,
    },
};

mod health;
mod legacy;
mod portfolio;
mod snapshots;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        snapshots::list_snapshots,
        snapshots::recent_snapshots,
        snapshots::create_snapshot,
        snapshots::delete_snapshot,
        snapshots::asset_categories,
        portfolio::get_metrics,
        portfolio::get_series,
        portfolio::get_dashboard,
    ),
    components(schemas(
        AssetCategories,
        Snapshot,
        NewSnapshot,
        PortfolioMetrics,
        ChartSeriesRow,
        PortfolioSeries,
        Dashboard
    )),
    tags((name = "snapfolio"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers(Any)
        .allow_methods(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(snapshots::router())
        .merge(portfolio::router());

    Router::new()
        .nest("/api/v1", api)
        .nest("/api", legacy::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serves the built client for every non-API path, falling back to
/// `index.html` so client-side routes resolve. No-op without a static dir.
pub fn with_static_fallback(router: Router, config: &Config) -> Router {
    let Some(dir) = &config.static_dir else {
        return router;
    };
    let static_dir = std::path::PathBuf::from(dir);
    let index_file = static_dir.join("index.html");
    tracing::info!("Serving static files from {}", static_dir.display());
    router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index_file)))
}
