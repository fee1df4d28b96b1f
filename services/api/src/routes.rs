use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use jobdash::board::{
    ApplicationRepository, BoardState, JobRepository, NotificationPublisher, CATEGORIES,
};
use serde_json::json;

pub(crate) fn with_board_routes<J, A, N>(state: BoardState<J, A, N>) -> axum::Router
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    jobdash::board::board_router(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/categories",
            axum::routing::get(categories_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Built-in categories backing the browse and post forms. Custom categories
/// on posted jobs are still accepted.
pub(crate) async fn categories_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "categories": CATEGORIES }))
}
