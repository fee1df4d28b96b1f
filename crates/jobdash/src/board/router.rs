use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{ApplicationDraft, JobDraft, JobId, JobQuery};
use super::repository::{ApplicationRepository, JobRepository, NotificationPublisher};
use super::service::{ApplicationStore, ApplicationStoreError, JobStore, JobStoreError};

/// Shared handler state: both stores, constructed once at startup.
pub struct BoardState<J, A, N> {
    pub jobs: Arc<JobStore<J>>,
    pub applications: Arc<ApplicationStore<J, A, N>>,
}

impl<J, A, N> Clone for BoardState<J, A, N> {
    fn clone(&self) -> Self {
        Self {
            jobs: self.jobs.clone(),
            applications: self.applications.clone(),
        }
    }
}

/// Raw listing filters as they appear in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
}

/// Router builder exposing the job board HTTP endpoints.
pub fn board_router<J, A, N>(state: BoardState<J, A, N>) -> Router
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(search_jobs_handler::<J, A, N>).post(create_job_handler::<J, A, N>),
        )
        .route("/api/v1/jobs/:job_id", get(job_detail_handler::<J, A, N>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(list_applications_handler::<J, A, N>)
                .post(submit_application_handler::<J, A, N>),
        )
        .with_state(state)
}

pub(crate) async fn create_job_handler<J, A, N>(
    State(state): State<BoardState<J, A, N>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match state.jobs.create_job(draft) {
        Ok(job) => (StatusCode::CREATED, axum::Json(job)).into_response(),
        Err(JobStoreError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "job board request failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn search_jobs_handler<J, A, N>(
    State(state): State<BoardState<J, A, N>>,
    Query(params): Query<JobSearchParams>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let query = JobQuery::new(params.q, params.city, params.category);
    match state.jobs.search_jobs(&query) {
        Ok(jobs) => (StatusCode::OK, axum::Json(jobs)).into_response(),
        Err(error) => {
            error!(error = %error, "job board request failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn job_detail_handler<J, A, N>(
    State(state): State<BoardState<J, A, N>>,
    Path(job_id): Path<i64>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match state.jobs.get_job(JobId(job_id)) {
        Ok(Some(job)) => (StatusCode::OK, axum::Json(job)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "job not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => {
            error!(error = %error, "job board request failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_application_handler<J, A, N>(
    State(state): State<BoardState<J, A, N>>,
    Path(job_id): Path<i64>,
    axum::Json(draft): axum::Json<ApplicationDraft>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match state.applications.create_application(JobId(job_id), draft) {
        Ok(application) => (StatusCode::CREATED, axum::Json(application)).into_response(),
        Err(ApplicationStoreError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ApplicationStoreError::JobNotFound(_)) => {
            let payload = json!({
                "error": "job not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "job board request failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_applications_handler<J, A, N>(
    State(state): State<BoardState<J, A, N>>,
    Path(job_id): Path<i64>,
) -> Response
where
    J: JobRepository + 'static,
    A: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match state.applications.list_applications_for_job(JobId(job_id)) {
        Ok(applications) => (StatusCode::OK, axum::Json(applications)).into_response(),
        Err(error) => {
            error!(error = %error, "job board request failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
