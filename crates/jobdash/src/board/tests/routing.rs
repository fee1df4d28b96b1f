use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::board::memory::InMemoryApplicationRepository;
use crate::board::router::{self, BoardState, JobSearchParams};
use crate::board::service::{ApplicationStore, JobStore};

fn offline_state() -> BoardState<
    UnavailableJobRepository,
    InMemoryApplicationRepository,
    RecordingNotifier,
> {
    let jobs = Arc::new(JobStore::new(Arc::new(UnavailableJobRepository)));
    let applications = Arc::new(ApplicationStore::new(
        jobs.clone(),
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(RecordingNotifier::default()),
    ));
    BoardState { jobs, applications }
}

#[tokio::test]
async fn create_job_handler_rejects_blank_title() {
    let state = board_state();
    let mut draft = job_draft();
    draft.title = "  ".to_string();

    let response = router::create_job_handler(State(state), axum::Json(draft)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("title"));
}

#[tokio::test]
async fn create_job_handler_maps_storage_failure_to_internal_error() {
    let response =
        router::create_job_handler(State(offline_state()), axum::Json(job_draft())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn search_handler_maps_storage_failure_to_internal_error() {
    let response = router::search_jobs_handler(
        State(offline_state()),
        Query(JobSearchParams::default()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn submit_handler_returns_not_found_for_unknown_job() {
    let state = board_state();
    let response = router::submit_application_handler(
        State(state),
        Path(42),
        axum::Json(application_draft()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("job not found")));
}

#[tokio::test]
async fn post_jobs_route_creates_a_listing() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/jobs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&job_draft()).expect("serialize draft"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("id"), Some(&json!(1)));
    assert_eq!(payload.get("title"), Some(&json!("Move a couch")));
    assert_eq!(payload.get("pay"), Some(&json!("60")));
}

#[tokio::test]
async fn jobs_route_filters_by_query_string() {
    let router = test_router();

    for (title, category) in [("Move a couch", "Moving help"), ("Clean studio", "Cleaning")] {
        let mut draft = job_draft();
        draft.title = title.to_string();
        draft.category = category.to_string();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/jobs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&draft).expect("serialize")))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs?q=couch")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let jobs = payload.as_array().expect("json array");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].get("title"), Some(&json!("Move a couch")));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs?category=All")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn job_detail_route_returns_404_for_unknown_id() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs/999")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn application_routes_cover_submit_and_listing() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/jobs")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&job_draft()).expect("serialize draft"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    let job = read_json_body(response).await;
    let job_id = job.get("id").and_then(Value::as_i64).expect("job id");

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/jobs/{job_id}/applications"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&application_draft()).expect("serialize draft"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/jobs/{job_id}/applications"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let applications = payload.as_array().expect("json array");
    assert_eq!(applications.len(), 1);
    assert_eq!(
        applications[0].get("applicant_name"),
        Some(&json!("Jane Doe"))
    );

    // Listing an unknown job is an empty list, not an error.
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs/999/applications")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(0));
}
