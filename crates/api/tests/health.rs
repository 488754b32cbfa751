//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use stresswatch_core::types::DbId;
use stresswatch_db::models::alert::{Alert, CreateAlert};
use stresswatch_db::models::reading::{CreateReading, Reading};
use stresswatch_db::models::user::{CreateUser, User};
use stresswatch_db::{Store, StoreError};
use tower::ServiceExt;

/// A store whose backend is permanently unreachable.
struct DownStore;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl Store for DownStore {
    async fn insert_user(&self, _: &CreateUser) -> Result<User, StoreError> {
        Err(down())
    }
    async fn insert_reading(&self, _: &CreateReading) -> Result<DbId, StoreError> {
        Err(down())
    }
    async fn insert_alert(&self, _: &CreateAlert) -> Result<DbId, StoreError> {
        Err(down())
    }
    async fn find_alerts_by_user(&self, _: &str) -> Result<Vec<Alert>, StoreError> {
        Err(down())
    }
    async fn find_readings_by_user(&self, _: &str) -> Result<Vec<Reading>, StoreError> {
        Err(down())
    }
    async fn health_check(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _) = common::memory_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store"], "memory");
    assert_eq!(json["store_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: an unreachable store reports degraded health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_store_reports_degraded() {
    let app = common::build_test_app(Arc::new(DownStore));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: storage failures surface as sanitized 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_failure_returns_500_without_details() {
    let app = common::build_test_app(Arc::new(DownStore));
    let response = get(app, "/api/v1/alerts/alice").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert!(!json.to_string().contains("connection refused"));
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = common::memory_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = common::memory_app();
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let (app, _) = common::memory_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/readings")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
