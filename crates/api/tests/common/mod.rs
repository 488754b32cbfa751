#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use stresswatch_core::types::DbId;
use stresswatch_db::models::alert::{Alert, CreateAlert};
use stresswatch_db::models::reading::{CreateReading, Reading};
use stresswatch_db::models::user::{CreateUser, User};
use stresswatch_db::{MemoryStore, Store, StoreError};
use tower::ServiceExt;

use stresswatch_api::config::{LogFormat, ServerConfig, StoreBackend};
use stresswatch_api::router::build_app_router;
use stresswatch_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build a router over a fresh in-memory store, returning both so tests can
/// inspect what was persisted.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(store.clone());
    (app, store)
}

/// An in-memory store whose alert writes always fail. Every other operation
/// goes through to the wrapped [`MemoryStore`].
#[derive(Default)]
pub struct AlertFailingStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl Store for AlertFailingStore {
    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        self.inner.insert_user(input).await
    }
    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, StoreError> {
        self.inner.insert_reading(input).await
    }
    async fn insert_alert(&self, _: &CreateAlert) -> Result<DbId, StoreError> {
        Err(StoreError::Unavailable("alerts table is locked".into()))
    }
    async fn find_alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StoreError> {
        self.inner.find_alerts_by_user(user_id).await
    }
    async fn find_readings_by_user(&self, user_id: &str) -> Result<Vec<Reading>, StoreError> {
        self.inner.find_readings_by_user(user_id).await
    }
    async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
