use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stresswatch_core::error::CoreError;
use stresswatch_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`PipelineError`] and implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stresswatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from an ingestion, query or registration operation.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The request could not be read as JSON at all.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failure outside the domain, such as a panicking handler.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// A request without a JSON content type is a bad request. A body that is
/// not JSON, or has fields of the wrong type, is malformed input like any
/// other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest(rejection.body_text())
            }
            _ => AppError::Core(CoreError::Validation(rejection.body_text())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Pipeline(err) => match err {
                PipelineError::Core(core) => classify_core_error(core),
                PipelineError::AlertWrite { reading_id, source } => {
                    tracing::error!(reading_id, error = %source, "Alert write failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE_ERROR",
                        "The reading was stored but its alert could not be recorded".to_string(),
                    )
                }
                PipelineError::ReadingWrite(source) | PipelineError::Storage(source) => {
                    tracing::error!(error = %source, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE_ERROR",
                        "A storage error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}
