//! Handlers for the `/readings` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use stresswatch_core::vitals::ReadingInput;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/readings
///
/// Submit one reading. Responds with `{ "data": { "success": true,
/// "abnormal": <bool> } }`; any alert raised is fetched separately.
pub async fn submit_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let outcome = stresswatch_pipeline::ingest(state.store.as_ref(), input).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/readings/{user_id}/unalerted
///
/// Abnormal readings for the user that have no matching alert.
pub async fn list_unalerted(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let readings =
        stresswatch_pipeline::find_unalerted_readings(state.store.as_ref(), &user_id).await?;
    Ok(Json(DataResponse { data: readings }))
}
