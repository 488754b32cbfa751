//! Handlers for the `/users` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stresswatch_core::users::UserInput;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Register a user. Returns 201 with the stored row.
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let user = stresswatch_pipeline::register_user(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}
