//! Handlers for the `/alerts` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/alerts/{user_id}
///
/// List every alert raised for the user, oldest first. Unknown users get an
/// empty list rather than a 404.
pub async fn list_alerts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let alerts = stresswatch_pipeline::get_alerts(state.store.as_ref(), &user_id).await?;
    Ok(Json(DataResponse { data: alerts }))
}
