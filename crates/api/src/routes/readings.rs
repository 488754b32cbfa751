//! Route definitions for the `/readings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// POST   /                          -> submit_reading
/// GET    /{user_id}/unalerted       -> list_unalerted
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(readings::submit_reading))
        .route("/{user_id}/unalerted", get(readings::list_unalerted))
}
