//! Route definitions for the `/alerts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /{user_id}                 -> list_alerts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}", get(alerts::list_alerts))
}
