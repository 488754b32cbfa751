pub mod alerts;
pub mod health;
pub mod readings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                          register (POST)
///
/// /readings                       submit (POST)
/// /readings/{user_id}/unalerted   abnormal readings missing an alert (GET)
///
/// /alerts/{user_id}               list alerts for a user (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/readings", readings::router())
        .nest("/alerts", alerts::router())
}
