//! Repository for the `alerts` table.

use sqlx::PgPool;
use stresswatch_core::types::DbId;

use crate::models::alert::{Alert, CreateAlert};

/// Column list for `alerts` queries.
const COLUMNS: &str = "id, user_id, alert_type, message, created_at";

/// Provides insert and list operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert an alert, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO alerts (user_id, alert_type, message) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.user_id)
        .bind(&input.alert_type)
        .bind(&input.message)
        .fetch_one(pool)
        .await
    }

    /// List every alert for a user in creation order.
    ///
    /// Returns an empty list for identifiers that have never raised an alert.
    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE user_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
