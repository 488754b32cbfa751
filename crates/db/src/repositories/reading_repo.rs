//! Repository for the `readings` table.

use sqlx::PgPool;
use stresswatch_core::types::DbId;

use crate::models::reading::{CreateReading, Reading};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, heart_rate, activity_level, stress_level, abnormal, created_at";

/// Provides insert and list operations for readings. Readings are never
/// updated or deleted.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a reading, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateReading) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO readings (user_id, heart_rate, activity_level, stress_level, abnormal) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.user_id)
        .bind(input.heart_rate)
        .bind(input.activity_level)
        .bind(input.stress_level)
        .bind(input.abnormal)
        .fetch_one(pool)
        .await
    }

    /// List every reading for a user, oldest first.
    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Reading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM readings \
             WHERE user_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
