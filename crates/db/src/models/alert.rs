//! Alert entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stresswatch_core::types::{DbId, Timestamp};

/// A row from the `alerts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub user_id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for inserting an alert. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub user_id: String,
    pub alert_type: String,
    pub message: String,
}
