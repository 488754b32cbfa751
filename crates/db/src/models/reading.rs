//! Reading entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stresswatch_core::types::{DbId, Timestamp};

/// A row from the `readings` table.
///
/// `abnormal` is fixed at insert time and never recomputed.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub user_id: String,
    pub heart_rate: f64,
    pub activity_level: f64,
    pub stress_level: Option<f64>,
    pub abnormal: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a reading. `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateReading {
    pub user_id: String,
    pub heart_rate: f64,
    pub activity_level: f64,
    pub stress_level: Option<f64>,
    pub abnormal: bool,
}
