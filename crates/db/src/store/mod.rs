//! The persistence boundary used by the ingestion pipeline.
//!
//! Every operation is a single, independent write or read. Implementations
//! guarantee atomicity per call only; nothing here spans two writes.

mod memory;
mod postgres;

use async_trait::async_trait;
use stresswatch_core::types::DbId;

use crate::models::alert::{Alert, CreateAlert};
use crate::models::reading::{CreateReading, Reading};
use crate::models::user::{CreateUser, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failure of an underlying persistence operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backing engine could not serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence capability for users, readings and alerts.
///
/// Handlers hold it as `Arc<dyn Store>`, so any engine (or a test double)
/// can be injected at startup.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user, returning the stored row.
    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError>;

    /// Insert a reading, returning its ID. The store assigns `created_at`.
    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, StoreError>;

    /// Insert an alert, returning its ID. The store assigns `created_at`.
    async fn insert_alert(&self, input: &CreateAlert) -> Result<DbId, StoreError>;

    /// All alerts for `user_id`, oldest first. Unknown users yield an empty list.
    async fn find_alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StoreError>;

    /// All readings for `user_id`, oldest first.
    async fn find_readings_by_user(&self, user_id: &str) -> Result<Vec<Reading>, StoreError>;

    /// Confirm the backing engine is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
