use async_trait::async_trait;
use stresswatch_core::types::DbId;

use super::{Store, StoreError};
use crate::models::alert::{Alert, CreateAlert};
use crate::models::reading::{CreateReading, Reading};
use crate::models::user::{CreateUser, User};
use crate::repositories::{AlertRepo, ReadingRepo, UserRepo};
use crate::DbPool;

/// [`Store`] backed by PostgreSQL.
///
/// Each call runs in its own implicit transaction on a pooled connection.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, StoreError> {
        Ok(ReadingRepo::create(&self.pool, input).await?)
    }

    async fn insert_alert(&self, input: &CreateAlert) -> Result<DbId, StoreError> {
        Ok(AlertRepo::create(&self.pool, input).await?)
    }

    async fn find_alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StoreError> {
        Ok(AlertRepo::list_for_user(&self.pool, user_id).await?)
    }

    async fn find_readings_by_user(&self, user_id: &str) -> Result<Vec<Reading>, StoreError> {
        Ok(ReadingRepo::list_for_user(&self.pool, user_id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
