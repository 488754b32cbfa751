//! Store double that fails selected operations.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use stresswatch_core::types::DbId;
use stresswatch_db::models::alert::{Alert, CreateAlert};
use stresswatch_db::models::reading::{CreateReading, Reading};
use stresswatch_db::models::user::{CreateUser, User};
use stresswatch_db::{MemoryStore, Store, StoreError};

/// Wraps a [`MemoryStore`] and fails whichever operations are switched on.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_readings: AtomicBool,
    pub fail_alerts: AtomicBool,
    pub fail_queries: AtomicBool,
}

impl FlakyStore {
    pub fn failing_alerts() -> Self {
        let store = Self::default();
        store.fail_alerts.store(true, Ordering::SeqCst);
        store
    }

    pub fn failing_readings() -> Self {
        let store = Self::default();
        store.fail_readings.store(true, Ordering::SeqCst);
        store
    }

    pub fn failing_queries() -> Self {
        let store = Self::default();
        store.fail_queries.store(true, Ordering::SeqCst);
        store
    }

    fn check(flag: &AtomicBool, op: &str) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("{op} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for FlakyStore {
    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Self::check(&self.fail_queries, "insert_user")?;
        self.inner.insert_user(input).await
    }

    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, StoreError> {
        Self::check(&self.fail_readings, "insert_reading")?;
        self.inner.insert_reading(input).await
    }

    async fn insert_alert(&self, input: &CreateAlert) -> Result<DbId, StoreError> {
        Self::check(&self.fail_alerts, "insert_alert")?;
        self.inner.insert_alert(input).await
    }

    async fn find_alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StoreError> {
        Self::check(&self.fail_queries, "find_alerts_by_user")?;
        self.inner.find_alerts_by_user(user_id).await
    }

    async fn find_readings_by_user(&self, user_id: &str) -> Result<Vec<Reading>, StoreError> {
        Self::check(&self.fail_queries, "find_readings_by_user")?;
        self.inner.find_readings_by_user(user_id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Self::check(&self.fail_queries, "health_check")
    }
}
