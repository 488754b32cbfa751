use async_trait::async_trait;
use chrono::{Duration, Utc};
use stresswatch_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::{Store, StoreError};
use crate::models::alert::{Alert, CreateAlert};
use crate::models::reading::{CreateReading, Reading};
use crate::models::user::{CreateUser, User};

/// [`Store`] that keeps every table in process memory.
///
/// IDs are sequential per table starting at 1. Timestamps strictly increase
/// across all tables, so a row inserted after another always has a later
/// `created_at`, even when the wall clock stalls or steps back.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    readings: Vec<Reading>,
    alerts: Vec<Alert>,
    last_created_at: Option<Timestamp>,
}

impl Tables {
    fn next_timestamp(&mut self) -> Timestamp {
        let now = Utc::now();
        let next = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(next);
        next
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored readings across all users.
    pub async fn reading_count(&self) -> usize {
        self.tables.read().await.readings.len()
    }

    /// Total number of stored alerts across all users.
    pub async fn alert_count(&self) -> usize {
        self.tables.read().await.alerts.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.users.len() as DbId + 1,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            created_at: tables.next_timestamp(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.readings.len() as DbId + 1;
        let created_at = tables.next_timestamp();
        tables.readings.push(Reading {
            id,
            user_id: input.user_id.clone(),
            heart_rate: input.heart_rate,
            activity_level: input.activity_level,
            stress_level: input.stress_level,
            abnormal: input.abnormal,
            created_at,
        });
        Ok(id)
    }

    async fn insert_alert(&self, input: &CreateAlert) -> Result<DbId, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.alerts.len() as DbId + 1;
        let created_at = tables.next_timestamp();
        tables.alerts.push(Alert {
            id,
            user_id: input.user_id.clone(),
            alert_type: input.alert_type.clone(),
            message: input.message.clone(),
            created_at,
        });
        Ok(id)
    }

    async fn find_alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .alerts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_readings_by_user(&self, user_id: &str) -> Result<Vec<Reading>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .readings
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
