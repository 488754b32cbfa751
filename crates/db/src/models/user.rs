//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stresswatch_core::types::{DbId, Timestamp};
use stresswatch_core::users::NewUser;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<NewUser> for CreateUser {
    fn from(user: NewUser) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}
