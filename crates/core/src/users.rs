//! User registration input.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// A registration request before validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserInput {
    #[validate(required, length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

/// A validated user, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserInput {
    /// Validate field constraints and produce a [`NewUser`].
    pub fn into_new_user(self) -> Result<NewUser, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CoreError::Validation("name must not be blank".into()))?;

        Ok(NewUser {
            name,
            email: self.email,
            phone: self.phone,
        })
    }
}
