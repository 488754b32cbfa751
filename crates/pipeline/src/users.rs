//! User registration.

use stresswatch_core::users::UserInput;
use stresswatch_db::models::user::{CreateUser, User};
use stresswatch_db::Store;

use crate::error::PipelineError;

/// Validate and store a new user.
pub async fn register_user(store: &dyn Store, input: UserInput) -> Result<User, PipelineError> {
    let new_user = CreateUser::from(input.into_new_user()?);
    let user = store.insert_user(&new_user).await?;
    tracing::info!(user_id = user.id, "User registered");
    Ok(user)
}
