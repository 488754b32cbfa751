//! Alert retrieval.

use stresswatch_db::models::alert::Alert;
use stresswatch_db::Store;

use crate::error::PipelineError;

/// All alerts raised for `user_id`, oldest first.
///
/// The identifier is not checked against the user registry: an unknown
/// user simply has no alerts.
pub async fn get_alerts(store: &dyn Store, user_id: &str) -> Result<Vec<Alert>, PipelineError> {
    let alerts = store.find_alerts_by_user(user_id).await?;
    tracing::debug!(user_id, count = alerts.len(), "Listed alerts");
    Ok(alerts)
}
