//! Abnormal readings that never got their alert.
//!
//! Readings and alerts are written separately and share no key, so an alert
//! write that failed after its reading was stored leaves an abnormal reading
//! with nothing pointing at it. This module finds such readings. It only
//! reports; nothing is written back.

use stresswatch_db::models::alert::Alert;
use stresswatch_db::models::reading::Reading;
use stresswatch_db::Store;

use crate::error::PipelineError;

/// Abnormal readings for `user_id` that no alert accounts for, oldest first.
pub async fn find_unalerted_readings(
    store: &dyn Store,
    user_id: &str,
) -> Result<Vec<Reading>, PipelineError> {
    let readings = store.find_readings_by_user(user_id).await?;
    let alerts = store.find_alerts_by_user(user_id).await?;

    let unmatched = unmatched_readings(readings, &alerts);
    if !unmatched.is_empty() {
        tracing::warn!(
            user_id,
            count = unmatched.len(),
            "Abnormal readings without a matching alert"
        );
    }
    Ok(unmatched)
}

/// Pair alerts with abnormal readings in creation order.
///
/// An alert is written right after its reading, so each alert claims the
/// most recent unclaimed abnormal reading created no later than itself.
/// Both inputs must be sorted oldest first; the result is too.
fn unmatched_readings(readings: Vec<Reading>, alerts: &[Alert]) -> Vec<Reading> {
    let mut pending = readings.into_iter().filter(|r| r.abnormal).peekable();
    let mut candidates: Vec<Reading> = Vec::new();

    for alert in alerts {
        while let Some(reading) = pending.next_if(|r| r.created_at <= alert.created_at) {
            candidates.push(reading);
        }
        // An alert with no earlier reading has nothing to claim.
        candidates.pop();
    }

    candidates.extend(pending);
    candidates
}
