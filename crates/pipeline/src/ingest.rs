//! Reading ingestion.
//!
//! A submission is validated, classified, stored, and, when abnormal,
//! followed by exactly one alert. The reading and alert are two separate
//! writes: if the alert write fails the reading stays stored and the error
//! says so ([`PipelineError::AlertWrite`]).

use serde::Serialize;
use stresswatch_core::vitals::{
    ReadingInput, ALERT_MESSAGE_ABNORMAL_VITALS, ALERT_TYPE_SILENT_STRESS,
};
use stresswatch_db::models::alert::CreateAlert;
use stresswatch_db::models::reading::CreateReading;
use stresswatch_db::Store;

use crate::error::PipelineError;

/// Result of a successful ingestion.
///
/// The alert itself is not returned; callers fetch it through
/// [`crate::get_alerts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestOutcome {
    pub success: bool,
    pub abnormal: bool,
}

/// Validate, classify and store one reading.
///
/// Calls are not idempotent: submitting the same reading twice stores two
/// readings and, when abnormal, two alerts.
pub async fn ingest(store: &dyn Store, input: ReadingInput) -> Result<IngestOutcome, PipelineError> {
    let vitals = input.validate()?;
    let abnormal = vitals.is_abnormal();

    let reading = CreateReading {
        user_id: vitals.user_id,
        heart_rate: vitals.heart_rate,
        activity_level: vitals.activity_level,
        stress_level: vitals.stress_level,
        abnormal,
    };
    let reading_id = store
        .insert_reading(&reading)
        .await
        .map_err(PipelineError::ReadingWrite)?;

    tracing::debug!(
        reading_id,
        user_id = %reading.user_id,
        heart_rate = reading.heart_rate,
        activity_level = reading.activity_level,
        abnormal,
        "Reading stored"
    );

    if abnormal {
        let alert = CreateAlert {
            user_id: reading.user_id,
            alert_type: ALERT_TYPE_SILENT_STRESS.to_string(),
            message: ALERT_MESSAGE_ABNORMAL_VITALS.to_string(),
        };
        match store.insert_alert(&alert).await {
            Ok(alert_id) => {
                tracing::info!(alert_id, reading_id, user_id = %alert.user_id, "Alert raised");
            }
            Err(source) => {
                tracing::error!(
                    reading_id,
                    user_id = %alert.user_id,
                    error = %source,
                    "Reading stored without its alert"
                );
                return Err(PipelineError::AlertWrite { reading_id, source });
            }
        }
    }

    Ok(IngestOutcome {
        success: true,
        abnormal,
    })
}
