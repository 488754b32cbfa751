//! Reading submissions and the alert they may produce.
//!
//! [`ReadingInput`] is the raw, possibly incomplete submission as it arrives
//! from a caller. [`ReadingInput::validate`] turns it into [`Vitals`], which
//! is guaranteed to carry every field the classifier and the store need.

use serde::{Deserialize, Deserializer};

use crate::classifier;
use crate::error::CoreError;

/// Category tag stored on every alert raised for abnormal vitals.
pub const ALERT_TYPE_SILENT_STRESS: &str = "Silent Stress";

/// Human-readable text stored on every alert raised for abnormal vitals.
pub const ALERT_MESSAGE_ABNORMAL_VITALS: &str = "Abnormal vitals detected";

/// A reading submission before validation.
///
/// Every field is optional so that a missing value becomes a validation
/// error instead of a deserialization failure. The camelCase aliases accept
/// payloads from older device clients. `user_id` may arrive as a JSON string
/// or as an integer, such as the id handed out by user registration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingInput {
    #[serde(alias = "userId", default, deserialize_with = "user_id_text")]
    pub user_id: Option<String>,
    #[serde(alias = "heartRate")]
    pub heart_rate: Option<f64>,
    #[serde(alias = "activityLevel")]
    pub activity_level: Option<f64>,
    #[serde(alias = "stressLevel")]
    pub stress_level: Option<f64>,
}

/// A validated reading, ready to be classified and persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitals {
    pub user_id: String,
    pub heart_rate: f64,
    pub activity_level: f64,
    /// Self-reported; stored as given and never used for classification.
    pub stress_level: Option<f64>,
}

impl Vitals {
    /// Apply the abnormal-vitals rule to this reading.
    pub fn is_abnormal(&self) -> bool {
        classifier::is_abnormal(self.heart_rate, self.activity_level)
    }
}

impl ReadingInput {
    /// Check that the required fields are present and well-formed.
    ///
    /// `user_id` must be non-blank, and `heart_rate` / `activity_level` must
    /// be finite numbers. No range check is applied: out-of-range vitals are
    /// for the classifier to flag, not for validation to reject.
    pub fn validate(self) -> Result<Vitals, CoreError> {
        let user_id = match self.user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(CoreError::Validation("user_id is required".into())),
        };
        let heart_rate = require_finite(self.heart_rate, "heart_rate")?;
        let activity_level = require_finite(self.activity_level, "activity_level")?;

        Ok(Vitals {
            user_id,
            heart_rate,
            activity_level,
            stress_level: self.stress_level,
        })
    }
}

/// Accept a string or integer identifier and keep it as text.
fn user_id_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawUserId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<RawUserId>::deserialize(deserializer)?.map(|raw| match raw {
        RawUserId::Text(text) => text,
        RawUserId::Signed(n) => n.to_string(),
        RawUserId::Unsigned(n) => n.to_string(),
    }))
}

fn require_finite(value: Option<f64>, name: &str) -> Result<f64, CoreError> {
    match value {
        None => Err(CoreError::Validation(format!("{name} is required"))),
        Some(v) if !v.is_finite() => Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {v}"
        ))),
        Some(v) => Ok(v),
    }
}
