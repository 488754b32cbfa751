//! Abnormal-vitals rule.
//!
//! A reading is abnormal when the heart rate leaves the resting band or the
//! activity level drops below the minimum. All comparisons are strict, so
//! values sitting exactly on a threshold are normal.

/// Heart rates above this many beats per minute are abnormal.
pub const HEART_RATE_MAX_BPM: f64 = 120.0;

/// Heart rates below this many beats per minute are abnormal.
pub const HEART_RATE_MIN_BPM: f64 = 50.0;

/// Activity levels below this fraction are abnormal.
pub const ACTIVITY_LEVEL_MIN: f64 = 0.2;

/// Classify a reading. Returns `true` when the vitals are abnormal.
///
/// The three conditions are independent; evaluation order has no effect on
/// the verdict. Any pair of numbers yields a verdict, including values far
/// outside the physiological range (those are exactly what gets flagged).
pub fn is_abnormal(heart_rate: f64, activity_level: f64) -> bool {
    heart_rate > HEART_RATE_MAX_BPM
        || heart_rate < HEART_RATE_MIN_BPM
        || activity_level < ACTIVITY_LEVEL_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_rate_upper_boundary_is_normal() {
        assert!(!is_abnormal(120.0, 1.0));
        assert!(is_abnormal(121.0, 1.0));
        assert!(is_abnormal(120.01, 1.0));
    }

    #[test]
    fn heart_rate_lower_boundary_is_normal() {
        assert!(!is_abnormal(50.0, 1.0));
        assert!(is_abnormal(49.0, 1.0));
        assert!(is_abnormal(49.99, 1.0));
    }

    #[test]
    fn activity_boundary_is_normal() {
        assert!(!is_abnormal(90.0, 0.2));
        assert!(is_abnormal(90.0, 0.19));
    }

    #[test]
    fn typical_resting_reading_is_normal() {
        assert!(!is_abnormal(80.0, 0.8));
    }

    #[test]
    fn any_single_condition_is_enough() {
        // High heart rate with plenty of activity.
        assert!(is_abnormal(130.0, 0.9));
        // Normal heart rate, idle.
        assert!(is_abnormal(70.0, 0.0));
        // Everything off at once.
        assert!(is_abnormal(30.0, 0.05));
    }

    #[test]
    fn out_of_domain_values_still_classify() {
        assert!(is_abnormal(-10.0, 0.5));
        assert!(is_abnormal(10_000.0, 0.5));
        assert!(is_abnormal(80.0, -1.0));
        assert!(!is_abnormal(80.0, 42.0));
    }
}
