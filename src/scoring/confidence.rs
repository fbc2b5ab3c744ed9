use crate::input::FeatureRecord;
use crate::model::features::FeatureKey;
use crate::model::scores::round_dp;

pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Assumed recording length when the extractor could not report one.
const DEFAULT_DURATION_S: f64 = 10.0;

/// Confidence from speech coverage of the target recording plus a penalty
/// for every feature that dropped out of the active set.
pub fn estimate_confidence(target: &FeatureRecord, active_count: usize) -> f64 {
    let duration = target
        .duration_s
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_DURATION_S);
    let speech = target
        .speech_dur_s
        .filter(|v| v.is_finite())
        .unwrap_or_else(|| (0.6 * duration).max(6.0));

    let speech_ratio = speech / duration.max(1e-6);
    let missing_penalty = 0.1 * (FeatureKey::COUNT - active_count) as f64;

    let confidence = 0.6 * speech_ratio.min(1.0) + 0.35 * (1.0 - missing_penalty);
    round_dp(confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE), 2)
}
