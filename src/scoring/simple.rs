use crate::input::FeatureRecord;
use crate::model::features::FeatureKey;
use crate::model::scores::{ScoreDetail, ScoreResult, round_dp};

/// Confidence of every threshold-based score; there is no baseline to
/// ground a better estimate.
const SIMPLE_CONFIDENCE: f64 = 0.7;

/// Threshold fallback for a lone target recording. Absent or non-finite
/// features fall back to neutral defaults, so the score stays defined for
/// any input.
pub fn score_single(target: &FeatureRecord) -> ScoreResult {
    let pause_ratio = target.get(FeatureKey::PauseRatio).unwrap_or(0.0);
    let pause_count = target.get(FeatureKey::PauseCount).unwrap_or(0.0);
    let mean_f0 = target.get(FeatureKey::MeanF0).unwrap_or(150.0);
    let mean_rms_db = target.get(FeatureKey::MeanRmsDb).unwrap_or(-30.0);

    let mut score: f64 = 0.0;

    if pause_ratio > 0.2 {
        score += 25.0;
    } else if pause_ratio > 0.1 {
        score += 10.0;
    }

    if pause_count > 10.0 {
        score += 20.0;
    } else if pause_count > 5.0 {
        score += 10.0;
    }

    // extreme pitch suggests stress
    if mean_f0 < 100.0 || mean_f0 > 250.0 {
        score += 15.0;
    } else if mean_f0 < 120.0 || mean_f0 > 200.0 {
        score += 8.0;
    }

    if mean_rms_db > -10.0 {
        score += 20.0; // very loud
    } else if mean_rms_db < -50.0 {
        score += 15.0; // very quiet
    }

    let mut reasons: Vec<&'static str> = Vec::new();
    if pause_ratio > 0.15 {
        reasons.push("High pause ratio detected");
    }
    if pause_count > 8.0 {
        reasons.push("Frequent pausing detected");
    }
    if mean_f0 < 120.0 || mean_f0 > 200.0 {
        reasons.push("Unusual pitch patterns");
    }
    if reasons.is_empty() {
        reasons.push("Speech patterns appear normal");
    }

    ScoreResult {
        score: round_dp(score.clamp(0.0, 100.0), 1),
        confidence: SIMPLE_CONFIDENCE,
        reasons,
        detail: ScoreDetail::Method {
            method: "simple_threshold",
        },
    }
}
