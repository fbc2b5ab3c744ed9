use crate::input::FeatureRecord;
use crate::model::baseline::Baseline;
use crate::model::features::FeatureKey;

use super::baselines::Baselines;

/// Skew applied when neither distance is usable.
pub const DEFAULT_CONV_WEIGHT: f64 = 0.6;

/// Keys compared when estimating how far the target sits from a baseline.
const DISTANCE_KEYS: [FeatureKey; 2] = [FeatureKey::PauseRatio, FeatureKey::MeanRmsDb];

/// How much of the final score leans on each baseline. Always sums to 1.
#[derive(Debug, Clone, Copy)]
pub struct BaselineWeights {
    pub conv: f64,
    pub read: f64,
}

/// Splits the blend by relative distance. Note the split is
/// distance-proportional, so the baseline the target is FARTHER from ends
/// up with the LARGER weight; this is long-standing model behavior and is
/// kept as is.
pub fn estimate_weights(baselines: &Baselines, target: &FeatureRecord) -> BaselineWeights {
    let d_conv = distance(&baselines.conv, target);
    let d_read = distance(&baselines.read, target);

    let conv = if d_conv.is_finite() && d_read.is_finite() && d_conv + d_read > 0.0 {
        d_conv / (d_conv + d_read)
    } else {
        DEFAULT_CONV_WEIGHT
    };

    BaselineWeights {
        conv,
        read: 1.0 - conv,
    }
}

/// Average absolute difference over the distance keys where both the
/// baseline mean and the target value are present; 1.0 when none qualify.
fn distance(base: &Baseline, target: &FeatureRecord) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for key in DISTANCE_KEYS {
        if let (Some(mean), Some(value)) = (base.mean(key), target.get(key)) {
            sum += (value - mean).abs();
            count += 1;
        }
    }
    if count == 0 { 1.0 } else { sum / count as f64 }
}
