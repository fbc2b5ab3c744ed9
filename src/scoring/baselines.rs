use crate::input::FeatureRecord;
use crate::model::baseline::{Baseline, robust_spread};
use crate::model::features::FeatureKey;

use super::SessionRecords;

/// Keys averaged into the conversational baseline (intro + hobby).
const CONV_MEAN_KEYS: [FeatureKey; 5] = FeatureKey::ALL;

/// Keys with a conversational spread pool; mean_f0 deviation is judged
/// against the reading baseline, so its conversational spread is unused.
const CONV_SPREAD_KEYS: [FeatureKey; 4] = [
    FeatureKey::PauseRatio,
    FeatureKey::PauseCount,
    FeatureKey::MeanRmsDb,
    FeatureKey::MaxRmsDb,
];

/// Keys covered by the reading baseline (story + technical).
const READ_KEYS: [FeatureKey; 2] = [FeatureKey::MeanF0, FeatureKey::MeanRmsDb];

/// Both per-speaker baselines for one scoring call.
#[derive(Debug, Clone)]
pub struct Baselines {
    pub conv: Baseline,
    pub read: Baseline,
}

pub fn build_baselines(records: &SessionRecords<'_>) -> Baselines {
    Baselines {
        conv: pair_baseline(
            records.intro,
            records.hobby,
            &CONV_MEAN_KEYS,
            &CONV_SPREAD_KEYS,
        ),
        read: pair_baseline(records.story, records.technical, &READ_KEYS, &READ_KEYS),
    }
}

/// Aggregates a recording pair: per key, the mean over whichever source
/// values are present (absent only when both are), and the robust spread
/// over the same two-element pool.
fn pair_baseline(
    a: &FeatureRecord,
    b: &FeatureRecord,
    mean_keys: &[FeatureKey],
    spread_keys: &[FeatureKey],
) -> Baseline {
    let mut baseline = Baseline::new();

    for &key in mean_keys {
        let values: Vec<f64> = [a.get(key), b.get(key)].into_iter().flatten().collect();
        let mean = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };
        baseline.set_mean(key, mean);
    }

    for &key in spread_keys {
        baseline.set_spread(key, robust_spread(&[a.get(key), b.get(key)]));
    }

    baseline
}
