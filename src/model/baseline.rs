use crate::model::features::FeatureKey;

/// Spread floor guarding against a degenerate two-value pool.
pub const SPREAD_MIN: f64 = 1e-6;

/// MAD-to-standard-deviation scale for normally distributed data.
const MAD_SCALE: f64 = 1.4826;

/// Per-speaker baseline derived from a pair of same-style recordings.
/// A mean is absent only when both source recordings lack the key.
/// Derived per scoring call, never persisted.
#[derive(Debug, Clone)]
pub struct Baseline {
    mean: [Option<f64>; FeatureKey::COUNT],
    spread: [f64; FeatureKey::COUNT],
}

impl Baseline {
    pub fn new() -> Self {
        Baseline {
            mean: [None; FeatureKey::COUNT],
            // robust_spread of an empty pool
            spread: [1.0; FeatureKey::COUNT],
        }
    }

    pub fn mean(&self, key: FeatureKey) -> Option<f64> {
        self.mean[key.index()]
    }

    pub fn spread(&self, key: FeatureKey) -> f64 {
        self.spread[key.index()]
    }

    pub fn set_mean(&mut self, key: FeatureKey, value: Option<f64>) {
        self.mean[key.index()] = value;
    }

    pub fn set_spread(&mut self, key: FeatureKey, value: f64) {
        self.spread[key.index()] = value;
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new()
    }
}

/// Robust spread estimate: median absolute deviation scaled to a standard
/// deviation, floored at `SPREAD_MIN`. An empty pool yields 1.0 so a
/// downstream z-score degrades to a raw absolute difference.
pub fn robust_spread(pool: &[Option<f64>]) -> f64 {
    let values: Vec<f64> = pool.iter().filter_map(|v| *v).collect();
    if values.is_empty() {
        return 1.0;
    }
    let med = median(&values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - med).abs()).collect();
    let mad = median(&deviations);
    (MAD_SCALE * mad).max(SPREAD_MIN)
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
