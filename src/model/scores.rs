use serde::Serialize;

use crate::model::features::FeatureKey;

/// Per-feature contribution values in declaration order. Absent means the
/// feature was not active for this scoring call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ContributionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_rms_db: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rms_db: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_f0: Option<f64>,
}

impl ContributionSet {
    pub fn get(&self, key: FeatureKey) -> Option<f64> {
        match key {
            FeatureKey::PauseRatio => self.pause_ratio,
            FeatureKey::PauseCount => self.pause_count,
            FeatureKey::MeanRmsDb => self.mean_rms_db,
            FeatureKey::MaxRmsDb => self.max_rms_db,
            FeatureKey::MeanF0 => self.mean_f0,
        }
    }

    pub fn set(&mut self, key: FeatureKey, value: f64) {
        let slot = match key {
            FeatureKey::PauseRatio => &mut self.pause_ratio,
            FeatureKey::PauseCount => &mut self.pause_count,
            FeatureKey::MeanRmsDb => &mut self.mean_rms_db,
            FeatureKey::MaxRmsDb => &mut self.max_rms_db,
            FeatureKey::MeanF0 => &mut self.mean_f0,
        };
        *slot = Some(value);
    }

    /// Features with a finite contribution, in declaration order.
    pub fn active(&self) -> Vec<(FeatureKey, f64)> {
        FeatureKey::ALL
            .iter()
            .filter_map(|&key| self.get(key).filter(|v| v.is_finite()).map(|v| (key, v)))
            .collect()
    }

    pub fn rounded3(&self) -> Self {
        let mut out = ContributionSet::default();
        for (key, value) in self.active() {
            out.set(key, round_dp(value, 3));
        }
        out
    }
}

/// Auditability payload attached to every score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreDetail {
    Baseline {
        conv_weight: f64,
        read_weight: f64,
        contributions: ContributionSet,
    },
    Method {
        method: &'static str,
    },
    Empty {},
}

/// Final scoring output: bounded composite score, confidence and the top
/// explanatory reasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// 0-100, one decimal.
    pub score: f64,
    /// 0.3-0.95, two decimals.
    pub confidence: f64,
    /// At most two fixed reason texts.
    pub reasons: Vec<&'static str>,
    pub detail: ScoreDetail,
}

impl ScoreResult {
    /// Degenerate result when no feature is active: clearly flagged, never
    /// an error.
    pub fn insufficient_data() -> Self {
        ScoreResult {
            score: 0.0,
            confidence: 0.3,
            reasons: vec!["insufficient data"],
            detail: ScoreDetail::Empty {},
        }
    }
}

pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
