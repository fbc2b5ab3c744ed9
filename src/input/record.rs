use serde::{Deserialize, Serialize};

use crate::model::features::FeatureKey;

/// Loudness sentinel written by the feature extractor when the speech
/// segment was too short to analyze.
pub const LOUDNESS_SENTINEL_DB: f64 = -120.0;

/// Per-recording acoustic summary produced by the external feature
/// extractor. A key missing from the JSON means "could not be computed";
/// `mean_f0` is exactly 0.0 when no voiced frames were found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Total recording length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
    /// Detected non-silent duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_dur_s: Option<f64>,
    /// Silence-to-speech ratio; unbounded above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_ratio: Option<f64>,
    /// Number of silence gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_count: Option<f64>,
    /// Mean voiced pitch in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_f0: Option<f64>,
    /// Mean loudness in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_rms_db: Option<f64>,
    /// Peak loudness in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rms_db: Option<f64>,
}

impl FeatureRecord {
    /// Single point of absence handling for the scored features: missing
    /// and non-finite values both come back as `None`, so "absent" and
    /// "zero" can never be conflated downstream.
    pub fn get(&self, key: FeatureKey) -> Option<f64> {
        let value = match key {
            FeatureKey::PauseRatio => self.pause_ratio,
            FeatureKey::PauseCount => self.pause_count,
            FeatureKey::MeanRmsDb => self.mean_rms_db,
            FeatureKey::MaxRmsDb => self.max_rms_db,
            FeatureKey::MeanF0 => self.mean_f0,
        };
        value.filter(|v| v.is_finite())
    }
}
