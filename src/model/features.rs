/// The five acoustic features the deviation model tracks per recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    PauseRatio,
    PauseCount,
    MeanRmsDb,
    MaxRmsDb,
    MeanF0,
}

impl FeatureKey {
    pub const COUNT: usize = 5;

    /// Declaration order; ties in contribution ranking resolve in this order.
    pub const ALL: [FeatureKey; Self::COUNT] = [
        FeatureKey::PauseRatio,
        FeatureKey::PauseCount,
        FeatureKey::MeanRmsDb,
        FeatureKey::MaxRmsDb,
        FeatureKey::MeanF0,
    ];

    pub fn index(self) -> usize {
        match self {
            FeatureKey::PauseRatio => 0,
            FeatureKey::PauseCount => 1,
            FeatureKey::MeanRmsDb => 2,
            FeatureKey::MaxRmsDb => 3,
            FeatureKey::MeanF0 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeatureKey::PauseRatio => "pause_ratio",
            FeatureKey::PauseCount => "pause_count",
            FeatureKey::MeanRmsDb => "mean_rms_db",
            FeatureKey::MaxRmsDb => "max_rms_db",
            FeatureKey::MeanF0 => "mean_f0",
        }
    }
}

/// Which baseline a feature's target value is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSource {
    Conversational,
    Reading,
    /// Compared against both baselines, each term scaled by its baseline
    /// weight, using the reading-pool spread for both terms.
    Blended,
}

/// One row of the model's tunable parameter table.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub key: FeatureKey,
    /// Static composite weight; renormalized over the active set.
    pub weight: f64,
    /// Floor applied to the robust spread before the z-score, if any.
    pub spread_floor: Option<f64>,
    pub source: BaselineSource,
    pub reason: &'static str,
}

/// The model's tunables in one place: weights, spread floors, baseline
/// sources and reason texts, in declaration order.
pub const FEATURES: [FeatureSpec; FeatureKey::COUNT] = [
    FeatureSpec {
        key: FeatureKey::PauseRatio,
        weight: 0.26,
        spread_floor: None,
        source: BaselineSource::Conversational,
        reason: "More/longer pauses vs conversational baseline",
    },
    FeatureSpec {
        key: FeatureKey::PauseCount,
        weight: 0.18,
        spread_floor: Some(1.0),
        source: BaselineSource::Conversational,
        reason: "More pause events vs conversational baseline",
    },
    FeatureSpec {
        key: FeatureKey::MeanRmsDb,
        weight: 0.20,
        spread_floor: None,
        source: BaselineSource::Blended,
        reason: "Loudness shift vs baseline",
    },
    FeatureSpec {
        key: FeatureKey::MaxRmsDb,
        weight: 0.16,
        spread_floor: Some(1.5),
        source: BaselineSource::Conversational,
        reason: "Peaks louder than baseline",
    },
    FeatureSpec {
        key: FeatureKey::MeanF0,
        weight: 0.20,
        spread_floor: Some(5.0),
        source: BaselineSource::Reading,
        reason: "Pitch higher/lower vs reading baseline",
    },
];

/// A z-score of this magnitude or more saturates a feature's contribution.
pub const Z_NORM_MAX: f64 = 3.0;

pub fn spec_for(key: FeatureKey) -> &'static FeatureSpec {
    &FEATURES[key.index()]
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
