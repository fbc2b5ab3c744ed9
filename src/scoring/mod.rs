use crate::input::{FeatureRecord, InputError, Role, SessionBundle, SessionShape};
use crate::model::scores::{ScoreDetail, ScoreResult, round_dp};

pub mod baselines;
pub mod confidence;
pub mod deviation;
pub mod reasons;
pub mod simple;
pub mod weights;

use baselines::build_baselines;
use confidence::estimate_confidence;
use deviation::score_deviations;
use reasons::rank_reasons;
use weights::estimate_weights;

/// Which scoring path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    Baseline,
    SimpleThreshold,
}

impl ScoringMethod {
    pub fn name(self) -> &'static str {
        match self {
            ScoringMethod::Baseline => "baseline",
            ScoringMethod::SimpleThreshold => "simple_threshold",
        }
    }
}

/// A full session's records, role by role. Borrowed view used by the
/// baseline pipeline once the bundle shape is validated.
#[derive(Debug, Clone, Copy)]
pub struct SessionRecords<'a> {
    pub intro: &'a FeatureRecord,
    pub hobby: &'a FeatureRecord,
    pub story: &'a FeatureRecord,
    pub technical: &'a FeatureRecord,
    pub target: &'a FeatureRecord,
}

impl<'a> SessionRecords<'a> {
    fn from_bundle(bundle: &'a SessionBundle) -> Result<Self, InputError> {
        let get = |role: Role| {
            bundle
                .record(role)
                .ok_or_else(|| InputError::MissingInput(format!("missing {role} record")))
        };
        Ok(SessionRecords {
            intro: get(Role::Intro)?,
            hobby: get(Role::Hobby)?,
            story: get(Role::Story)?,
            technical: get(Role::Technical)?,
            target: get(Role::Target)?,
        })
    }
}

/// Scores a loaded session, picking the method from its shape: full
/// five-role sessions go through the baseline pipeline, a lone target
/// falls back to thresholds.
pub fn score_bundle(bundle: &SessionBundle) -> Result<(ScoringMethod, ScoreResult), InputError> {
    match bundle.shape()? {
        SessionShape::Full => {
            let records = SessionRecords::from_bundle(bundle)?;
            Ok((ScoringMethod::Baseline, score_with_baselines(&records)))
        }
        SessionShape::SingleTarget => {
            let target = bundle
                .record(Role::Target)
                .ok_or_else(|| InputError::MissingInput("missing target record".to_string()))?;
            Ok((ScoringMethod::SimpleThreshold, simple::score_single(target)))
        }
    }
}

/// The baseline pipeline: build both baselines, estimate their blend,
/// score per-feature deviations, then attach confidence and reasons.
pub fn score_with_baselines(records: &SessionRecords<'_>) -> ScoreResult {
    let baselines = build_baselines(records);
    let weights = estimate_weights(&baselines, records.target);
    let outcome = score_deviations(&baselines, &weights, records.target);

    let active = outcome.active();
    if active.is_empty() {
        return ScoreResult::insufficient_data();
    }

    ScoreResult {
        score: outcome.score,
        confidence: estimate_confidence(records.target, active.len()),
        reasons: rank_reasons(&outcome.contributions),
        detail: ScoreDetail::Baseline {
            conv_weight: round_dp(weights.conv, 2),
            read_weight: round_dp(weights.read, 2),
            contributions: outcome.contributions.rounded3(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/pipeline.rs"]
mod tests;
