use crate::input::FeatureRecord;
use crate::model::baseline::SPREAD_MIN;
use crate::model::features::{BaselineSource, FEATURES, FeatureKey, FeatureSpec, Z_NORM_MAX, clip01};
use crate::model::scores::{ContributionSet, round_dp};

use super::baselines::Baselines;
use super::weights::BaselineWeights;

/// Normalized, weighted per-feature deviations and their composite.
#[derive(Debug, Clone, Copy)]
pub struct DeviationOutcome {
    pub contributions: ContributionSet,
    /// 0-100, one decimal; 0.0 when no feature is active.
    pub score: f64,
}

impl DeviationOutcome {
    pub fn active(&self) -> Vec<(FeatureKey, f64)> {
        self.contributions.active()
    }
}

/// Scores the target against the baselines, feature by feature, per the
/// tunable table. A feature missing its target value or its comparison
/// baseline is omitted from the active set entirely, not scored as zero.
pub fn score_deviations(
    baselines: &Baselines,
    weights: &BaselineWeights,
    target: &FeatureRecord,
) -> DeviationOutcome {
    let mut contributions = ContributionSet::default();

    for spec in &FEATURES {
        let Some(value) = target.get(spec.key) else {
            continue;
        };
        let contribution = match spec.source {
            BaselineSource::Conversational => baselines
                .conv
                .mean(spec.key)
                .map(|mean| {
                    let spread = floored_spread(baselines.conv.spread(spec.key), spec);
                    weights.conv * normalize(z_abs(value, mean, spread))
                }),
            BaselineSource::Reading => baselines
                .read
                .mean(spec.key)
                .map(|mean| {
                    let spread = floored_spread(baselines.read.spread(spec.key), spec);
                    weights.read * normalize(z_abs(value, mean, spread))
                }),
            BaselineSource::Blended => blended_contribution(value, baselines, weights, spec),
        };
        if let Some(v) = contribution {
            contributions.set(spec.key, v);
        }
    }

    DeviationOutcome {
        contributions,
        score: composite(&contributions),
    }
}

/// Loudness is judged against both baselines at once: each available term
/// is a weight-scaled z-score against that baseline's mean, but both terms
/// divide by the READING-pool spread. The asymmetry is long-standing model
/// behavior and is kept as is.
fn blended_contribution(
    value: f64,
    baselines: &Baselines,
    weights: &BaselineWeights,
    spec: &FeatureSpec,
) -> Option<f64> {
    let spread = floored_spread(baselines.read.spread(spec.key), spec);

    let mut sum = 0.0;
    let mut count = 0usize;
    if let Some(mean) = baselines.conv.mean(spec.key) {
        sum += z_abs(value, mean, spread) * weights.conv;
        count += 1;
    }
    if let Some(mean) = baselines.read.mean(spec.key) {
        sum += z_abs(value, mean, spread) * weights.read;
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some(normalize(sum / count as f64))
    }
}

fn floored_spread(spread: f64, spec: &FeatureSpec) -> f64 {
    match spec.spread_floor {
        Some(floor) => spread.max(floor),
        None => spread,
    }
}

/// Absolute z-score. A spread at or below the robust floor degrades to a
/// raw absolute difference instead of exploding.
fn z_abs(value: f64, mean: f64, spread: f64) -> f64 {
    let divisor = if spread > SPREAD_MIN { spread } else { 1.0 };
    ((value - mean) / divisor).abs()
}

fn normalize(z: f64) -> f64 {
    clip01(z / Z_NORM_MAX)
}

/// Weighted composite over the active set, weights renormalized so the
/// active weights sum to 1, clipped to [0,1] and scaled to 0-100.
fn composite(contributions: &ContributionSet) -> f64 {
    let active = contributions.active();
    if active.is_empty() {
        return 0.0;
    }
    let weight_sum: f64 = active
        .iter()
        .map(|(key, _)| crate::model::features::spec_for(*key).weight)
        .sum();
    let score01: f64 = active
        .iter()
        .map(|(key, value)| value * crate::model::features::spec_for(*key).weight / weight_sum)
        .sum();
    round_dp(100.0 * clip01(score01), 1)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/deviation.rs"]
mod tests;
