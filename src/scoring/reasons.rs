use crate::model::features::spec_for;
use crate::model::scores::ContributionSet;

/// Reason texts for the top contributors, largest first. Stable sort, so
/// equal contributions keep feature declaration order. At most two.
pub fn rank_reasons(contributions: &ContributionSet) -> Vec<&'static str> {
    let mut active = contributions.active();
    active.sort_by(|a, b| b.1.total_cmp(&a.1));
    active
        .into_iter()
        .take(2)
        .map(|(key, _)| spec_for(key).reason)
        .collect()
}
