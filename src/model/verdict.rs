/// Qualitative band for a 0-100 bluff score, used by the text report.
/// The score remains the contract value; bands only aid presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Consistent,
    Mild,
    Elevated,
    Strong,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            Verdict::Consistent
        } else if score < 50.0 {
            Verdict::Mild
        } else if score < 75.0 {
            Verdict::Elevated
        } else {
            Verdict::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Consistent => "consistent_with_baselines",
            Verdict::Mild => "mild_deviation",
            Verdict::Elevated => "elevated_deviation",
            Verdict::Strong => "strong_deviation",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Verdict::Consistent => {
                "Speech patterns track the speaker's own baselines; no notable acoustic deviation."
            }
            Verdict::Mild => {
                "Some acoustic deviation from the speaker's baselines; within ordinary variation."
            }
            Verdict::Elevated => {
                "Clear acoustic deviation from the speaker's baselines on several features."
            }
            Verdict::Strong => {
                "Strong acoustic deviation from the speaker's baselines across the weighted features."
            }
        }
    }
}
