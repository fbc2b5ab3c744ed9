use crate::game::Leaderboard;
use crate::model::scores::ScoreDetail;
use crate::scoring::ScoringMethod;

use super::ScoreReportContext;

pub fn render_score_text(ctx: &ScoreReportContext) -> String {
    let mut out = String::new();

    out.push_str("Bluff Judge Report\n");
    out.push_str("==================\n\n");

    out.push_str("1. Session\n");
    out.push_str(&format!("Session: {}\n", ctx.session_id));
    out.push_str(&format!(
        "Roles recorded: {}\n",
        ctx.roles_present
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("Scoring method: {}\n\n", method_label(ctx.method)));

    out.push_str("2. Verdict\n");
    out.push_str(&format!("Bluff score: {:.1} / 100\n", ctx.result.score));
    out.push_str(&format!("Confidence: {:.2}\n", ctx.result.confidence));
    out.push_str(&format!("Band: {}\n", ctx.verdict.label()));
    out.push_str(&format!("{}\n\n", ctx.verdict.statement()));

    out.push_str("3. Reasons\n");
    for reason in &ctx.result.reasons {
        out.push_str(&format!("- {reason}\n"));
    }
    out.push('\n');

    if let ScoreDetail::Baseline {
        conv_weight,
        read_weight,
        contributions,
    } = &ctx.result.detail
    {
        out.push_str("4. Feature contributions\n");
        out.push_str(&format!(
            "Baseline blend: conversational {:.2}, reading {:.2}\n",
            conv_weight, read_weight
        ));
        for (key, value) in contributions.active() {
            out.push_str(&format!("{}: {:.3}\n", key.name(), value));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Generated by {} {}\n",
        ctx.tool_name, ctx.tool_version
    ));

    out
}

pub fn render_leaderboard_text(board: &Leaderboard) -> String {
    let mut out = String::new();

    out.push_str("Bluff Judge Leaderboard\n");
    out.push_str("=======================\n\n");

    if board.is_empty() {
        out.push_str("No finished sessions yet.\n");
        return out;
    }

    for (i, entry) in board.entries().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}  {:.1}  ({})\n",
            i + 1,
            entry.name,
            entry.score,
            entry.session_id
        ));
    }

    out
}

fn method_label(method: ScoringMethod) -> &'static str {
    match method {
        ScoringMethod::Baseline => "per-speaker baselines",
        ScoringMethod::SimpleThreshold => "threshold fallback (target only)",
    }
}
