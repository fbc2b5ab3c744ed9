use serde::Serialize;

use crate::game::{Leaderboard, LeaderboardEntry};
use crate::model::scores::ScoreResult;

use super::ScoreReportContext;

#[derive(Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

/// Envelope of `bluff_score.json`. Field names are the aggregator
/// contract; renaming any of them breaks downstream consumers.
#[derive(Serialize)]
struct ScoreEnvelope<'a> {
    session_id: &'a str,
    method: &'static str,
    roles: Vec<&'static str>,
    #[serde(flatten)]
    result: &'a ScoreResult,
    verdict: &'static str,
    tool_meta: ToolMeta<'a>,
}

pub fn render_score_json(ctx: &ScoreReportContext) -> serde_json::Result<String> {
    let envelope = ScoreEnvelope {
        session_id: &ctx.session_id,
        method: ctx.method.name(),
        roles: ctx.roles_present.iter().map(|r| r.name()).collect(),
        result: &ctx.result,
        verdict: ctx.verdict.label(),
        tool_meta: ToolMeta {
            name: &ctx.tool_name,
            version: &ctx.tool_version,
        },
    };
    serde_json::to_string_pretty(&envelope)
}

#[derive(Serialize)]
struct LeaderboardEnvelope<'a> {
    entries: &'a [LeaderboardEntry],
    count: usize,
}

pub fn render_leaderboard_json(board: &Leaderboard) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LeaderboardEnvelope {
        entries: board.entries(),
        count: board.len(),
    })
}
