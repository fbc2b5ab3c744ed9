use std::io;
use std::path::Path;

use tracing::info;

use crate::game::Leaderboard;
use crate::input::Role;
use crate::model::scores::ScoreResult;
use crate::model::verdict::Verdict;
use crate::scoring::ScoringMethod;

pub mod json;
pub mod text;

pub const SCORE_JSON_FILE: &str = "bluff_score.json";
pub const SCORE_TEXT_FILE: &str = "report.txt";
pub const LEADERBOARD_JSON_FILE: &str = "leaderboard.json";
pub const LEADERBOARD_TEXT_FILE: &str = "leaderboard.txt";

/// Everything the score reports need about one judged session.
#[derive(Debug, Clone)]
pub struct ScoreReportContext {
    pub session_id: String,
    pub method: ScoringMethod,
    pub roles_present: Vec<Role>,
    pub result: ScoreResult,
    pub verdict: Verdict,
    pub tool_name: String,
    pub tool_version: String,
}

/// Writes both score artifacts for one session into `out_dir`.
pub fn write_score_report(ctx: &ScoreReportContext, out_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    write_text(&out_dir.join(SCORE_JSON_FILE), &json::render_score_json(ctx)?)?;
    write_text(&out_dir.join(SCORE_TEXT_FILE), &text::render_score_text(ctx))?;
    info!("wrote score report for {} to {}", ctx.session_id, out_dir.display());
    Ok(())
}

/// Writes both leaderboard artifacts into `out_dir`.
pub fn write_leaderboard_report(board: &Leaderboard, out_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    write_text(
        &out_dir.join(LEADERBOARD_JSON_FILE),
        &json::render_leaderboard_json(board)?,
    )?;
    write_text(
        &out_dir.join(LEADERBOARD_TEXT_FILE),
        &text::render_leaderboard_text(board),
    )?;
    info!(
        "wrote leaderboard ({} entries) to {}",
        board.len(),
        out_dir.display()
    );
    Ok(())
}

fn write_text(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}
