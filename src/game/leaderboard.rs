use chrono::{DateTime, Utc};
use serde::Serialize;

/// One finished session on the board.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Bluff score, 0-100; higher ranks first.
    pub score: f64,
    pub session_id: String,
    pub recorded_at: DateTime<Utc>,
}

/// Ranked results, highest score first. Insertion order breaks ties, so
/// earlier entries keep their place against equal scores.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// 1-based rank a given score would take: one past the entries that
    /// strictly beat it.
    pub fn position(&self, score: f64) -> usize {
        self.entries.iter().filter(|e| e.score > score).count() + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
