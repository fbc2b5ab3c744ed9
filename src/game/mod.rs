pub mod leaderboard;
pub mod prompts;
pub mod store;

pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use prompts::{PromptKind, RECORDING_PROMPTS, RecordingPrompt};
pub use store::{MemoryStore, SessionState, SessionStore, StoreError};
