use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::input::{FeatureRecord, Role};
use crate::model::scores::ScoreResult;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session already exists: {0}")]
    Duplicate(String),
    #[error("unknown session: {0}")]
    Unknown(String),
}

/// One player's in-progress or finished session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub player: String,
    pub started_at: DateTime<Utc>,
    pub records: BTreeMap<Role, FeatureRecord>,
    pub result: Option<ScoreResult>,
}

impl SessionState {
    pub fn new(player: impl Into<String>) -> Self {
        SessionState {
            player: player.into(),
            started_at: Utc::now(),
            records: BTreeMap::new(),
            result: None,
        }
    }

    /// All five role recordings are in.
    pub fn is_complete(&self) -> bool {
        Role::ALL.iter().all(|role| self.records.contains_key(role))
    }
}

/// Session persistence seam. Scoring never cares where sessions live.
pub trait SessionStore {
    fn create(&mut self, session_id: &str, player: &str) -> Result<(), StoreError>;
    fn read(&self, session_id: &str) -> Result<&SessionState, StoreError>;
    fn add_record(
        &mut self,
        session_id: &str,
        role: Role,
        record: FeatureRecord,
    ) -> Result<(), StoreError>;
    fn set_result(&mut self, session_id: &str, result: ScoreResult) -> Result<(), StoreError>;
}

/// In-memory store; sessions are keyed by caller-chosen id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: BTreeMap<String, SessionState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn create(&mut self, session_id: &str, player: &str) -> Result<(), StoreError> {
        if self.sessions.contains_key(session_id) {
            return Err(StoreError::Duplicate(session_id.to_string()));
        }
        debug!("created session {session_id} for {player}");
        self.sessions
            .insert(session_id.to_string(), SessionState::new(player));
        Ok(())
    }

    fn read(&self, session_id: &str) -> Result<&SessionState, StoreError> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| StoreError::Unknown(session_id.to_string()))
    }

    fn add_record(
        &mut self,
        session_id: &str,
        role: Role,
        record: FeatureRecord,
    ) -> Result<(), StoreError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::Unknown(session_id.to_string()))?;
        session.records.insert(role, record);
        Ok(())
    }

    fn set_result(&mut self, session_id: &str, result: ScoreResult) -> Result<(), StoreError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| StoreError::Unknown(session_id.to_string()))?;
        session.result = Some(result);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/game/store.rs"]
mod tests;
