use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod record;

pub use record::FeatureRecord;

/// Fixed prompt roles of a recording session. Intro and hobby are
/// conversational; story and technical are read aloud; target is the
/// judged utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Intro,
    Hobby,
    Story,
    Technical,
    Target,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Intro,
        Role::Hobby,
        Role::Story,
        Role::Technical,
        Role::Target,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Intro => "intro",
            Role::Hobby => "hobby",
            Role::Story => "story",
            Role::Technical => "technical",
            Role::Target => "target",
        }
    }

    /// Expected feature file for this role inside a session directory.
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid session shape: {0}")]
    InvalidSession(String),
}

/// Scoring strategy implied by which role files a session supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionShape {
    /// Only the target recording: threshold fallback.
    SingleTarget,
    /// All five roles: baseline method.
    Full,
}

/// Role-tagged feature records loaded from one session directory.
#[derive(Debug, Clone)]
pub struct SessionBundle {
    pub session_dir: PathBuf,
    pub records: BTreeMap<Role, FeatureRecord>,
}

impl SessionBundle {
    pub fn record(&self, role: Role) -> Option<&FeatureRecord> {
        self.records.get(&role)
    }

    /// Validates the caller precondition: exactly one target record, or
    /// exactly five records covering every role.
    pub fn shape(&self) -> Result<SessionShape, InputError> {
        if self.records.len() == 1 && self.records.contains_key(&Role::Target) {
            return Ok(SessionShape::SingleTarget);
        }
        if self.records.len() == Role::ALL.len() {
            return Ok(SessionShape::Full);
        }
        let present: Vec<&str> = self.records.keys().map(|r| r.name()).collect();
        Err(InputError::InvalidSession(format!(
            "expected target only or all five roles, found [{}] in {}",
            present.join(", "),
            self.session_dir.display()
        )))
    }
}

/// Loads every `<role>.json` present in a session directory.
pub fn load_session(session_dir: &Path) -> Result<SessionBundle, InputError> {
    let mut records = BTreeMap::new();
    for role in Role::ALL {
        let path = session_dir.join(role.file_name());
        if path.exists() {
            records.insert(role, load_record(&path)?);
        }
    }

    if records.is_empty() {
        return Err(InputError::MissingInput(format!(
            "no <role>.json feature files in {}",
            session_dir.display()
        )));
    }

    info!(
        "loaded session {}: roles [{}]",
        session_dir.display(),
        records
            .keys()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(SessionBundle {
        session_dir: session_dir.to_path_buf(),
        records,
    })
}

pub fn load_record(path: &Path) -> Result<FeatureRecord, InputError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/session.rs"]
mod tests;
