use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionStatus;

/// Errors surfaced by the session store and the training lifecycle.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("session {session_id} cannot be resumed while {status}")]
    InvalidState {
        session_id: String,
        status: SessionStatus,
    },

    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupted session record {}: {source}", path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TutorError {
    pub(crate) fn storage(context: impl Into<String>, source: std::io::Error) -> Self {
        TutorError::Storage {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TutorError>;
