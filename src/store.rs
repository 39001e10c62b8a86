use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TutorError};
use crate::session::TrainingSession;

/// Durable session persistence keyed by session id.
pub trait SessionStore: std::fmt::Debug {
    /// Stamps `last_activity` and replaces any record with the same id.
    fn save(&self, session: &mut TrainingSession) -> Result<()>;
    fn load(&self, session_id: &str) -> Result<TrainingSession>;
    /// Every readable record owned by `user_id`. Corrupted records are skipped.
    fn list(&self, user_id: &str) -> Result<Vec<TrainingSession>>;
    /// Deleting a missing record succeeds.
    fn delete(&self, session_id: &str) -> Result<()>;
}

/// One pretty-printed JSON file per session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `None` for ids that could name a file outside `base`.
    fn path_for(&self, session_id: &str) -> Option<PathBuf> {
        let unsafe_id = session_id.is_empty()
            || session_id.contains(['/', '\\'])
            || session_id.contains("..");
        if unsafe_id {
            tracing::warn!(session_id, "rejecting session id outside the sessions directory");
            return None;
        }
        Some(self.base.join(format!("{session_id}.json")))
    }

    fn ensure_base(&self) -> Result<()> {
        fs::create_dir_all(&self.base).map_err(|e| {
            TutorError::storage(format!("failed to create {}", self.base.display()), e)
        })
    }

    fn read_path(&self, path: &Path) -> Result<TrainingSession> {
        let bytes = fs::read(path)
            .map_err(|e| TutorError::storage(format!("failed to read {}", path.display()), e))?;
        serde_json::from_slice(&bytes).map_err(|source| TutorError::CorruptRecord {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &mut TrainingSession) -> Result<()> {
        self.ensure_base()?;
        session.last_activity = Local::now();

        let data = serde_json::to_vec_pretty(session).map_err(TutorError::Encode)?;
        let path = self.path_for(&session.session_id).ok_or_else(|| {
            TutorError::storage(
                format!("invalid session id {:?}", session.session_id),
                std::io::Error::from(ErrorKind::InvalidInput),
            )
        })?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, data)
            .map_err(|e| TutorError::storage(format!("failed to write {}", tmp.display()), e))?;
        fs::rename(&tmp, &path)
            .map_err(|e| TutorError::storage(format!("failed to replace {}", path.display()), e))?;

        tracing::debug!(session_id = %session.session_id, status = %session.status, "session saved");
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<TrainingSession> {
        let path = match self.path_for(session_id) {
            Some(path) if path.is_file() => path,
            _ => {
                return Err(TutorError::NotFound {
                    session_id: session_id.to_string(),
                })
            }
        };
        let session = self.read_path(&path)?;
        tracing::debug!(session_id, "session loaded");
        Ok(session)
    }

    fn list(&self, user_id: &str) -> Result<Vec<TrainingSession>> {
        self.ensure_base()?;
        let entries = fs::read_dir(&self.base).map_err(|e| {
            TutorError::storage(format!("failed to read {}", self.base.display()), e)
        })?;

        let mut sessions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                TutorError::storage(format!("failed to read {}", self.base.display()), e)
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.read_path(&path) {
                Ok(session) if session.user_id == user_id => sessions.push(session),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable session record");
                }
            }
        }

        sessions.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.session_id.cmp(&b.session_id))
        });
        Ok(sessions)
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let Some(path) = self.path_for(session_id) else {
            return Ok(());
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(session_id, "session deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TutorError::storage(
                format!("failed to delete {}", path.display()),
                e,
            )),
        }
    }
}
