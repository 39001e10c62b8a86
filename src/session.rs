use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Exercise;
use crate::config::TrainerConfig;
use crate::progress::LearningProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
    /// Only set by an explicit administrative action.
    Abandoned,
}

/// One learner's run through the catalog. This record is the source of
/// truth; a running trainer is a view over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingSession {
    pub user_id: String,
    pub session_id: String,
    pub config: TrainerConfig,
    /// Index-aligned with the exercise list the session was created from.
    pub progress: Vec<LearningProgress>,
    pub current_index: usize,
    pub start_time: DateTime<Local>,
    pub last_activity: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<DateTime<Local>>,
    pub status: SessionStatus,
}

impl TrainingSession {
    pub fn new(
        user_id: impl Into<String>,
        config: TrainerConfig,
        exercises: &[Exercise],
        now: DateTime<Local>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: new_session_id(now),
            config,
            progress: exercises
                .iter()
                .map(|e| LearningProgress::new(e.id, now))
                .collect(),
            current_index: 0,
            start_time: now,
            last_activity: now,
            paused_at: None,
            status: SessionStatus::Active,
        }
    }

    pub fn pause(&mut self, now: DateTime<Local>) {
        self.status = SessionStatus::Paused;
        self.paused_at = Some(now);
    }

    pub fn activate(&mut self) {
        self.status = SessionStatus::Active;
        self.paused_at = None;
    }

    pub fn complete(&mut self) {
        self.status = SessionStatus::Completed;
        self.paused_at = None;
    }

    pub fn abandon(&mut self) {
        self.status = SessionStatus::Abandoned;
        self.paused_at = None;
    }

    pub fn completed_count(&self) -> usize {
        self.progress.iter().filter(|p| p.is_completed()).count()
    }
}

/// `<local timestamp>-<8 hex chars>`
pub fn new_session_id(now: DateTime<Local>) -> String {
    let suffix: u32 = rand::thread_rng().gen();
    format!("{}-{:08x}", now.format("%Y%m%d-%H%M%S"), suffix)
}
