use chrono::{DateTime, Local};
use std::time::Duration;

use crate::catalog::Exercise;
use crate::session::TrainingSession;
use crate::util::mean;

/// Score for one finished exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseScore {
    pub title: String,
    pub score: f64,
    pub learning_goals: Vec<String>,
}

/// Learning analytics over a session's completed exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub completed: usize,
    pub total: usize,
    pub total_attempts: u32,
    pub total_hints: u32,
    pub average_attempts: Option<f64>,
    pub average_score: Option<f64>,
    pub scores: Vec<ExerciseScore>,
    pub elapsed: Duration,
}

impl SessionSummary {
    pub fn from_session(session: &TrainingSession, exercises: &[Exercise], now: DateTime<Local>) -> Self {
        let finished: Vec<_> = session
            .progress
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_completed())
            .collect();

        let attempts: Vec<f64> = finished.iter().map(|(_, p)| p.attempts as f64).collect();
        let score_values: Vec<f64> = finished.iter().map(|(_, p)| p.score).collect();

        let scores = finished
            .iter()
            .map(|(i, p)| {
                let exercise = exercises.get(*i).filter(|e| e.id == p.exercise_id);
                ExerciseScore {
                    title: exercise
                        .map(|e| e.title.to_string())
                        .unwrap_or_else(|| p.exercise_id.clone()),
                    score: p.score,
                    learning_goals: exercise
                        .map(|e| e.learning_goals.iter().map(|g| g.to_string()).collect())
                        .unwrap_or_default(),
                }
            })
            .collect();

        Self {
            completed: finished.len(),
            total: exercises.len(),
            total_attempts: finished.iter().map(|(_, p)| p.attempts).sum(),
            total_hints: finished.iter().map(|(_, p)| p.hints_used).sum(),
            average_attempts: mean(&attempts),
            average_score: mean(&score_values),
            scores,
            elapsed: (now - session.start_time).to_std().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::TrainerConfig;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn empty_session_has_no_averages() {
        let catalog = Catalog::builtin();
        let now = Local::now();
        let session = TrainingSession::new("ada", TrainerConfig::default(), catalog.exercises(), now);
        let summary = SessionSummary::from_session(&session, catalog.exercises(), now);

        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.average_attempts, None);
        assert_eq!(summary.average_score, None);
        assert!(summary.scores.is_empty());
    }

    #[test]
    fn only_completed_records_count() {
        let catalog = Catalog::builtin();
        let start = Local::now();
        let mut session = TrainingSession::new("ada", TrainerConfig::default(), catalog.exercises(), start);

        session.progress[0].completed_at = Some(start);
        session.progress[0].attempts = 3;
        session.progress[0].hints_used = 1;
        session.progress[0].score = 80.0;

        session.progress[1].completed_at = Some(start);
        session.progress[1].attempts = 5;
        session.progress[1].score = 70.0;

        // in progress, must be ignored
        session.progress[2].attempts = 9;
        session.progress[2].hints_used = 4;

        let now = start + ChronoDuration::minutes(30);
        let summary = SessionSummary::from_session(&session, catalog.exercises(), now);

        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total_attempts, 8);
        assert_eq!(summary.total_hints, 1);
        assert_eq!(summary.average_attempts, Some(4.0));
        assert_eq!(summary.average_score, Some(75.0));
        assert_eq!(summary.scores[0].title, "Variables and Bindings");
        assert_eq!(summary.scores[1].score, 70.0);
        assert_eq!(summary.scores[0].learning_goals.len(), 3);
        assert_eq!(summary.elapsed, Duration::from_secs(1800));
    }
}
