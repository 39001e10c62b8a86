use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bookkeeping for one exercise within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningProgress {
    pub exercise_id: String,
    pub start_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
    pub attempts: u32,
    /// Only meaningful once `completed_at` is set.
    pub score: f64,
    pub time_spent: Duration,
    pub hints_used: u32,
}

impl LearningProgress {
    pub fn new(exercise_id: impl Into<String>, start_time: DateTime<Local>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            start_time,
            completed_at: None,
            attempts: 0,
            score: 0.0,
            time_spent: Duration::ZERO,
            hints_used: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Mutates the progress slot under the session cursor.
///
/// Every operation is a no-op when the cursor points past the end of the
/// progress list.
pub struct ProgressTracker<'a> {
    progress: &'a mut [LearningProgress],
    index: usize,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(progress: &'a mut [LearningProgress], index: usize) -> Self {
        Self { progress, index }
    }

    pub fn current(&self) -> Option<&LearningProgress> {
        self.progress.get(self.index)
    }

    /// Resets the slot; anything recorded before in it is discarded.
    pub fn start_exercise(&mut self, exercise_id: &str, now: DateTime<Local>) {
        if let Some(slot) = self.progress.get_mut(self.index) {
            *slot = LearningProgress::new(exercise_id, now);
        }
    }

    pub fn record_attempt(&mut self) {
        if let Some(slot) = self.progress.get_mut(self.index) {
            slot.attempts += 1;
        }
    }

    pub fn record_hint(&mut self) {
        if let Some(slot) = self.progress.get_mut(self.index) {
            slot.hints_used += 1;
        }
    }

    /// Stamps completion and elapsed time, then stores the score computed
    /// from the finalized record.
    pub fn complete_exercise<F>(&mut self, now: DateTime<Local>, score: F)
    where
        F: FnOnce(&LearningProgress) -> f64,
    {
        if let Some(slot) = self.progress.get_mut(self.index) {
            slot.completed_at = Some(now);
            slot.time_spent = (now - slot.start_time).to_std().unwrap_or_default();
            let value = score(&*slot);
            slot.score = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn slots(n: usize) -> Vec<LearningProgress> {
        (0..n)
            .map(|i| LearningProgress::new(format!("ex{i}"), Local::now()))
            .collect()
    }

    #[test]
    fn start_resets_slot() {
        let mut progress = slots(2);
        progress[1].attempts = 7;
        progress[1].hints_used = 2;
        progress[1].score = 55.0;

        let now = Local::now();
        let mut tracker = ProgressTracker::new(&mut progress, 1);
        tracker.start_exercise("functions", now);

        let slot = tracker.current().unwrap();
        assert_eq!(slot.exercise_id, "functions");
        assert_eq!(slot.start_time, now);
        assert_eq!(slot.attempts, 0);
        assert_eq!(slot.hints_used, 0);
        assert_eq!(slot.score, 0.0);
        assert!(slot.completed_at.is_none());
    }

    #[test]
    fn attempts_and_hints_accumulate() {
        let mut progress = slots(1);
        let mut tracker = ProgressTracker::new(&mut progress, 0);
        tracker.record_attempt();
        tracker.record_attempt();
        tracker.record_hint();
        assert_eq!(progress[0].attempts, 2);
        assert_eq!(progress[0].hints_used, 1);
    }

    #[test]
    fn complete_sets_time_and_score() {
        let mut progress = slots(1);
        let start = Local::now();
        let end = start + ChronoDuration::minutes(4);

        let mut tracker = ProgressTracker::new(&mut progress, 0);
        tracker.start_exercise("variables", start);
        tracker.record_attempt();
        tracker.complete_exercise(end, |p| {
            assert_eq!(p.time_spent, Duration::from_secs(240));
            assert_eq!(p.completed_at, Some(end));
            88.0
        });

        assert_eq!(progress[0].score, 88.0);
        assert!(progress[0].is_completed());
    }

    #[test]
    fn out_of_bounds_cursor_is_a_no_op() {
        let mut progress = slots(1);
        let before = progress.clone();
        let mut tracker = ProgressTracker::new(&mut progress, 3);
        tracker.start_exercise("x", Local::now());
        tracker.record_attempt();
        tracker.record_hint();
        tracker.complete_exercise(Local::now(), |_| 100.0);
        assert!(tracker.current().is_none());
        assert_eq!(progress, before);
    }
}
