//! Exercise scoring.
//!
//! A finished exercise starts from a 60 point floor. Efficiency relative to
//! the attempt allowance adds up to 30, hints cost 2 each (at most 10), and
//! finishing under the estimated time adds up to 10. Intermediate terms are
//! not clamped; only the final value is forced into `[0, 100]`.

use crate::catalog::Exercise;
use crate::config::TrainerConfig;
use crate::progress::LearningProgress;

const BASE_SCORE: f64 = 60.0;
const EFFICIENCY_WEIGHT: f64 = 30.0;
const HINT_COST: f64 = 2.0;
const MAX_HINT_PENALTY: f64 = 10.0;
const SPEED_WEIGHT: f64 = 10.0;

pub fn compute_score(progress: &LearningProgress, exercise: &Exercise, config: &TrainerConfig) -> f64 {
    let mut score = BASE_SCORE;

    let max_possible_attempts = exercise.challenges.len() as f64 * config.max_attempts as f64;
    if max_possible_attempts > 0.0 {
        let efficiency_ratio = 1.0 - progress.attempts as f64 / max_possible_attempts;
        score += efficiency_ratio * EFFICIENCY_WEIGHT;
    }

    score -= (progress.hints_used as f64 * HINT_COST).min(MAX_HINT_PENALTY);

    let estimated_minutes = exercise.estimated_time as f64;
    let actual_minutes = progress.time_spent.as_secs_f64() / 60.0;
    if estimated_minutes > 0.0 && actual_minutes < estimated_minutes {
        let speed_ratio = (estimated_minutes - actual_minutes) / estimated_minutes;
        score += speed_ratio * SPEED_WEIGHT;
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Challenge, CognitiveLevel, ExerciseType};
    use chrono::Local;
    use std::time::Duration;

    fn exercise(challenges: usize, estimated_time: u32) -> Exercise {
        Exercise {
            id: "scored",
            title: "Scored",
            description: "",
            cognitive_level: CognitiveLevel::Beginner,
            exercise_type: ExerciseType::Concept,
            prerequisites: &[],
            learning_goals: &[],
            examples: vec![],
            challenges: (0..challenges)
                .map(|_| Challenge {
                    description: "",
                    template: "",
                    solution: "ok",
                    hints: &[],
                    validator: |s| s == "ok",
                })
                .collect(),
            estimated_time,
        }
    }

    fn progress(attempts: u32, hints_used: u32, minutes: u64) -> LearningProgress {
        LearningProgress {
            attempts,
            hints_used,
            time_spent: Duration::from_secs(minutes * 60),
            ..LearningProgress::new("scored", Local::now())
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn first_try_fast_completion() {
        let score = compute_score(&progress(1, 0, 2), &exercise(1, 10), &TrainerConfig::default());
        // 60 + (1 - 1/3) * 30 + 0.8 * 10
        assert_close(score, 88.0);
    }

    #[test]
    fn zero_attempts_fast_completion_scores_98() {
        let score = compute_score(&progress(0, 0, 2), &exercise(1, 10), &TrainerConfig::default());
        assert_close(score, 98.0);
    }

    #[test]
    fn max_attempts_with_hints_and_slow() {
        let score = compute_score(&progress(3, 2, 12), &exercise(1, 10), &TrainerConfig::default());
        assert_close(score, 56.0);
    }

    #[test]
    fn hint_penalty_is_capped() {
        let config = TrainerConfig::default();
        let ex = exercise(1, 10);
        let five = compute_score(&progress(3, 5, 20), &ex, &config);
        let fifty = compute_score(&progress(3, 50, 20), &ex, &config);
        assert_close(five, 50.0);
        assert_close(fifty, 50.0);
    }

    #[test]
    fn efficiency_can_go_negative_before_clamping() {
        // 9 attempts against an allowance of 3: 60 + (1 - 3) * 30 = 0
        let score = compute_score(&progress(9, 0, 20), &exercise(1, 10), &TrainerConfig::default());
        assert_close(score, 0.0);

        let score = compute_score(&progress(6, 0, 20), &exercise(1, 10), &TrainerConfig::default());
        assert_close(score, 30.0);
    }

    #[test]
    fn no_challenges_skips_efficiency() {
        let score = compute_score(&progress(4, 0, 20), &exercise(0, 10), &TrainerConfig::default());
        assert_close(score, 60.0);
    }

    #[test]
    fn zero_estimate_skips_speed_bonus() {
        let score = compute_score(&progress(0, 0, 0), &exercise(1, 0), &TrainerConfig::default());
        assert_close(score, 90.0);
    }

    #[test]
    fn zero_max_attempts_skips_efficiency() {
        let config = TrainerConfig {
            max_attempts: 0,
            ..TrainerConfig::default()
        };
        let score = compute_score(&progress(2, 0, 20), &exercise(2, 10), &config);
        assert_close(score, 60.0);
    }

    #[test]
    fn always_within_bounds() {
        let config = TrainerConfig::default();
        for challenges in [0, 1, 3] {
            for estimate in [0, 1, 10] {
                let ex = exercise(challenges, estimate);
                for attempts in [0, 1, 3, 100, 10_000] {
                    for hints in [0, 1, 100] {
                        for minutes in [0, 5, 1_000] {
                            let s = compute_score(&progress(attempts, hints, minutes), &ex, &config);
                            assert!((0.0..=100.0).contains(&s), "score {s} out of range");
                        }
                    }
                }
            }
        }
    }
}
