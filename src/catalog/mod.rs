//! Built-in course content.
//!
//! The catalog is read-only once built: the trainer borrows exercises from it
//! and never writes back. Each exercise lives in its own submodule so content
//! edits stay local.

mod collections;
mod functions;
mod structs;
mod types;
mod variables;

use serde::{Deserialize, Serialize};

/// Decides whether submitted text satisfies a challenge.
pub type Validator = fn(&str) -> bool;

/// Pedagogical difficulty tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ExerciseType {
    /// Understanding a concept
    Concept,
    /// Applying it to a small problem
    Application,
    /// Combining several concepts
    Synthesis,
}

/// A worked example shown before the challenges.
#[derive(Debug, Clone)]
pub struct Example {
    pub title: &'static str,
    pub code: &'static str,
    pub explanation: &'static str,
    pub output: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Challenge {
    pub description: &'static str,
    pub template: &'static str,
    pub solution: &'static str,
    pub hints: &'static [&'static str],
    pub validator: Validator,
}

/// Strips all whitespace so validators can match code shape regardless of formatting.
pub(crate) fn compact(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

impl Challenge {
    pub fn validate(&self, submission: &str) -> bool {
        (self.validator)(submission)
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cognitive_level: CognitiveLevel,
    pub exercise_type: ExerciseType,
    pub prerequisites: &'static [&'static str],
    pub learning_goals: &'static [&'static str],
    pub examples: Vec<Example>,
    pub challenges: Vec<Challenge>,
    /// Minutes
    pub estimated_time: u32,
}

/// Ordered registry of exercises.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// The Rust course in learning order.
    pub fn builtin() -> Self {
        Self::new(vec![
            variables::exercise(),
            types::exercise(),
            collections::exercise(),
            functions::exercise(),
            structs::exercise(),
        ])
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Exercises whose prerequisites are all in `completed`, in catalog order.
    pub fn available_after(&self, completed: &[&str]) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.prerequisites.iter().all(|p| completed.contains(p)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_pedagogical() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.exercises().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec!["variables", "basic-types", "collections", "functions", "structs"]
        );
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("functions").map(|e| e.title), Some("Functions"));
        assert!(catalog.get("closures").is_none());
    }

    #[test]
    fn every_solution_passes_its_validator() {
        for exercise in Catalog::builtin().exercises() {
            assert!(!exercise.challenges.is_empty(), "{} has no challenges", exercise.id);
            for (i, challenge) in exercise.challenges.iter().enumerate() {
                assert!(
                    challenge.validate(challenge.solution),
                    "{} challenge {} rejects its own solution",
                    exercise.id,
                    i + 1
                );
            }
        }
    }

    #[test]
    fn templates_do_not_pass_validators() {
        for exercise in Catalog::builtin().exercises() {
            for challenge in &exercise.challenges {
                assert!(!challenge.validate(""), "{} accepts empty input", exercise.id);
            }
        }
    }

    #[test]
    fn prerequisites_refer_to_earlier_exercises() {
        let catalog = Catalog::builtin();
        for (i, exercise) in catalog.exercises().iter().enumerate() {
            for prereq in exercise.prerequisites {
                let pos = catalog.exercises().iter().position(|e| e.id == *prereq);
                assert!(matches!(pos, Some(p) if p < i), "{} -> {}", exercise.id, prereq);
            }
        }
    }

    #[test]
    fn available_after_filters_by_prerequisites() {
        let catalog = Catalog::builtin();

        let fresh: Vec<&str> = catalog.available_after(&[]).iter().map(|e| e.id).collect();
        assert_eq!(fresh, vec!["variables"]);

        let after_basics: Vec<&str> = catalog
            .available_after(&["variables", "basic-types"])
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(after_basics, vec!["variables", "basic-types", "collections"]);
    }

    #[test]
    fn cognitive_levels_are_ordered() {
        assert!(CognitiveLevel::Beginner < CognitiveLevel::Intermediate);
        assert!(CognitiveLevel::Intermediate < CognitiveLevel::Advanced);
    }
}
