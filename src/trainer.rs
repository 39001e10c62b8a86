//! Session lifecycle: create, resume, run, pause and complete.
//!
//! The `TrainingSession` owned by a `Trainer` is the single source of truth.
//! Resuming rebuilds a trainer from the stored record; pausing and finishing
//! write the record back. Nothing is persisted between those points.

use chrono::Local;
use std::io::Write;

use crate::catalog::{Challenge, Exercise};
use crate::config::TrainerConfig;
use crate::error::{Result, TutorError};
use crate::progress::ProgressTracker;
use crate::runtime::LineSource;
use crate::scoring::compute_score;
use crate::session::{SessionStatus, TrainingSession};
use crate::stats::SessionSummary;
use crate::store::SessionStore;
use crate::ui::Ui;

/// How a call to [`Trainer::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Paused,
}

/// Positive feedback after a correct submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Praise {
    FirstTry,
    Quick,
    Persistent,
}

impl Praise {
    pub fn for_counts(attempts: u32, hints_used: usize) -> Self {
        if attempts == 1 && hints_used == 0 {
            Praise::FirstTry
        } else if attempts <= 2 {
            Praise::Quick
        } else {
            Praise::Persistent
        }
    }
}

/// Corrective feedback after a wrong submission, keyed by attempt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    Gentle,
    SuggestHint,
    BreakDown,
}

impl Correction {
    pub fn for_attempt(attempts: u32) -> Self {
        match attempts {
            0 | 1 => Correction::Gentle,
            2 => Correction::SuggestHint,
            _ => Correction::BreakDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    Hint,
    Skip,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" => Some(Command::Quit),
            "help" => Some(Command::Help),
            "hint" => Some(Command::Hint),
            "skip" => Some(Command::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChallengeOutcome {
    /// Solved, skipped or out of attempts. The exercise moves on either way.
    Handled,
    Quit,
}

#[derive(Debug)]
pub struct Trainer<'a, S: SessionStore> {
    session: TrainingSession,
    exercises: &'a [Exercise],
    store: &'a S,
}

impl<'a, S: SessionStore> Trainer<'a, S> {
    /// Starts a fresh session and persists it before returning.
    pub fn start(
        user_id: &str,
        config: TrainerConfig,
        exercises: &'a [Exercise],
        store: &'a S,
    ) -> Result<Self> {
        let mut session = TrainingSession::new(user_id, config, exercises, Local::now());
        store.save(&mut session)?;
        tracing::info!(session_id = %session.session_id, user_id, "session started");
        Ok(Self::from_session(session, exercises, store))
    }

    /// Reactivates a paused session. The stored record is left untouched
    /// unless the session was actually paused.
    pub fn resume(session_id: &str, exercises: &'a [Exercise], store: &'a S) -> Result<Self> {
        let mut session = store.load(session_id)?;
        if session.status != SessionStatus::Paused {
            return Err(TutorError::InvalidState {
                session_id: session_id.to_string(),
                status: session.status,
            });
        }
        session.activate();
        store.save(&mut session)?;
        tracing::info!(session_id, index = session.current_index, "session resumed");
        Ok(Self::from_session(session, exercises, store))
    }

    pub fn from_session(session: TrainingSession, exercises: &'a [Exercise], store: &'a S) -> Self {
        if session.progress.len() != exercises.len() {
            tracing::warn!(
                session_id = %session.session_id,
                progress = session.progress.len(),
                exercises = exercises.len(),
                "progress list does not match the catalog"
            );
        }
        Self {
            session,
            exercises,
            store,
        }
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn into_session(self) -> TrainingSession {
        self.session
    }

    fn tracker(&mut self) -> ProgressTracker<'_> {
        ProgressTracker::new(&mut self.session.progress, self.session.current_index)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&mut self.session)
    }

    pub fn pause(&mut self) -> Result<()> {
        self.session.pause(Local::now());
        self.save()?;
        tracing::info!(
            session_id = %self.session.session_id,
            index = self.session.current_index,
            "session paused"
        );
        Ok(())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_session(&self.session, self.exercises, Local::now())
    }

    /// Drives the learner through the remaining exercises until the catalog
    /// is finished or the learner quits.
    pub fn run<L, W>(&mut self, input: &mut L, ui: &mut Ui<W>) -> Result<RunOutcome>
    where
        L: LineSource,
        W: Write,
    {
        if self.session.status != SessionStatus::Active {
            return Err(TutorError::InvalidState {
                session_id: self.session.session_id.clone(),
                status: self.session.status,
            });
        }

        let exercises = self.exercises;
        ui.welcome(&self.session.config)?;

        while self.session.current_index < exercises.len() {
            let index = self.session.current_index;
            let exercise = &exercises[index];
            self.tracker().start_exercise(exercise.id, Local::now());
            tracing::debug!(exercise = exercise.id, index, "exercise started");

            ui.exercise_intro(exercise, index + 1, exercises.len())?;
            ui.examples(exercise)?;
            ui.ready_prompt()?;
            let ready = input.next_line()?;
            let ready_quit = match ready {
                None => true,
                Some(line) => Command::parse(&line) == Some(Command::Quit),
            };

            if ready_quit || self.run_challenges(exercise, input, ui)? == ChallengeOutcome::Quit {
                return self.stop(ui);
            }

            self.complete_exercise(exercise);
            if let Some(progress) = self.session.progress.get(index) {
                ui.exercise_completed(exercise, progress)?;
            }
            self.session.current_index += 1;
        }

        self.session.complete();
        self.save()?;
        tracing::info!(session_id = %self.session.session_id, "session completed");
        ui.summary(&self.summary(), true)?;
        Ok(RunOutcome::Completed)
    }

    fn stop<W: Write>(&mut self, ui: &mut Ui<W>) -> Result<RunOutcome> {
        self.pause()?;
        ui.paused(&self.session)?;
        ui.summary(&self.summary(), false)?;
        Ok(RunOutcome::Paused)
    }

    fn complete_exercise(&mut self, exercise: &Exercise) {
        let config = self.session.config.clone();
        self.tracker()
            .complete_exercise(Local::now(), |progress| compute_score(progress, exercise, &config));
    }

    fn run_challenges<L, W>(
        &mut self,
        exercise: &Exercise,
        input: &mut L,
        ui: &mut Ui<W>,
    ) -> Result<ChallengeOutcome>
    where
        L: LineSource,
        W: Write,
    {
        let total = exercise.challenges.len();
        for (i, challenge) in exercise.challenges.iter().enumerate() {
            ui.challenge_intro(i, total, challenge)?;
            if self.run_single_challenge(challenge, input, ui)? == ChallengeOutcome::Quit {
                return Ok(ChallengeOutcome::Quit);
            }
        }
        Ok(ChallengeOutcome::Handled)
    }

    fn run_single_challenge<L, W>(
        &mut self,
        challenge: &Challenge,
        input: &mut L,
        ui: &mut Ui<W>,
    ) -> Result<ChallengeOutcome>
    where
        L: LineSource,
        W: Write,
    {
        // A hand-edited record may carry 0; every challenge gets at least one try.
        let max_attempts = self.session.config.max_attempts.max(1);
        let show_hints = self.session.config.show_hints;
        let mut attempts = 0;
        let mut hints_shown = 0;

        while attempts < max_attempts {
            ui.prompt()?;
            let Some(line) = input.next_line()? else {
                return Ok(ChallengeOutcome::Quit);
            };
            match Command::parse(&line) {
                Some(Command::Quit) => return Ok(ChallengeOutcome::Quit),
                Some(Command::Help) => ui.help()?,
                Some(Command::Hint) if !show_hints => ui.hints_disabled()?,
                Some(Command::Hint) => match challenge.hints.get(hints_shown) {
                    Some(hint) => {
                        hints_shown += 1;
                        self.tracker().record_hint();
                        ui.hint(hint)?;
                    }
                    None => ui.hints_exhausted(challenge.solution)?,
                },
                Some(Command::Skip) => {
                    ui.skipped(challenge.solution)?;
                    return Ok(ChallengeOutcome::Handled);
                }
                None => {
                    attempts += 1;
                    self.tracker().record_attempt();
                    if challenge.validate(&line) {
                        ui.praise(Praise::for_counts(attempts, hints_shown))?;
                        return Ok(ChallengeOutcome::Handled);
                    }
                    ui.correction(Correction::for_attempt(attempts))?;
                }
            }
        }

        ui.attempts_exhausted(challenge.solution)?;
        Ok(ChallengeOutcome::Handled)
    }
}

/// Paused sessions for `user_id`, oldest first.
pub fn paused_sessions<S: SessionStore>(store: &S, user_id: &str) -> Result<Vec<TrainingSession>> {
    Ok(store
        .list(user_id)?
        .into_iter()
        .filter(|s| s.status == SessionStatus::Paused)
        .collect())
}
