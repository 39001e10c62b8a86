use crossterm::style::{style, Color, Stylize};
use itertools::Itertools;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::{Challenge, Exercise};
use crate::config::TrainerConfig;
use crate::progress::LearningProgress;
use crate::session::TrainingSession;
use crate::stats::SessionSummary;
use crate::trainer::{Correction, Praise};
use crate::util::minutes;

const CODE_WIDTH: usize = 56;
const FRAME_WIDTH: usize = CODE_WIDTH + 4;

/// Frames code for plain terminal display. Lines wider than the frame are
/// cut and marked with `...`.
pub fn format_code_block(code: &str) -> String {
    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(FRAME_WIDTH));
    out.push_str("┐\n");

    for line in code.lines() {
        let line = line.replace('\t', "    ");
        let line = if line.width() > CODE_WIDTH {
            truncate_to_width(&line, CODE_WIDTH - 3) + "..."
        } else {
            line
        };
        let pad = CODE_WIDTH.saturating_sub(line.width());
        out.push_str("│  ");
        out.push_str(&line);
        out.push_str(&" ".repeat(pad));
        out.push_str("  │\n");
    }

    out.push('└');
    out.push_str(&"─".repeat(FRAME_WIDTH));
    out.push('┘');
    out
}

fn truncate_to_width(s: &str, max: usize) -> String {
    let mut width = 0;
    s.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max
        })
        .collect()
}

/// Writes the tutor dialogue.
pub struct Ui<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        let title = self.paint(text, Color::Cyan);
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "=".repeat(text.width()))
    }

    pub fn welcome(&mut self, config: &TrainerConfig) -> io::Result<()> {
        self.heading("Rust Tutor")?;
        writeln!(self.out)?;
        writeln!(self.out, "Every lesson follows the same rhythm:")?;
        writeln!(self.out, "  • study the worked examples")?;
        writeln!(self.out, "  • solve short practice challenges")?;
        writeln!(self.out, "  • get feedback that adapts to your attempts")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Suggested time budget: {} minutes. Up to {} attempts per challenge.",
            config.time_limit.as_secs() / 60,
            config.max_attempts
        )?;
        writeln!(self.out, "Commands: 'hint', 'skip', 'quit', 'help'")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn exercise_intro(&mut self, exercise: &Exercise, position: usize, total: usize) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading(&format!("Lesson {position}/{total}: {}", exercise.title))?;
        writeln!(self.out, "{}", exercise.description)?;
        writeln!(
            self.out,
            "Level: {} · Type: {}",
            exercise.cognitive_level, exercise.exercise_type
        )?;
        writeln!(self.out)?;

        writeln!(self.out, "Learning goals:")?;
        for (i, goal) in exercise.learning_goals.iter().enumerate() {
            writeln!(self.out, "   {}. {goal}", i + 1)?;
        }
        if !exercise.prerequisites.is_empty() {
            writeln!(self.out, "Builds on: {}", exercise.prerequisites.iter().join(", "))?;
        }
        writeln!(self.out, "Estimated time: {} minutes", exercise.estimated_time)?;
        writeln!(self.out)
    }

    pub fn examples(&mut self, exercise: &Exercise) -> io::Result<()> {
        self.heading("Worked examples")?;
        for (i, example) in exercise.examples.iter().enumerate() {
            writeln!(self.out)?;
            let title = format!("{}. {}", i + 1, example.title);
            writeln!(self.out, "{title}")?;
            writeln!(self.out, "{}", "-".repeat(title.width()))?;
            writeln!(self.out, "{}", format_code_block(example.code))?;
            writeln!(self.out, "{}", example.explanation)?;
            if let Some(output) = example.output {
                writeln!(self.out, "Output: {output}")?;
            }
        }
        writeln!(self.out)
    }

    pub fn ready_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Press Enter when you are ready for the challenges...")?;
        self.out.flush()
    }

    pub fn challenge_intro(&mut self, index: usize, total: usize, challenge: &Challenge) -> io::Result<()> {
        writeln!(self.out)?;
        let header = self.paint(&format!("Challenge {}/{}", index + 1, total), Color::Magenta);
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "Task: {}", challenge.description)?;
        writeln!(self.out)?;
        writeln!(self.out, "Template:\n{}", format_code_block(challenge.template))?;
        writeln!(self.out)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Your solution: ")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Available commands:")?;
        writeln!(self.out, "  hint  - show the next hint for this challenge")?;
        writeln!(self.out, "  skip  - skip this challenge and show the solution")?;
        writeln!(self.out, "  quit  - pause the session; resume later with `rustutor resume`")?;
        writeln!(self.out, "  help  - show this message")?;
        writeln!(self.out)
    }

    pub fn hint(&mut self, hint: &str) -> io::Result<()> {
        let label = self.paint("Hint:", Color::Yellow);
        writeln!(self.out, "💡 {label} {hint}")
    }

    pub fn hints_exhausted(&mut self, solution: &str) -> io::Result<()> {
        let label = self.paint("Solution:", Color::Yellow);
        writeln!(self.out, "💡 {label} {solution}")
    }

    pub fn hints_disabled(&mut self) -> io::Result<()> {
        writeln!(self.out, "Hints are turned off for this session.")
    }

    pub fn skipped(&mut self, solution: &str) -> io::Result<()> {
        writeln!(self.out, "⏭  Skipped. Solution: {solution}")
    }

    pub fn praise(&mut self, praise: Praise) -> io::Result<()> {
        let mark = self.paint("✔ Correct!", Color::Green);
        let note = match praise {
            Praise::FirstTry => "Perfect on the first try!",
            Praise::Quick => "Good work!",
            Praise::Persistent => "Great persistence!",
        };
        writeln!(self.out, "{mark} {note}")
    }

    pub fn correction(&mut self, correction: Correction) -> io::Result<()> {
        let mark = self.paint("✘", Color::Red);
        let note = match correction {
            Correction::Gentle => "Not quite right. Compare your answer with the examples above.",
            Correction::SuggestHint => "Still not correct. Type 'hint' for guidance, or review the examples.",
            Correction::BreakDown => "Let's break this down. Type 'hint' for step-by-step help.",
        };
        writeln!(self.out, "{mark} {note}")
    }

    pub fn attempts_exhausted(&mut self, solution: &str) -> io::Result<()> {
        writeln!(self.out, "Out of attempts. Solution: {solution}")
    }

    pub fn exercise_completed(&mut self, exercise: &Exercise, progress: &LearningProgress) -> io::Result<()> {
        writeln!(self.out)?;
        let done = self.paint(&format!("{} completed!", exercise.title), Color::Green);
        writeln!(self.out, "{done}")?;
        writeln!(self.out, "Time spent: {:.1} minutes", minutes(progress.time_spent))?;
        writeln!(self.out, "Score: {:.1}/100", progress.score)
    }

    pub fn paused(&mut self, session: &TrainingSession) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Session {} paused at lesson {}. Run `rustutor resume` to continue.",
            session.session_id,
            session.current_index + 1
        )
    }

    pub fn summary(&mut self, summary: &SessionSummary, finished: bool) -> io::Result<()> {
        writeln!(self.out)?;
        self.heading(if finished { "Training complete!" } else { "Progress so far" })?;
        writeln!(self.out, "Lessons completed: {}/{}", summary.completed, summary.total)?;
        writeln!(self.out, "Total time: {:.1} minutes", minutes(summary.elapsed))?;
        writeln!(self.out, "Total attempts: {}", summary.total_attempts)?;
        writeln!(self.out, "Hints used: {}", summary.total_hints)?;
        if let Some(avg) = summary.average_attempts {
            writeln!(self.out, "Average attempts per lesson: {avg:.1}")?;
        }
        if let Some(avg) = summary.average_score {
            writeln!(self.out, "Average score: {avg:.1}/100")?;
        }

        if !summary.scores.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "Lesson scores:")?;
            for s in &summary.scores {
                writeln!(self.out, "  {}: {:.1}/100", s.title, s.score)?;
            }
            writeln!(self.out)?;
            writeln!(self.out, "Key concepts learned:")?;
            for (i, s) in summary.scores.iter().enumerate() {
                writeln!(self.out, "  {}. {}", i + 1, s.title)?;
                for goal in &s.learning_goals {
                    writeln!(self.out, "     • {goal}")?;
                }
            }
        }

        if finished {
            writeln!(self.out)?;
            writeln!(self.out, "Next steps:")?;
            writeln!(self.out, "  • Use these concepts in a small project of your own")?;
            writeln!(self.out, "  • Read through the standard library docs")?;
            writeln!(self.out, "  • Work through The Rust Programming Language book")?;
        }
        self.out.flush()
    }

    /// One line per session for `list`, `resume` and `delete` pickers.
    pub fn session_line(&mut self, number: Option<usize>, session: &TrainingSession) -> io::Result<()> {
        let total = session.progress.len();
        let lesson = (session.current_index + 1).min(total.max(1));
        let mut status = session.status.to_string();
        if let Some(paused_at) = session.paused_at {
            status.push_str(&format!(" (paused {})", paused_at.format("%Y-%m-%d %H:%M")));
        }
        if let Some(n) = number {
            write!(self.out, "{n}. ")?;
        }
        writeln!(
            self.out,
            "{} - {} - lesson {}/{} - {} completed",
            session.session_id,
            status,
            lesson,
            total,
            session.completed_count()
        )
    }

    pub fn session_details(&mut self, session: &TrainingSession) -> io::Result<()> {
        writeln!(self.out, "Session ID: {}", session.session_id)?;
        writeln!(self.out, "Status: {}", session.status)?;
        writeln!(self.out, "Started: {}", session.start_time.format("%Y-%m-%d %H:%M:%S"))?;
        if let Some(paused_at) = session.paused_at {
            writeln!(self.out, "Paused: {}", paused_at.format("%Y-%m-%d %H:%M:%S"))?;
        }
        writeln!(
            self.out,
            "Last activity: {}",
            session.last_activity.format("%Y-%m-%d %H:%M:%S")
        )?;
        let total = session.progress.len();
        writeln!(
            self.out,
            "Progress: lesson {}/{} ({} completed)",
            (session.current_index + 1).min(total.max(1)),
            total,
            session.completed_count()
        )?;
        writeln!(self.out, "---")
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn ask(&mut self, question: &str) -> io::Result<()> {
        write!(self.out, "{question}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Ui<Vec<u8>>) -> io::Result<()>,
    {
        let mut ui = Ui::new(Vec::new(), false);
        f(&mut ui).unwrap();
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn code_block_has_borders_and_no_fences() {
        let formatted = format_code_block("fn main() {}\n\nlet x = 1;");
        assert!(formatted.starts_with('┌'));
        assert!(formatted.ends_with('┘'));
        assert!(!formatted.contains("```"));
        assert_eq!(formatted.lines().count(), 5);
    }

    #[test]
    fn code_block_lines_share_width() {
        let formatted = format_code_block("short\nlet a_much_longer_line = vec![1, 2, 3];\n日本語");
        let widths: Vec<usize> = formatted.lines().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == FRAME_WIDTH + 2), "{widths:?}");
    }

    #[test]
    fn code_block_truncates_long_lines() {
        let long = "x".repeat(80);
        let formatted = format_code_block(&long);
        let body = formatted.lines().nth(1).unwrap();
        assert!(body.contains(&format!("{}...", "x".repeat(CODE_WIDTH - 3))));
        assert_eq!(body.width(), FRAME_WIDTH + 2);
    }

    #[test]
    fn intro_lists_goals_and_prerequisites() {
        let catalog = Catalog::builtin();
        let exercise = catalog.get("functions").unwrap();
        let text = render(|ui| ui.exercise_intro(exercise, 4, 5));
        assert!(text.contains("Lesson 4/5: Functions"));
        assert!(text.contains("1. Write functions with typed parameters and return values"));
        assert!(text.contains("Builds on: variables, basic-types, collections"));
        assert!(text.contains("Estimated time: 15 minutes"));
    }

    #[test]
    fn feedback_tiers_render_distinct_messages() {
        let text = render(|ui| {
            ui.praise(Praise::FirstTry)?;
            ui.praise(Praise::Quick)?;
            ui.praise(Praise::Persistent)?;
            ui.correction(Correction::Gentle)?;
            ui.correction(Correction::SuggestHint)?;
            ui.correction(Correction::BreakDown)
        });
        assert!(text.contains("Perfect on the first try!"));
        assert!(text.contains("Good work!"));
        assert!(text.contains("Great persistence!"));
        assert!(text.contains("Compare your answer with the examples"));
        assert!(text.contains("Type 'hint' for guidance"));
        assert!(text.contains("Let's break this down"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let text = render(|ui| ui.welcome(&TrainerConfig::default()));
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Suggested time budget: 60 minutes"));
    }
}
