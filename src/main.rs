use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustutor::app_dirs::AppDirs;
use rustutor::catalog::Catalog;
use rustutor::config::{FileSettingsStore, Settings, SettingsStore};
use rustutor::runtime::{LineSource, ReaderSource};
use rustutor::session::TrainingSession;
use rustutor::store::{FileSessionStore, SessionStore};
use rustutor::trainer::{paused_sessions, Trainer};
use rustutor::ui::Ui;

/// interactive terminal tutor for learning Rust
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "An interactive terminal tutor that walks through Rust fundamentals with worked examples, validated practice challenges and sessions you can pause and resume."
)]
pub struct Cli {
    /// learner name used to tag and filter sessions
    #[clap(short = 'u', long, global = true)]
    user: Option<String>,

    /// directory holding session records
    #[clap(long, global = true)]
    sessions_dir: Option<PathBuf>,

    /// attempts allowed per challenge before the solution is shown
    #[clap(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// turn off hints for new sessions
    #[clap(long, global = true)]
    no_hints: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// pick up a paused session
    Resume {
        /// resume this session instead of choosing from a list
        session_id: Option<String>,
    },
    /// list your sessions
    List,
    /// delete one of your sessions
    Delete,
}

impl Cli {
    /// Command line flags take precedence over the settings file.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(user) = &self.user {
            settings.user_id = user.clone();
        }
        if let Some(dir) = &self.sessions_dir {
            settings.sessions_dir = Some(dir.clone());
        }
        if let Some(max) = self.max_attempts {
            settings.trainer.max_attempts = max;
        }
        if self.no_hints {
            settings.trainer.show_hints = false;
        }
        settings
    }
}

type Input = ReaderSource<io::StdinLock<'static>>;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings_store = FileSettingsStore::new();
    if !settings_store.path().exists() {
        // First run: leave an editable file behind. Flags are not written.
        if let Err(err) = settings_store.save(&Settings::default()) {
            tracing::warn!(path = %settings_store.path().display(), %err, "could not write default settings");
        }
    }
    let settings = cli.apply(settings_store.load());
    let sessions_dir = match settings.sessions_dir.clone().or_else(AppDirs::sessions_dir) {
        Some(dir) => dir,
        None => bail!("could not determine a sessions directory; pass --sessions-dir"),
    };
    tracing::debug!(dir = %sessions_dir.display(), user = %settings.user_id, "starting");

    let store = FileSessionStore::new(&sessions_dir);
    let catalog = Catalog::builtin();
    let stdout = io::stdout();
    let color = stdout.is_tty();
    let mut ui = Ui::new(stdout, color);
    let mut input = ReaderSource::stdin();

    match cli.command {
        None => {
            let mut trainer = Trainer::start(
                &settings.user_id,
                settings.trainer.clone(),
                catalog.exercises(),
                &store,
            )
            .context("failed to start a training session")?;
            trainer.run(&mut input, &mut ui)?;
        }
        Some(Command::Resume { session_id }) => {
            let Some(id) = pick_paused(session_id, &settings, &store, &mut input, &mut ui)? else {
                return Ok(());
            };
            let mut trainer = Trainer::resume(&id, catalog.exercises(), &store)
                .with_context(|| format!("failed to resume session {id}"))?;
            trainer.run(&mut input, &mut ui)?;
        }
        Some(Command::List) => list(&settings, &store, &mut ui)?,
        Some(Command::Delete) => delete(&settings, &store, &mut input, &mut ui)?,
    }
    Ok(())
}

fn pick_paused(
    requested: Option<String>,
    settings: &Settings,
    store: &FileSessionStore,
    input: &mut Input,
    ui: &mut Ui<Stdout>,
) -> anyhow::Result<Option<String>> {
    if requested.is_some() {
        return Ok(requested);
    }

    let paused = paused_sessions(store, &settings.user_id).context("failed to list sessions")?;
    match paused.len() {
        0 => {
            ui.line("No paused sessions found.")?;
            Ok(None)
        }
        1 => {
            ui.line(&format!("Resuming session {}", paused[0].session_id))?;
            Ok(Some(paused[0].session_id.clone()))
        }
        _ => {
            ui.line("Paused sessions:")?;
            Ok(choose(&paused, input, ui)?.map(|s| s.session_id.clone()))
        }
    }
}

fn list(settings: &Settings, store: &FileSessionStore, ui: &mut Ui<Stdout>) -> anyhow::Result<()> {
    let sessions = store.list(&settings.user_id).context("failed to list sessions")?;
    if sessions.is_empty() {
        ui.line("No training sessions found.")?;
        return Ok(());
    }
    ui.line(&format!("Training sessions for {}:", settings.user_id))?;
    ui.line("")?;
    for session in &sessions {
        ui.session_details(session)?;
    }
    Ok(())
}

fn delete(
    settings: &Settings,
    store: &FileSessionStore,
    input: &mut Input,
    ui: &mut Ui<Stdout>,
) -> anyhow::Result<()> {
    let sessions = store.list(&settings.user_id).context("failed to list sessions")?;
    if sessions.is_empty() {
        ui.line("No training sessions found.")?;
        return Ok(());
    }

    ui.line("Sessions:")?;
    let Some(session) = choose(&sessions, input, ui)? else {
        return Ok(());
    };

    ui.ask(&format!("Delete session {}? (y/N): ", session.session_id))?;
    let confirmed = input
        .next_line()?
        .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false);
    if !confirmed {
        ui.line("Deletion cancelled.")?;
        return Ok(());
    }

    store
        .delete(&session.session_id)
        .with_context(|| format!("failed to delete session {}", session.session_id))?;
    ui.line(&format!("Session {} deleted.", session.session_id))?;
    Ok(())
}

/// Numbered picker. `0` or end of input cancels.
fn choose<'s>(
    sessions: &'s [TrainingSession],
    input: &mut Input,
    ui: &mut Ui<Stdout>,
) -> anyhow::Result<Option<&'s TrainingSession>> {
    for (i, session) in sessions.iter().enumerate() {
        ui.session_line(Some(i + 1), session)?;
    }
    ui.ask(&format!("Select a session (1-{}, 0 to cancel): ", sessions.len()))?;

    let Some(answer) = input.next_line()? else {
        return Ok(None);
    };
    let choice: usize = answer
        .trim()
        .parse()
        .with_context(|| format!("invalid selection {:?}", answer.trim()))?;
    if choice == 0 {
        ui.line("Cancelled.")?;
        return Ok(None);
    }
    match sessions.get(choice - 1) {
        Some(session) => Ok(Some(session)),
        None => bail!("selection {choice} is out of range"),
    }
}
