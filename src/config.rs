use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;
use crate::catalog::CognitiveLevel;

/// Per-run trainer settings, embedded in every persisted session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerConfig {
    pub max_attempts: u32,
    /// Suggested time budget. Shown to the learner, never enforced.
    pub time_limit: Duration,
    pub show_hints: bool,
    pub adaptive_pacing: bool,
    pub cognitive_load: CognitiveLevel,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            time_limit: Duration::from_secs(60 * 60),
            show_hints: true,
            adaptive_pacing: true,
            cognitive_load: CognitiveLevel::Beginner,
        }
    }
}

/// User-level settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub user_id: String,
    pub sessions_dir: Option<PathBuf>,
    pub trainer: TrainerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: "default".to_string(),
            sessions_dir: None,
            trainer: TrainerConfig::default(),
        }
    }
}

pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new() -> Self {
        let path = AppDirs::settings_path().unwrap_or_else(|| PathBuf::from("rustutor_settings.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Settings::default(),
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(mut settings) => {
                if settings.trainer.max_attempts == 0 {
                    tracing::warn!(path = %self.path.display(), "max_attempts must be at least 1, using the default");
                    settings.trainer.max_attempts = TrainerConfig::default().max_attempts;
                }
                settings
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable settings file");
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings)?;
        fs::write(&self.path, data)
    }
}
