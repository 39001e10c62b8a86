use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Where session records live unless overridden.
    pub fn sessions_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("rustutor");
            Some(state_dir.join("sessions"))
        } else {
            ProjectDirs::from("", "", "rustutor")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("sessions"))
        }
    }

    pub fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rustutor").map(|pd| pd.config_dir().join("settings.json"))
    }
}
