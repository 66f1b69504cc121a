use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Derivation log under $HOME/.local/state/taplock
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("taplock");
            Some(state_dir.join("log.csv"))
        } else {
            ProjectDirs::from("", "", "taplock")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("log.csv"))
        }
    }
}
