use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::{
    Settings, SettingsError, DEFAULT_CHARACTER_SET, DEFAULT_MARKER, DEFAULT_MIN_INPUT_LENGTH,
    DEFAULT_PASSWORD_LENGTH,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub character_set: String,
    pub password_length: usize,
    pub min_input_length: usize,
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            character_set: DEFAULT_CHARACTER_SET.to_string(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            min_input_length: DEFAULT_MIN_INPUT_LENGTH,
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Validate and normalize into immutable runtime settings.
    pub fn to_settings(&self) -> Result<Settings, SettingsError> {
        Settings::new(
            &self.character_set,
            self.password_length,
            self.min_input_length,
            &self.marker,
        )
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "taplock") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("taplock_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
