use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::SettingsError;
use crate::history::DEFAULT_HISTORY_FILE;
use crate::watcher::DEFAULT_POLL_INTERVAL;

/// Polls faster than this are clamped
const MIN_POLL_INTERVAL_MS: u64 = 100;

/// UI colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    System,
    Light,
    Dark,
}

impl Appearance {
    /// Next appearance given the one currently on screen: dark goes light,
    /// anything else goes dark. Resolve `System` before calling this.
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Dark => Appearance::Light,
            Appearance::Light | Appearance::System => Appearance::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where history is exported and persisted on exit
    pub history_file: PathBuf,
    pub poll_interval_ms: u64,
    pub appearance: Appearance,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            appearance: Appearance::System,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn settings_path() -> Result<PathBuf, SettingsError> {
        ProjectDirs::from("com", "ditto", "ditto")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load from the platform config dir, writing defaults on first run.
    pub async fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::settings_path()?).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            info!("Wrote default settings to {}", path.display());
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_path()?).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
