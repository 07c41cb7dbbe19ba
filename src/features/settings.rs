//! Application settings persistence
//!
//! Handles saving and loading user preferences as pretty-printed JSON in
//! the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Milestone announcement settings
    #[serde(default)]
    pub milestone: MilestoneSettings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode UI
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Suppress confetti bursts (the dialog still animates)
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduced_motion: false,
        }
    }
}

/// Milestone announcement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneSettings {
    /// Count-up start amount in whole currency units
    #[serde(default = "default_start_amount")]
    pub start_amount: f64,
    /// Count-up end amount in whole currency units
    #[serde(default = "default_goal_amount")]
    pub goal_amount: f64,
    /// Count-up duration in seconds
    #[serde(default = "default_count_duration")]
    pub count_duration_secs: f64,
    /// Campaign page opened by "See Our Impact"
    #[serde(default = "default_impact_url")]
    pub impact_url: String,
}

impl Default for MilestoneSettings {
    fn default() -> Self {
        Self {
            start_amount: default_start_amount(),
            goal_amount: default_goal_amount(),
            count_duration_secs: default_count_duration(),
            impact_url: default_impact_url(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_start_amount() -> f64 {
    1_800_000.0
}

fn default_goal_amount() -> f64 {
    2_000_000.0
}

fn default_count_duration() -> f64 {
    2.5
}

fn default_impact_url() -> String {
    "https://tab.gladly.io/2-million/".to_string()
}

impl Settings {
    /// Default settings file location
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jubilee").join("settings.json"))
    }

    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {e}"),
            SettingsError::Parse(e) => write!(f, "settings parse error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}
