//! User settings for stepform
//!
//! Logging preferences, toast lifetime and the TUI tick rate, stored as
//! `config.json` in the base directory.

use serde::{Deserialize, Serialize};

use super::paths::StepformPaths;
use crate::error::StepformError;

/// User settings for stepform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default tracing filter (overridden by `RUST_LOG` and `--debug`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether the TUI writes its log to a file under `logs/`
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,

    /// How long a toast notification stays on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Event loop tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

fn default_notification_secs() -> u64 {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            log_to_file: default_log_to_file(),
            notification_secs: default_notification_secs(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &StepformPaths) -> Result<Self, StepformError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StepformError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StepformError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StepformPaths) -> Result<(), StepformError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StepformError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            StepformError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
