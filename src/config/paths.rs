//! Path management for stepform
//!
//! ## Path Resolution Order
//!
//! 1. `STEPFORM_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `stepform`
//!    (`~/.config/stepform` on Linux, `%APPDATA%\stepform` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::StepformError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STEPFORM_DATA_DIR";

/// Manages all paths used by stepform
#[derive(Debug, Clone)]
pub struct StepformPaths {
    /// Base directory for all stepform files
    base_dir: PathBuf,
}

impl StepformPaths {
    /// Create a new StepformPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `STEPFORM_DATA_DIR` is not set.
    pub fn new() -> Result<Self, StepformError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create StepformPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (holds the key-value state file)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the log directory
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted key-value state
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("state.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), StepformError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StepformError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| StepformError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, StepformError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| StepformError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("stepform"))
}
