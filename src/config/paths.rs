//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DIR` environment variable (if set)
//! 2. The platform config directory joined with `budget-tracker`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "BUDGET_TRACKER_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) => PathBuf::from(custom),
            None => BaseDirs::new()
                .map(|dirs| dirs.config_dir().join("budget-tracker"))
                .ok_or_else(|| {
                    TrackerError::Config("Could not determine the home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("tracker.log")
    }

    /// Create the base directory if it is missing
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
