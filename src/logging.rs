//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{TrackerError, TrackerResult};

/// Environment variable holding a filter that overrides the configured level
pub const LOG_ENV_VAR: &str = "BUDGET_TRACKER_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter from `BUDGET_TRACKER_LOG`, else from `default_level`
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber; later calls are ignored
pub fn init_tracing<W>(default_level: &str, writer: W, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(default_level);
    TRACING_INIT.call_once(move || {
        // another subscriber may already be set (tests); keep it
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .try_init();
    });
}

pub fn init_stderr(default_level: &str) {
    init_tracing(default_level, std::io::stderr, true);
}

/// Log to `path`, appending to what earlier sessions wrote
pub fn init_file(default_level: &str, path: &Path) -> TrackerResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Io(format!("Failed to open log file: {}", e)))?;

    init_tracing(default_level, Mutex::new(file), false);
    tracing::info!("tracing initialized");
    Ok(())
}
