//! Logging initialization for stepform.
//!
//! TUI mode: logs to `<base>/logs/stepform-{datetime}.log` so output never
//! lands on the alternate screen.
//! CLI mode: logs to stderr.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, StepformPaths};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered log lines when dropped; keep it alive until exit.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Pick the filter directive: `--debug` wins over the configured level
pub fn log_level(settings: &Settings, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        settings.log_level.clone()
    }
}

/// Name of the log file for a session started now
pub fn log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("stepform-{}.log", timestamp)
}

/// Initialize logging based on mode and configuration.
///
/// `RUST_LOG` overrides the configured level in both modes.
pub fn init_logging(
    settings: &Settings,
    paths: &StepformPaths,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = log_level(settings, debug_override);
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(level));

    if is_tui_mode && settings.log_to_file {
        let logs_dir = paths.logs_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name();
        let log_file_path = logs_dir.join(&log_filename);
        let (writer, guard) = file_writer(&logs_dir, &log_filename);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

fn file_writer(
    dir: &Path,
    file_name: &str,
) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::never(dir, file_name);
    tracing_appender::non_blocking(appender)
}
