//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/homedeck/logs/` since stdout belongs
/// to the TUI. Log level is controlled by the `HOMEDECK_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// HOMEDECK_LOG=debug homedeck
/// HOMEDECK_LOG=trace homedeck
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "homedeck.log");

    // Default to info, allow override via HOMEDECK_LOG
    let env_filter = EnvFilter::try_from_env("HOMEDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("homedeck=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("homedeck starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("homedeck").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("homedeck.log"))
}
