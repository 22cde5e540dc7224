//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/grepjump/logs/` (or the platform
/// equivalent). Log level is controlled by the `GREPJUMP_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// GREPJUMP_LOG=debug grepjump src/main.rs --line 42
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "grepjump.log");

    // Default to info, allow override via GREPJUMP_LOG
    let env_filter = EnvFilter::try_from_env("GREPJUMP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("grepjump=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("grepjump").join("logs")
}
