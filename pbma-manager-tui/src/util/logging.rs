//! File logging
//!
//! The terminal belongs to the UI, so log output goes to
//! `<data_local_dir>/pbma-manager/logs/pbma-manager.log`. Records emitted through the
//! `log` facade (the core crate) are bridged into the same subscriber.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "pbma-manager.log";

pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pbma-manager")
        .join("logs")
}

/// Install the global subscriber writing to `dir`.
///
/// The returned guard flushes the background writer on drop; keep it alive until exit.
/// The level filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .context("failed to open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(
        "PBMA Manager {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.join(LOG_FILE_NAME).display()
    );
    Ok(guard)
}

/// Like [`init_logging`], but a failure only costs the log file.
///
/// The terminal is not in raw mode yet, so the reason goes to stderr.
pub fn init_logging_or_warn(dir: &Path) -> Option<WorkerGuard> {
    match init_logging(dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("pbma-manager: file logging disabled: {e:#}");
            None
        }
    }
}
