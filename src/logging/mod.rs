//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `gradecrab_<date>.log` in the configured log directory (default:
//! `~/.local/share/gradecrab/logs/`). Nothing is installed when logging is
//! disabled and the `tracing` macros become no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    match log_dir.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(log_dir),
        },
        None => PathBuf::from(log_dir),
    }
}

pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("gradecrab_{}.log", date.format("%Y-%m-%d"))
}

/// Install the global file subscriber. Returns the log file path, or `None`
/// when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level()?;
    let log_dir = expand_log_dir(&config.log_dir);
    let path = open_target(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

fn open_target(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let today = chrono::Local::now().date_naive();
    Ok(log_dir.join(log_file_name(today)))
}
