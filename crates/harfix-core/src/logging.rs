//! Logging init: file under XDG state dir, or stderr when the caller falls back.

use anyhow::{anyhow, Result};
use std::fs;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,harfix=debug,harfix_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to `~/.local/state/harfix/harfix.log` (appending).
/// Returns Err when the state dir is unusable; use [`init_logging_stderr`] then.
pub fn init_logging() -> Result<()> {
    let log_dir = xdg::BaseDirectories::with_prefix("harfix")?.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("harfix.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("harfix logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
