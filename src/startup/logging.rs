//! Tracing initialization.
//!
//! The terminal belongs to the TUI, so logs go to a file. The filter comes
//! from `DASHSHELL_LOG`, then `RUST_LOG`, then defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "DASHSHELL_LOG";

const DEFAULT_FILTER: &str = "info";

/// Build the filter directive string from the environment.
pub fn filter_directive() -> String {
    std::env::var(ENV_LOG_FILTER)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Install a file-backed fmt subscriber.
///
/// Returns `Ok(false)` when logging is disabled (no path) or a global
/// subscriber is already installed.
pub fn init_tracing(log_file: Option<&Path>) -> std::io::Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter_directive())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    Ok(installed)
}
