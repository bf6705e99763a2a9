//! Tracing subscriber setup
//!
//! While the TUI owns the terminal, log lines go to a file; headless runs log
//! to stderr. `RUST_LOG` takes precedence over the configured filter.

use crate::error::AppError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default).map_err(|e| AppError::Logging(e.to_string())),
    }
}

/// Send all tracing output to `path`, truncating it
pub fn init_file_logging(path: &Path, filter: &str) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::Logging(format!("cannot create {}: {}", path.display(), e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Send all tracing output to stderr
pub fn init_stderr_logging(filter: &str) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
