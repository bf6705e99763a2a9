//! Error types for configuration and application startup
//!
//! The sort driver itself cannot fail; everything here comes from reading
//! settings, installing the log subscriber, or driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or validating [`Settings`](crate::config::Settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("the array to sort must contain at least one value")]
    EmptyArray,

    #[error("invalid value '{0}' in --values (expected a non-negative integer)")]
    InvalidValue(String),

    #[error("invalid speed range: min {min}, max {max}, step {step}")]
    InvalidSpeedRange { min: u32, max: u32, step: u32 },
}

/// Top-level errors reported by the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}
