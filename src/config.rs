//! Settings for the visualizer
//!
//! Defaults are overridden by an optional TOML file, which is in turn
//! overridden by command-line flags. Every key is optional:
//!
//! ```toml
//! values = [30, 80, 45, 60, 20, 90, 50]
//! log_filter = "info"
//! log_file = "bubbletty.log"
//!
//! [speed]
//! min = 100
//! max = 1000
//! step = 100
//! initial = 500
//! base_delay_ms = 1000
//!
//! [timing]
//! settle_ms = 100
//! ```

use crate::driver::speed::{
    DEFAULT_BASE_DELAY, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED, DEFAULT_SPEED, DEFAULT_SPEED_STEP,
};
use crate::driver::{SortControls, SortDriver, SpeedControl, DEFAULT_SETTLE_DELAY};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The array shown at startup
pub const DEFAULT_VALUES: [u32; 7] = [30, 80, 45, 60, 20, 90, 50];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedSettings {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub initial: u32,
    pub base_delay_ms: u64,
}

impl Default for SpeedSettings {
    fn default() -> Self {
        SpeedSettings {
            min: DEFAULT_MIN_SPEED,
            max: DEFAULT_MAX_SPEED,
            step: DEFAULT_SPEED_STEP,
            initial: DEFAULT_SPEED,
            base_delay_ms: DEFAULT_BASE_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingSettings {
    pub settle_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            settle_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub values: Vec<u32>,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub speed: SpeedSettings,
    pub timing: TimingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            values: DEFAULT_VALUES.to_vec(),
            log_filter: "info".into(),
            log_file: None,
            speed: SpeedSettings::default(),
            timing: TimingSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml(&raw, path)
    }

    /// Check the invariants the driver and UI rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.values.is_empty() {
            return Err(ConfigError::EmptyArray);
        }
        let speed = &self.speed;
        if speed.step == 0 || speed.min > speed.max {
            return Err(ConfigError::InvalidSpeedRange {
                min: speed.min,
                max: speed.max,
                step: speed.step,
            });
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.timing.settle_ms)
    }

    pub fn speed_control(&self) -> SpeedControl {
        SpeedControl::new(
            self.speed.min,
            self.speed.max,
            self.speed.step,
            self.speed.initial,
            Duration::from_millis(self.speed.base_delay_ms),
        )
    }

    /// Build a driver with fresh controls from these settings
    pub fn driver(&self) -> SortDriver {
        SortDriver::new(SortControls::new(self.speed_control()), self.settle_delay())
    }
}

/// Parse a `--values` list such as `30,80,45`
pub fn parse_values(raw: &str) -> Result<Vec<u32>, ConfigError> {
    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ConfigError::EmptyArray);
    }
    Ok(values)
}
