//! Speed slider and the step delay derived from it

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::debug;

/// Slider bounds used when nothing is configured
pub const DEFAULT_MIN_SPEED: u32 = 100;
pub const DEFAULT_MAX_SPEED: u32 = 1000;
pub const DEFAULT_SPEED_STEP: u32 = 100;
pub const DEFAULT_SPEED: u32 = 500;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// A speed slider with a fixed range and step.
///
/// The step delay is `base_delay - value`, so a higher speed means a shorter
/// wait. The value is an atomic so it can be adjusted while a run is waiting;
/// the driver reads it again before every suspension.
#[derive(Debug)]
pub struct SpeedControl {
    value: AtomicU32,
    min: u32,
    max: u32,
    step: u32,
    base_delay: Duration,
}

impl SpeedControl {
    /// Create a slider. A `max` below `min` collapses the range to `min`.
    pub fn new(min: u32, max: u32, step: u32, initial: u32, base_delay: Duration) -> Self {
        let control = SpeedControl {
            value: AtomicU32::new(min),
            min,
            max: max.max(min),
            step: step.max(1),
            base_delay,
        };
        control.set(initial);
        control
    }

    pub fn value(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Set the slider, clamped to the range and snapped to the nearest step.
    /// Returns the value actually stored.
    pub fn set(&self, value: u32) -> u32 {
        let snapped = self.snap(value);
        self.value.store(snapped, Ordering::Relaxed);
        debug!(speed = snapped, "speed set");
        snapped
    }

    pub fn increase(&self) -> u32 {
        self.set(self.value().saturating_add(self.step))
    }

    pub fn decrease(&self) -> u32 {
        self.set(self.value().saturating_sub(self.step))
    }

    /// Delay before the next comparison step
    pub fn step_delay(&self) -> Duration {
        self.base_delay
            .saturating_sub(Duration::from_millis(u64::from(self.value())))
    }

    fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        let snapped = self.min.saturating_add(steps.saturating_mul(self.step));
        snapped.min(self.max)
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        SpeedControl::new(
            DEFAULT_MIN_SPEED,
            DEFAULT_MAX_SPEED,
            DEFAULT_SPEED_STEP,
            DEFAULT_SPEED,
            DEFAULT_BASE_DELAY,
        )
    }
}
