//! Step driver for the bubble sort animation
//!
//! The driver walks a bubble sort one comparison at a time and suspends
//! between steps so the UI can redraw the intermediate states.
//!
//! - [`gate`]: [`PauseGate`], the resumable wait the driver parks on while paused
//! - [`speed`]: [`SpeedControl`], the slider the step delay is derived from
//! - [`observer`]: [`SortObserver`], how state changes leave the driver
//!
//! # Step sequence
//!
//! For every adjacent pair `(j, j + 1)`:
//!
//! ```text
//! highlight j, snapshot    →  wait(step delay)
//! compare, maybe swap      →  highlight j + 1  →  wait(step delay)
//! clear highlight          →  wait(settle)
//! ```
//!
//! Every wait checks the pause gate before and after its timer, so no state
//! change is published while paused.
//!
//! # Admission
//!
//! Only one run may be active. [`SortControls`] carries the running flag; a
//! start request made while it is set is ignored. The flag is held by a guard
//! that also reopens the pause gate, so it is released even if the driver task
//! is aborted.

pub mod gate;
pub mod observer;
pub mod speed;

pub use gate::PauseGate;
pub use observer::{SortObserver, StatePublisher, TraceObserver};
pub use speed::SpeedControl;

use crate::state::{loop_snapshot, SortState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Fixed pause after each pair, before moving on to the next
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Handles shared by the UI controls and the driver
#[derive(Debug, Clone)]
pub struct SortControls {
    running: Arc<AtomicBool>,
    gate: PauseGate,
    speed: Arc<SpeedControl>,
}

impl SortControls {
    pub fn new(speed: SpeedControl) -> Self {
        SortControls {
            running: Arc::new(AtomicBool::new(false)),
            gate: PauseGate::new(),
            speed: Arc::new(speed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Flip pause/resume. Returns the new paused state, or `None` when no run
    /// is active and the toggle is disabled.
    pub fn toggle_pause(&self) -> Option<bool> {
        if !self.is_running() {
            return None;
        }
        Some(self.gate.toggle())
    }

    pub fn gate(&self) -> &PauseGate {
        &self.gate
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    fn try_acquire(&self) -> Option<RunGuard> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard {
                controls: self.clone(),
            })
    }
}

impl Default for SortControls {
    fn default() -> Self {
        Self::new(SpeedControl::default())
    }
}

/// Holds the running flag for the duration of a run
struct RunGuard {
    controls: SortControls,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        // A pause requested during the last wait must not stall the next run
        self.controls.gate.resume();
        self.controls.running.store(false, Ordering::Release);
    }
}

/// Runs bubble sort step by step, publishing each state change
#[derive(Debug, Clone)]
pub struct SortDriver {
    controls: SortControls,
    settle: Duration,
}

impl SortDriver {
    pub fn new(controls: SortControls, settle: Duration) -> Self {
        SortDriver { controls, settle }
    }

    pub fn controls(&self) -> &SortControls {
        &self.controls
    }

    /// Spawn a run on the current Tokio runtime.
    ///
    /// Returns `None` without spawning when a run is already active. The
    /// running flag is taken before this returns, so a second call made
    /// immediately afterwards is rejected.
    pub fn start<O>(&self, array: Vec<u32>, mut observer: O) -> Option<JoinHandle<Vec<u32>>>
    where
        O: SortObserver + 'static,
    {
        let Some(guard) = self.controls.try_acquire() else {
            debug!("start ignored: a sort is already running");
            return None;
        };
        let driver = self.clone();
        Some(tokio::spawn(async move {
            driver.sort(array, &mut observer, guard).await
        }))
    }

    /// Run to completion on the calling task and return the sorted array.
    ///
    /// Returns `None` immediately, publishing nothing, when a run is already active.
    pub async fn run<O: SortObserver>(
        &self,
        array: Vec<u32>,
        observer: &mut O,
    ) -> Option<Vec<u32>> {
        let Some(guard) = self.controls.try_acquire() else {
            debug!("start ignored: a sort is already running");
            return None;
        };
        Some(self.sort(array, observer, guard).await)
    }

    async fn sort<O: SortObserver + ?Sized>(
        &self,
        array: Vec<u32>,
        observer: &mut O,
        _guard: RunGuard,
    ) -> Vec<u32> {
        let n = array.len();
        let mut state = SortState {
            array,
            is_sorting: true,
            ..SortState::default()
        };
        info!(len = n, speed = self.controls.speed.value(), "sort started");
        observer.publish(&state);

        for i in 0..n {
            for j in 0..n - i - 1 {
                state.highlighted = Some(j);
                state.memory = loop_snapshot(i, j, &state.array);
                observer.publish(&state);
                self.suspend(self.controls.speed.step_delay()).await;

                state.comparisons += 1;
                if state.array[j] > state.array[j + 1] {
                    state.array.swap(j, j + 1);
                    state.swaps += 1;
                    state.memory = loop_snapshot(i, j, &state.array);
                    debug!(i, j, "swapped");
                } else {
                    debug!(i, j, "in order");
                }
                observer.publish(&state);

                state.highlighted = Some(j + 1);
                observer.publish(&state);
                self.suspend(self.controls.speed.step_delay()).await;

                state.highlighted = None;
                observer.publish(&state);
                self.suspend(self.settle).await;
            }
        }

        state.memory.clear();
        state.highlighted = None;
        state.is_sorting = false;
        observer.publish(&state);
        info!(
            comparisons = state.comparisons,
            swaps = state.swaps,
            "sort finished"
        );

        state.array
    }

    /// Wait `delay`, never leaving while the gate is paused
    async fn suspend(&self, delay: Duration) {
        self.controls.gate.wait_resumed().await;
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
        self.controls.gate.wait_resumed().await;
    }
}

impl Default for SortDriver {
    fn default() -> Self {
        Self::new(SortControls::default(), DEFAULT_SETTLE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count(usize);

    impl SortObserver for Count {
        fn publish(&mut self, _state: &SortState) {
            self.0 += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_releases_running_flag() {
        let driver = SortDriver::default();
        let mut count = Count(0);
        let sorted = driver.run(vec![3, 1, 2], &mut count).await;
        assert_eq!(sorted, Some(vec![1, 2, 3]));
        assert!(!driver.controls().is_running());
        // start + 3 pairs * 4 publishes + finish
        assert_eq!(count.0, 14);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_element_publishes_no_snapshot() {
        let driver = SortDriver::default();
        let mut count = Count(0);
        assert_eq!(driver.run(vec![7], &mut count).await, Some(vec![7]));
        assert_eq!(count.0, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_array() {
        let driver = SortDriver::default();
        let mut count = Count(0);
        assert_eq!(driver.run(Vec::new(), &mut count).await, Some(Vec::new()));
    }

    #[test]
    fn test_toggle_pause_disabled_when_idle() {
        let controls = SortControls::default();
        assert_eq!(controls.toggle_pause(), None);
        assert!(!controls.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_releases_running_flag() {
        let driver = SortDriver::default();
        let (publisher, _rx) = StatePublisher::channel(SortState::default());
        let handle = driver
            .start(vec![5, 4, 3, 2, 1], publisher)
            .expect("first start is admitted");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(driver.controls().is_running());
        driver.controls().toggle_pause();

        handle.abort();
        let _ = handle.await;
        assert!(!driver.controls().is_running());
        assert!(!driver.controls().is_paused());
    }
}
