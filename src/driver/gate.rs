//! Pause gate shared between the controls and the driver

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// A resumable wait point.
///
/// The driver parks on [`PauseGate::wait_resumed`] while the gate is paused and
/// is woken by [`PauseGate::resume`]; nothing polls.
#[derive(Debug, Clone)]
pub struct PauseGate {
    paused: Arc<watch::Sender<bool>>,
}

impl PauseGate {
    pub fn new() -> Self {
        let (paused, _) = watch::channel(false);
        PauseGate {
            paused: Arc::new(paused),
        }
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    pub fn pause(&self) {
        self.set(true);
    }

    pub fn resume(&self) {
        self.set(false);
    }

    /// Flip the gate and return the new paused state
    pub fn toggle(&self) -> bool {
        self.paused.send_modify(|paused| *paused = !*paused);
        let paused = self.is_paused();
        debug!(paused, "pause gate toggled");
        paused
    }

    fn set(&self, paused: bool) {
        let changed = self.paused.send_if_modified(|current| {
            if *current == paused {
                false
            } else {
                *current = paused;
                true
            }
        });
        if changed {
            debug!(paused, "pause gate changed");
        }
    }

    /// Complete once the gate is open. Returns immediately when not paused.
    pub async fn wait_resumed(&self) {
        let mut rx = self.paused.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|paused| !*paused).await;
    }
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}
