//! Subscribers to the driver's published state

use crate::state::{MemoryEntry, SortState};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Receives every state change the driver makes
pub trait SortObserver: Send {
    fn publish(&mut self, state: &SortState);
}

/// Any `FnMut(&SortState)` closure can observe a run
impl<F: FnMut(&SortState) + Send> SortObserver for F {
    fn publish(&mut self, state: &SortState) {
        self(state);
    }
}

/// Publishes into a watch channel; the TUI holds a receiver and redraws
/// whenever it changes
#[derive(Debug, Clone)]
pub struct StatePublisher {
    sender: Arc<watch::Sender<SortState>>,
}

impl StatePublisher {
    /// Create a publisher seeded with `initial` and the receiver watching it
    pub fn channel(initial: SortState) -> (Self, watch::Receiver<SortState>) {
        let (sender, receiver) = watch::channel(initial);
        (
            StatePublisher {
                sender: Arc::new(sender),
            },
            receiver,
        )
    }

    /// Overwrite the shown state outside a run (e.g. a reset)
    pub fn replace(&self, state: SortState) {
        self.sender.send_replace(state);
    }
}

impl SortObserver for StatePublisher {
    fn publish(&mut self, state: &SortState) {
        self.sender.send_replace(state.clone());
    }
}

/// Writes one line per new display snapshot, used by headless mode
pub struct TraceObserver<W: Write + Send> {
    out: W,
    last_memory: Vec<MemoryEntry>,
    was_sorting: bool,
}

impl<W: Write + Send> TraceObserver<W> {
    pub fn new(out: W) -> Self {
        TraceObserver {
            out,
            last_memory: Vec::new(),
            was_sorting: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_state(&mut self, state: &SortState) -> std::io::Result<()> {
        if !state.memory.is_empty() && state.memory != self.last_memory {
            let line = state
                .memory
                .iter()
                .map(|entry| format!("{}={}", entry.label, entry.value))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.out, "{}", line)?;
            self.last_memory = state.memory.clone();
        }

        if self.was_sorting && !state.is_sorting {
            writeln!(
                self.out,
                "done: {} comparisons, {} swaps",
                state.comparisons, state.swaps
            )?;
            self.last_memory.clear();
        }
        self.was_sorting = state.is_sorting;
        Ok(())
    }
}

impl<W: Write + Send> SortObserver for TraceObserver<W> {
    fn publish(&mut self, state: &SortState) {
        if let Err(e) = self.write_state(state) {
            warn!(error = %e, "failed to write trace line");
        }
    }
}
