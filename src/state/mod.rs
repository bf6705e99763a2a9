//! Observable sort state
//!
//! [`SortState`] is owned by the [driver](crate::driver) and published after
//! every change. The UI never mutates it; it only renders the latest copy it
//! received.
//!
//! - [`entry`]: labeled values for the parameters pane ([`MemoryEntry`])

pub mod entry;

pub use entry::{format_array, loop_snapshot, MemoryEntry, MemoryValue};

/// Everything the render unit needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// The array being sorted, in its current order
    pub array: Vec<u32>,

    /// Bar currently being compared, if any
    pub highlighted: Option<usize>,

    /// Display snapshot of the loop variables (empty while idle)
    pub memory: Vec<MemoryEntry>,

    /// Whether a run is in progress
    pub is_sorting: bool,

    pub comparisons: usize,
    pub swaps: usize,
}

impl SortState {
    /// Idle state showing `array`
    pub fn new(array: Vec<u32>) -> Self {
        SortState {
            array,
            ..SortState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = SortState::new(vec![3, 1, 2]);
        assert!(!state.is_sorting);
        assert!(state.memory.is_empty());
        assert_eq!(state.highlighted, None);
        assert_eq!(state.comparisons, 0);
    }
}
