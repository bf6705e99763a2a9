//! # Introduction
//!
//! BubbleTTY animates bubble sort over a small array in the terminal. Every
//! comparison is shown as a highlighted bar, and the sort's loop variables are
//! listed in a side panel while the run is paused between steps.
//!
//! ## Pipeline
//!
//! ```text
//! Settings → SortDriver ──publish──▶ watch channel ──▶ App → panes
//!                ▲                                       │
//!                └──── SortControls (start/pause/speed) ◀┘
//! ```
//!
//! 1. [`config`] — defaults, TOML settings file and command-line overrides.
//! 2. [`driver`] — the step-by-step sort, its pause gate and speed slider, and
//!    the [`driver::SortObserver`] interface it publishes through.
//! 3. [`state`] — [`state::SortState`], the observable state the driver owns.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`error`] and [`logging`] — error types and tracing setup for the binary.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod state;
pub mod ui;
