//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data borrowed from the
//! [`App`](crate::ui::App).
//!
//! # Pane Modules
//!
//! - [`chart`]: bar chart of the array with the compared bar highlighted
//! - [`parameters`]: the driver's loop variables, or "Idle"
//! - [`controls`]: start/pause buttons and the speed slider
//! - [`status`]: status bar with run state, counters and keybindings

pub mod chart;
pub mod controls;
pub mod parameters;
pub mod status;

// Re-export render functions for convenience
pub use chart::{layout_bars, render_chart_pane, ArrayChart, BarLayout, LinearScale};
pub use controls::{render_controls_pane, ControlsRenderData};
pub use parameters::render_parameters_pane;
pub use status::{render_status_bar, StatusRenderData};
