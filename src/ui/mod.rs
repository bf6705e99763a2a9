//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, async event loop, key handling
//! - **[`panes`]** — stateless render functions for each visible pane (chart,
//!   parameters, controls, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SortDriver`] and the array to show, then await [`App::run`] on a Tokio
//! runtime.
//!
//! [`SortDriver`]: crate::driver::SortDriver
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
