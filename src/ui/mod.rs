//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: session state, keyboard event loop, pane focus, playback timing
//! - **[`panes`]**: stateless render functions for each visible pane (bar chart,
//!   step log, pseudocode, saved visualizations, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`ReplayDriver`](crate::driver::ReplayDriver)
//! and a store, then call [`App::run`] to start the event loop.
//!
//! [`ReplayDriver`]: crate::driver::ReplayDriver
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
