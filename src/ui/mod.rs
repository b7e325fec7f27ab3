//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the blocking keyboard event loop
//! - **[`keymap`]**: translation of terminal key events to keypad keys
//! - **[`panes`]**: stateless render functions for the stack, input line and status bar
//! - **[`theme`]**: the selectable color palettes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Calculator`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::engine::calculator::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
