//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`stack`]: operand stack, most recent value on the bottom row
//! - [`input`]: the line being typed
//! - [`status`]: status bar with mode indicators and keybindings
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and borrowed engine state.

pub mod input;
pub mod stack;
pub mod status;

pub use input::render_input_pane;
pub use stack::{render_stack_pane, StackRenderData};
pub use status::{render_status_bar, StatusRenderData};
