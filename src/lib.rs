//! # Introduction
//!
//! RPNTTY is a keypad-style Reverse Polish Notation calculator for the
//! terminal. Values are typed on an input line, committed to a bounded operand
//! stack and combined by operators; a memory queue holds values across
//! sessions and every committed change can be undone once.
//! The screen is drawn with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Terminal key → Keymap → Key → Dispatcher → Calculator → Panes
//!                                               ↓
//!                                        KeyValueStore
//! ```
//!
//! 1. [`ui::keymap`]: maps keyboard events onto calculator keypad keys.
//! 2. [`engine`]: resolves keys through the normal or 2nd layer, checks
//!    operand counts and capacities, snapshots for undo, and runs the command.
//! 3. [`memory`]: the bounded containers: input line, operand stack, memory
//!    queue, and the [`memory::real::Real`] number they hold.
//! 4. [`snapshot`]: the single-slot undo manager.
//! 5. [`persist`]: named-record store for the memory queue and theme.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Capacities
//!
//! Input line: 20 characters. Stack: 100 values. Memory queue: 50 values.

pub mod config;
pub mod engine;
pub mod logging;
pub mod memory;
pub mod persist;
pub mod snapshot;
pub mod ui;
