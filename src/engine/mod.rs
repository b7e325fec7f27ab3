//! RPN calculator engine
//!
//! This module provides the command logic on top of the [`memory`] model:
//! - [`calculator`]: the [`Calculator`] with its input, stack, queue and undo commands
//! - [`ops`]: the arithmetic library
//! - [`dispatch`]: keypad keys resolved through the normal and 2nd layers
//! - [`errors`]: command error types
//! - [`constants`]: container capacities
//!
//! # Execution Model
//!
//! One key is processed at a time. The dispatcher resolves the key, checks the
//! command's preconditions, takes the undo snapshot when the command changes
//! committed state, and applies it. A rejected command changes nothing.
//!
//! [`memory`]: crate::memory
//! [`Calculator`]: calculator::Calculator

pub mod calculator;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod ops;
