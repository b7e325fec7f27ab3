//! Command error types for the calculator engine
//!
//! This module defines [`CalcError`], the reason a command declined to run.
//!
//! Every error is local and recoverable: the command leaves the engine state
//! untouched and the dispatcher simply does not redraw.

use thiserror::Error;

/// Reasons a calculator command can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input line already holds the maximum number of characters
    #[error("input line is full")]
    BufferFull,

    /// Commit requested with nothing typed
    #[error("nothing typed to enter")]
    BufferEmpty,

    /// A second decimal point was typed
    #[error("input already contains a decimal point")]
    DuplicateDecimal,

    /// Only digits and the decimal point can be typed
    #[error("'{0}' cannot be typed into a number")]
    InvalidDigit(char),

    /// Not enough operands on the stack
    #[error("not enough values on the stack")]
    StackEmpty,

    /// No free slot for one more value
    #[error("stack is full")]
    StackFull,

    /// Not enough free slots to receive a whole batch
    #[error("stack cannot hold the whole memory queue")]
    StackOverflow,

    #[error("memory queue is full")]
    QueueFull,

    #[error("memory queue is empty")]
    QueueEmpty,

    /// Undo requested with no saved state
    #[error("nothing to undo")]
    NoSnapshot,
}
