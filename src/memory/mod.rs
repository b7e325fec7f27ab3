//! Memory model for the calculator engine
//!
//! This module provides the bounded containers the engine mutates:
//! - [`real`]: the fixed-width [`real::Real`] number and its display formats
//! - [`input`]: the line of text being typed
//! - [`stack`]: the operand stack
//! - [`queue`]: the memory queue
//!
//! [`EngineState`] groups the three containers so the undo slot can copy the
//! whole working set in one assignment.
//!
//! # Capacities
//!
//! | Container | Capacity |
//! |-----------|----------|
//! | input     | 20 chars |
//! | stack     | 100      |
//! | queue     | 50       |

pub mod input;
pub mod queue;
pub mod real;
pub mod stack;

use input::InputBuffer;
use queue::MemoryQueue;
use stack::OperandStack;

/// Everything a single undo step restores
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineState {
    pub input: InputBuffer,
    pub stack: OperandStack,
    pub queue: MemoryQueue,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }
}
