//! Memory queue: a bounded side store filled one value at a time and drained
//! back onto the stack as a single batch.

use super::real::Real;
use super::stack::OperandStack;
use crate::engine::constants::QUEUE_SIZE;
use crate::engine::errors::CalcError;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryQueue {
    slots: [Real; QUEUE_SIZE],
    len: usize,
}

impl MemoryQueue {
    pub fn new() -> Self {
        MemoryQueue {
            slots: [Real::ZERO; QUEUE_SIZE],
            len: 0,
        }
    }

    /// Rebuild a queue from persisted slots and count
    pub fn from_parts(slots: [Real; QUEUE_SIZE], len: usize) -> Option<Self> {
        (len <= QUEUE_SIZE).then_some(MemoryQueue { slots, len })
    }

    /// Append a value at the tail
    pub fn append(&mut self, value: Real) -> Result<(), CalcError> {
        if self.len == QUEUE_SIZE {
            return Err(CalcError::QueueFull);
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Move every queued value onto `stack` in queue order, then empty the queue.
    ///
    /// Nothing moves unless the whole batch fits.
    pub fn drain_into(&mut self, stack: &mut OperandStack) -> Result<(), CalcError> {
        if self.len == 0 {
            return Err(CalcError::QueueEmpty);
        }
        if stack.free() < self.len {
            return Err(CalcError::StackOverflow);
        }
        for &value in &self.slots[..self.len] {
            stack.push(value)?;
        }
        self.len = 0;
        Ok(())
    }

    /// All slots including unused ones, as persisted
    pub fn slots(&self) -> &[Real; QUEUE_SIZE] {
        &self.slots
    }

    pub fn values(&self) -> &[Real] {
        &self.slots[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_SIZE
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}
