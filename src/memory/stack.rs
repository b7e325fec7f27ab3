//! Operand stack implementation
//!
//! This module provides the bounded operand stack used for RPN evaluation:
//! - [`OperandStack`]: fixed array of [`STACK_SIZE`] slots plus a length counter
//!
//! # Bounds
//!
//! Only slots `[0, len)` are meaningful. Every accessor checks the counter
//! before touching a slot, so operators can never read stale values past the
//! top. Slots above the top keep whatever was last written there; they are
//! copied by snapshots but never observed.

use super::real::Real;
use crate::engine::constants::STACK_SIZE;
use crate::engine::errors::CalcError;

/// The operand stack
#[derive(Debug, Clone, PartialEq)]
pub struct OperandStack {
    slots: [Real; STACK_SIZE],
    len: usize,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack {
            slots: [Real::ZERO; STACK_SIZE],
            len: 0,
        }
    }

    /// Push a value onto the top
    pub fn push(&mut self, value: Real) -> Result<(), CalcError> {
        if self.len == STACK_SIZE {
            return Err(CalcError::StackFull);
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<Real, CalcError> {
        if self.len == 0 {
            return Err(CalcError::StackEmpty);
        }
        self.len -= 1;
        Ok(self.slots[self.len])
    }

    /// Get the top value
    pub fn top(&self) -> Option<Real> {
        self.len.checked_sub(1).map(|i| self.slots[i])
    }

    /// Exchange the two topmost values
    pub fn swap_top2(&mut self) -> Result<(), CalcError> {
        if self.len < 2 {
            return Err(CalcError::StackEmpty);
        }
        self.slots.swap(self.len - 1, self.len - 2);
        Ok(())
    }

    /// Replace the top value with `f(top)`
    pub fn map_top(&mut self, f: impl FnOnce(Real) -> Real) -> Result<(), CalcError> {
        let top = self.len.checked_sub(1).ok_or(CalcError::StackEmpty)?;
        self.slots[top] = f(self.slots[top]);
        Ok(())
    }

    /// Replace the two topmost values with `f(second, top)`
    pub fn combine_top2(&mut self, f: impl FnOnce(Real, Real) -> Real) -> Result<(), CalcError> {
        if self.len < 2 {
            return Err(CalcError::StackEmpty);
        }
        let left = self.slots[self.len - 2];
        let right = self.slots[self.len - 1];
        self.slots[self.len - 2] = f(left, right);
        self.len -= 1;
        Ok(())
    }

    /// Number of free slots
    pub fn free(&self) -> usize {
        STACK_SIZE - self.len
    }

    /// Get the meaningful values, bottom first (for UI display)
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
        self.len == STACK_SIZE
    }
}

impl Default for OperandStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> OperandStack {
        let mut stack = OperandStack::new();
        for &v in values {
            stack.push(Real::new(v)).expect("push failed");
        }
        stack
    }

    #[test]
    fn test_push_until_full() {
        let mut stack = OperandStack::new();
        for i in 0..STACK_SIZE {
            stack.push(Real::new(i as f64)).expect("push within capacity");
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(Real::ZERO), Err(CalcError::StackFull));
        assert_eq!(stack.len(), STACK_SIZE);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = OperandStack::new();
        assert_eq!(stack.pop(), Err(CalcError::StackEmpty));
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_combine_uses_second_as_left_operand() {
        let mut stack = stack_of(&[10.0, 4.0]);
        stack.combine_top2(Real::sub).expect("two operands");
        assert_eq!(stack.values(), &[Real::new(6.0)]);
    }

    #[test]
    fn test_combine_needs_two_values() {
        let mut stack = stack_of(&[1.0]);
        assert_eq!(stack.combine_top2(Real::add), Err(CalcError::StackEmpty));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_swap_and_map_top() {
        let mut stack = stack_of(&[1.0, 2.0]);
        stack.swap_top2().expect("two operands");
        assert_eq!(stack.values(), &[Real::new(2.0), Real::new(1.0)]);
        stack.map_top(Real::neg).expect("one operand");
        assert_eq!(stack.top(), Some(Real::new(-1.0)));
    }
}
