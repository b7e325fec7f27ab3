//! Input line accumulating the operand being typed
//!
//! The buffer holds at most [`INPUT_SIZE`] characters (digits and one `.`),
//! plus a pending sign that is applied when the value is committed.

use super::real::Real;
use crate::engine::constants::INPUT_SIZE;
use crate::engine::errors::CalcError;

/// Text of the operand currently being typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    text: String,
    has_decimal_point: bool,
    is_negative: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer {
            text: String::with_capacity(INPUT_SIZE),
            has_decimal_point: false,
            is_negative: false,
        }
    }

    /// Append a digit or the decimal point
    pub fn append(&mut self, c: char) -> Result<(), CalcError> {
        if !(c.is_ascii_digit() || c == '.') {
            return Err(CalcError::InvalidDigit(c));
        }
        if self.text.len() == INPUT_SIZE {
            return Err(CalcError::BufferFull);
        }
        if c == '.' {
            if self.has_decimal_point {
                return Err(CalcError::DuplicateDecimal);
            }
            self.has_decimal_point = true;
        }
        self.text.push(c);
        Ok(())
    }

    /// Remove the last typed character. Returns `false` when already empty.
    pub fn backspace(&mut self) -> bool {
        match self.text.pop() {
            Some(removed) => {
                if removed == '.' {
                    self.has_decimal_point = false;
                }
                if self.text.is_empty() {
                    self.is_negative = false;
                }
                true
            }
            None => false,
        }
    }

    /// Reset every field
    pub fn clear(&mut self) {
        self.text.clear();
        self.has_decimal_point = false;
        self.is_negative = false;
    }

    pub fn toggle_sign(&mut self) {
        self.is_negative = !self.is_negative;
    }

    /// Parse the typed text with the pending sign applied
    pub fn value(&self) -> Real {
        let value = Real::parse(&self.text);
        if self.is_negative {
            value.neg()
        } else {
            value
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text blank-filled to the full line width
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.text, width = INPUT_SIZE)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut buffer = InputBuffer::new();
        for c in text.chars() {
            buffer.append(c).expect("append failed");
        }
        buffer
    }

    #[test]
    fn test_append_tracks_decimal_point() {
        let mut buffer = typed("3.1");
        assert!(buffer.has_decimal_point());
        assert_eq!(buffer.append('.'), Err(CalcError::DuplicateDecimal));
        assert_eq!(buffer.text(), "3.1");
    }

    #[test]
    fn test_append_rejects_when_full() {
        let mut buffer = typed(&"9".repeat(INPUT_SIZE));
        assert_eq!(buffer.append('1'), Err(CalcError::BufferFull));
        assert_eq!(buffer.len(), INPUT_SIZE);
    }

    #[test]
    fn test_append_rejects_letters() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.append('x'), Err(CalcError::InvalidDigit('x')));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_backspace_over_decimal_point() {
        let mut buffer = typed("2.");
        assert!(buffer.backspace());
        assert!(!buffer.has_decimal_point());
        buffer.append('.').expect("decimal point allowed again");
        assert_eq!(buffer.text(), "2.");
    }

    #[test]
    fn test_backspace_to_empty_clears_sign() {
        let mut buffer = typed("7");
        buffer.toggle_sign();
        assert!(buffer.is_negative());
        assert!(buffer.backspace());
        assert!(!buffer.is_negative());
        assert!(!buffer.backspace());
    }

    #[test]
    fn test_value_applies_sign() {
        let mut buffer = typed("12.5");
        buffer.toggle_sign();
        assert_eq!(buffer.value(), Real::new(-12.5));
    }

    #[test]
    fn test_padded_width() {
        let buffer = typed("42");
        let padded = buffer.padded();
        assert_eq!(padded.len(), INPUT_SIZE);
        assert!(padded.starts_with("42 "));
    }
}
