//! Fixed-width real number used by every container in the engine
//!
//! [`Real`] wraps an `f64`. The engine never inspects the representation
//! directly; it only parses typed text, runs the operations below and formats
//! the result for display. Overflow and domain errors follow IEEE-754
//! (`inf`/`NaN`) rather than being trapped.

use std::f64::consts;
use std::fmt;

/// Number of significant digits shown on the display
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Magnitudes at or above this switch normal display to exponent form
const NORMAL_UPPER_LIMIT: f64 = 1e10;

/// Non-zero magnitudes below this switch normal display to exponent form
const NORMAL_LOWER_LIMIT: f64 = 1e-5;

/// How a [`Real`] is rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Plain decimal, falling back to exponent form for very large/small values
    Normal,
    /// Always mantissa and exponent, e.g. `3.14E0`
    #[default]
    Scientific,
}

/// A real number as stored on the operand stack and in the memory queue
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Real(f64);

impl Real {
    pub const ZERO: Real = Real(0.0);
    pub const PI: Real = Real(consts::PI);
    pub const E: Real = Real(consts::E);

    pub const fn new(value: f64) -> Self {
        Real(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Parse typed text. Text that is not a number (a lone `.`) reads as zero.
    pub fn parse(text: &str) -> Self {
        text.trim().parse::<f64>().map(Real).unwrap_or(Real::ZERO)
    }

    pub fn neg(self) -> Self {
        Real(-self.0)
    }

    pub fn add(self, rhs: Real) -> Self {
        Real(self.0 + rhs.0)
    }

    pub fn sub(self, rhs: Real) -> Self {
        Real(self.0 - rhs.0)
    }

    pub fn mul(self, rhs: Real) -> Self {
        Real(self.0 * rhs.0)
    }

    pub fn div(self, rhs: Real) -> Self {
        Real(self.0 / rhs.0)
    }

    pub fn pow(self, exponent: Real) -> Self {
        Real(self.0.powf(exponent.0))
    }

    pub fn sqrt(self) -> Self {
        Real(self.0.sqrt())
    }

    pub fn ln(self) -> Self {
        Real(self.0.ln())
    }

    pub fn exp(self) -> Self {
        Real(self.0.exp())
    }

    pub fn recip(self) -> Self {
        Real(1.0 / self.0)
    }

    pub fn deg_to_rad(self) -> Self {
        Real(self.0.to_radians())
    }

    pub fn sin(self) -> Self {
        Real(self.0.sin())
    }

    pub fn cos(self) -> Self {
        Real(self.0.cos())
    }

    pub fn tan(self) -> Self {
        Real(self.0.tan())
    }

    pub fn asin(self) -> Self {
        Real(self.0.asin())
    }

    pub fn acos(self) -> Self {
        Real(self.0.acos())
    }

    pub fn atan(self) -> Self {
        Real(self.0.atan())
    }

    /// Little-endian bytes, as written to the persistence store
    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Real(f64::from_le_bytes(bytes))
    }

    /// Render for the display
    pub fn format(self, mode: DisplayMode) -> String {
        if !self.0.is_finite() {
            return self.0.to_string();
        }
        match mode {
            DisplayMode::Scientific => format_scientific(self.0),
            DisplayMode::Normal => format_normal(self.0),
        }
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DisplayMode::Normal))
    }
}

fn format_scientific(value: f64) -> String {
    let raw = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = trim_fraction(mantissa);
            let mantissa = if mantissa == "-0" { "0" } else { mantissa };
            format!("{}E{}", mantissa, exponent)
        }
        None => raw,
    }
}

fn format_normal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(NORMAL_LOWER_LIMIT..NORMAL_UPPER_LIMIT).contains(&magnitude) {
        return format_scientific(value);
    }

    let exponent = magnitude.log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    let raw = format!("{:.*}", decimals, value);

    // Rounding can carry into an extra integer digit, e.g. 9999999999.5
    let integer_digits = raw
        .trim_start_matches('-')
        .split('.')
        .next()
        .map_or(0, str::len);
    if integer_digits > SIGNIFICANT_DIGITS {
        return format_scientific(value);
    }

    let trimmed = trim_fraction(&raw);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_text() {
        assert_eq!(Real::parse("3.14"), Real::new(3.14));
        assert_eq!(Real::parse("3."), Real::new(3.0));
        assert_eq!(Real::parse(".5"), Real::new(0.5));
        assert_eq!(Real::parse("."), Real::ZERO);
        assert_eq!(Real::parse("007   "), Real::new(7.0));
    }

    #[test]
    fn test_normal_format() {
        assert_eq!(Real::new(3.14).format(DisplayMode::Normal), "3.14");
        assert_eq!(Real::new(2.0).format(DisplayMode::Normal), "2");
        assert_eq!(Real::new(-0.5).format(DisplayMode::Normal), "-0.5");
        assert_eq!(Real::new(1.0 / 3.0).format(DisplayMode::Normal), "0.3333333333");
        assert_eq!(Real::new(1e12).format(DisplayMode::Normal), "1E12");
        assert_eq!(Real::ZERO.format(DisplayMode::Normal), "0");
    }

    #[test]
    fn test_normal_format_rounding_carry() {
        assert_eq!(Real::new(9999999999.0).format(DisplayMode::Normal), "9999999999");
        assert_eq!(Real::new(9999999999.7).format(DisplayMode::Normal), "1E10");
        assert_eq!(Real::new(-9999999999.7).format(DisplayMode::Normal), "-1E10");
    }

    #[test]
    fn test_scientific_format() {
        assert_eq!(Real::new(3.14).format(DisplayMode::Scientific), "3.14E0");
        assert_eq!(Real::new(-1500.0).format(DisplayMode::Scientific), "-1.5E3");
        assert_eq!(Real::new(0.001).format(DisplayMode::Scientific), "1E-3");
        assert_eq!(Real::ZERO.format(DisplayMode::Scientific), "0E0");
    }

    #[test]
    fn test_non_finite_format() {
        assert_eq!(Real::new(1.0).div(Real::ZERO).format(DisplayMode::Normal), "inf");
        assert_eq!(Real::new(-1.0).sqrt().format(DisplayMode::Scientific), "NaN");
    }

    #[test]
    fn test_byte_round_trip() {
        let value = Real::new(-12.625);
        assert_eq!(Real::from_le_bytes(value.to_le_bytes()), value);
    }
}
