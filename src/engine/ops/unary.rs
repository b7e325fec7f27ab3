//! Unary operator evaluation and constants

use crate::engine::calculator::Calculator;
use crate::engine::errors::CalcError;
use crate::memory::real::Real;

const TEN: Real = Real::new(10.0);

pub(super) fn square(x: Real) -> Real {
    x.mul(x)
}

/// Base-10 logarithm computed as `ln(x) / ln(10)`
pub(super) fn log10(x: Real) -> Real {
    x.ln().div(TEN.ln())
}

pub(super) fn ten_pow(x: Real) -> Real {
    TEN.pow(x)
}

impl Calculator {
    /// Replace the top value with `f(top)`
    pub(crate) fn evaluate_unary_op(&mut self, f: fn(Real) -> Real) -> Result<(), CalcError> {
        self.state.stack.map_top(f)
    }

    /// Push a constant without consuming anything
    pub(crate) fn push_constant(&mut self, value: Real) -> Result<(), CalcError> {
        self.state.stack.push(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log10_matches_std() {
        for x in [0.5, 1.0, 2.0, 1000.0] {
            assert!((log10(Real::new(x)).value() - x.log10()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ten_pow() {
        assert!((ten_pow(Real::new(3.0)).value() - 1000.0).abs() < 1e-9);
    }
}
