//! Binary operator evaluation

use crate::engine::calculator::Calculator;
use crate::engine::errors::CalcError;
use crate::memory::real::Real;

const TEN: Real = Real::new(10.0);

/// `mantissa * 10^exponent`, the EE key
pub(super) fn scientific_literal(mantissa: Real, exponent: Real) -> Real {
    mantissa.mul(TEN.pow(exponent))
}

impl Calculator {
    /// Replace the two topmost values with `f(second, top)`
    pub(crate) fn evaluate_binary_op(
        &mut self,
        f: fn(Real, Real) -> Real,
    ) -> Result<(), CalcError> {
        self.state.stack.combine_top2(f)
    }
}
