//! Trigonometric operator evaluation
//!
//! The primitives work in radians. In degree mode the operand is converted
//! before the call, for the inverse functions too: `asin` of `90` in degree
//! mode evaluates `asin(π/2)`. The result is always returned as the primitive
//! produced it.

use crate::engine::calculator::Calculator;
use crate::engine::errors::CalcError;
use crate::memory::real::Real;

impl Calculator {
    pub(crate) fn evaluate_trig_op(&mut self, f: fn(Real) -> Real) -> Result<(), CalcError> {
        let radians = self.radians;
        self.state.stack.map_top(|x| {
            let x = if radians { x } else { x.deg_to_rad() };
            f(x)
        })
    }
}
