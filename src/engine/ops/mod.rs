//! Arithmetic library
//!
//! [`Operator`] is the catalog of stack operators. Each one knows its arity;
//! the [`Calculator`] checks that arity through `prepare` before the operator
//! runs, so evaluation itself only sequences calls on [`Real`].
//!
//! - `binary`: two operands in, one result out
//! - `unary`: top value replaced in place, plus the two constants
//! - `trig`: unary trigonometry with the degree/radian switch

mod binary;
mod trig;
mod unary;

use super::calculator::Calculator;
use super::errors::CalcError;
use crate::memory::real::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // binary
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// `left * 10^right`
    Scientific,

    // unary
    Square,
    SquareRoot,
    Log10,
    Ln,
    Exp,
    TenPow,
    Reciprocal,
    Negate,

    // nullary
    Pi,
    Euler,

    // trigonometric
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl Operator {
    /// Number of stack operands consumed
    pub fn arity(self) -> usize {
        use Operator::*;
        match self {
            Add | Subtract | Multiply | Divide | Power | Scientific => 2,
            Square | SquareRoot | Log10 | Ln | Exp | TenPow | Reciprocal | Negate => 1,
            Sin | Cos | Tan | Asin | Acos | Atan => 1,
            Pi | Euler => 0,
        }
    }

    /// Short label for key hints and logs
    pub fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "×",
            Divide => "÷",
            Power => "^",
            Scientific => "EE",
            Square => "x²",
            SquareRoot => "√",
            Log10 => "log",
            Ln => "ln",
            Exp => "eˣ",
            TenPow => "10ˣ",
            Reciprocal => "x⁻¹",
            Negate => "(-)",
            Pi => "π",
            Euler => "e",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "sin⁻¹",
            Acos => "cos⁻¹",
            Atan => "tan⁻¹",
        }
    }
}

impl Calculator {
    /// Run `op` on the stack. The caller has already verified the arity.
    pub(crate) fn evaluate_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        use Operator::*;

        match op {
            Add => self.evaluate_binary_op(Real::add),
            Subtract => self.evaluate_binary_op(Real::sub),
            Multiply => self.evaluate_binary_op(Real::mul),
            Divide => self.evaluate_binary_op(Real::div),
            Power => self.evaluate_binary_op(Real::pow),
            Scientific => self.evaluate_binary_op(binary::scientific_literal),

            Square => self.evaluate_unary_op(unary::square),
            SquareRoot => self.evaluate_unary_op(Real::sqrt),
            Log10 => self.evaluate_unary_op(unary::log10),
            Ln => self.evaluate_unary_op(Real::ln),
            Exp => self.evaluate_unary_op(Real::exp),
            TenPow => self.evaluate_unary_op(unary::ten_pow),
            Reciprocal => self.evaluate_unary_op(Real::recip),
            Negate => self.evaluate_unary_op(Real::neg),

            Pi => self.push_constant(Real::PI),
            Euler => self.push_constant(Real::E),

            Sin => self.evaluate_trig_op(Real::sin),
            Cos => self.evaluate_trig_op(Real::cos),
            Tan => self.evaluate_trig_op(Real::tan),
            Asin => self.evaluate_trig_op(Real::asin),
            Acos => self.evaluate_trig_op(Real::acos),
            Atan => self.evaluate_trig_op(Real::atan),
        }
    }
}
