use crate::{ast::UnaryOperator, interpreter::evaluator::core::EvalResult};

impl UnaryOperator {
    /// Applies the operator to an integer operand.
    ///
    /// Only binary operators are checked. Negation wraps, so `~ -2147483648`
    /// is `-2147483648`.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.eval_int(4), Ok(-4));
    /// assert_eq!(UnaryOperator::Negate.eval_int(i32::MIN), Ok(i32::MIN));
    /// ```
    pub const fn eval_int(self, value: i32) -> EvalResult<i32> {
        match self {
            Self::Negate => Ok(value.wrapping_neg()),
        }
    }

    /// Applies the operator to a floating-point operand.
    #[must_use]
    pub fn eval_double(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
        }
    }
}
