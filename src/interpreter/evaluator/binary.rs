use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

impl BinaryOperator {
    /// Applies the operator to two integers with checked arithmetic.
    ///
    /// Division truncates toward zero. A zero divisor is reported before any
    /// overflow check, so `/ x 0` is always `DivisionByZero`; the only
    /// overflowing division is `/ -2147483648 -1`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `Overflow` if the exact result does not fit in an `i32`.
    /// - `DivisionByZero` if `self` is `Div` and `right` is zero.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::Div.eval_int(-7, 2), Ok(-3));
    /// assert_eq!(BinaryOperator::Div.eval_int(10, 0),
    ///            Err(RuntimeError::DivisionByZero { dividend: 10 }));
    /// assert!(matches!(BinaryOperator::Mul.eval_int(i32::MAX, 2),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn eval_int(self, left: i32, right: i32) -> EvalResult<i32> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { dividend: left });
                }
                left.checked_div(right)
            },
        };
        result.ok_or_else(|| RuntimeError::Overflow { details: format!("{self} {left} {right}") })
    }

    /// Applies the operator to two doubles with IEEE-754 semantics.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.eval_double(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Div.eval_double(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_double(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}
