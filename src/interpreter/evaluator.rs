/// Core evaluation logic and the expression tree.
///
/// Contains the `ExpressionTree` holder, the recursive dispatch over node
/// variants for both evaluation modes, and the missing-expression check.
pub mod core;

/// Unary operator evaluation.
///
/// Implements negation in checked-integer and floating-point mode.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * /` in checked-integer and floating-point mode.
pub mod binary;
