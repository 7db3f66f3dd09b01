#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
///
/// Only integer evaluation can fail on arithmetic; floating-point evaluation
/// follows IEEE-754 and can only fail when there is no tree.
pub enum RuntimeError {
    /// Evaluation was requested while no tree is held.
    ExpressionMissing,
    /// An integer result does not fit in 32 bits.
    Overflow {
        /// The operation that overflowed, in prefix form.
        details: String,
    },
    /// Integer division by zero.
    DivisionByZero {
        /// The dividend of the failed division.
        dividend: i32,
    },
}

impl RuntimeError {
    /// The fixed text reported for this error in session output.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::error::RuntimeError;
    ///
    /// assert_eq!(RuntimeError::ExpressionMissing.label(), "Expression Missing");
    /// assert_eq!(RuntimeError::DivisionByZero { dividend: 1 }.label(), "Divide Error");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ExpressionMissing => "Expression Missing",
            Self::Overflow { .. } => "Overflow Error",
            Self::DivisionByZero { .. } => "Divide Error",
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpressionMissing => write!(f, "No expression has been built yet."),
            Self::Overflow { details } => {
                write!(f, "Integer overflow while trying to compute '{details}'.")
            },
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
        }
    }
}

impl std::error::Error for RuntimeError {}
