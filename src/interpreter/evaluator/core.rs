use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        lexer::split_fields,
        parser::{ParseResult, build},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the expression a session currently evaluates.
///
/// A tree is either empty or holds exactly one root built from a fully
/// validated expression. It starts empty and is replaced as a whole by
/// [`ExpressionTree::rebuild`]; a failed rebuild leaves it empty.
///
/// ## Usage
///
/// ```
/// use prefix_calc::{error::RuntimeError, interpreter::evaluator::core::ExpressionTree};
///
/// let mut tree = ExpressionTree::new();
/// assert_eq!(tree.evaluate_int(), Err(RuntimeError::ExpressionMissing));
///
/// tree.rebuild("= * ~ 4 5").unwrap();
/// assert_eq!(tree.evaluate_int(), Ok(-20));
/// assert_eq!(tree.evaluate_double(), Ok(-20.0));
///
/// assert!(tree.rebuild("= + 2").is_err());
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the root node, if a tree is held.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns `true` when no tree is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Replaces the tree with the one described by a rebuild line.
    ///
    /// The previous tree is discarded before building, so on failure the tree
    /// is left empty regardless of what it held.
    ///
    /// # Parameters
    /// - `line`: The full rebuild line, marker included.
    ///
    /// # Errors
    /// Any `ParseError` from [`build`].
    pub fn rebuild(&mut self, line: &str) -> ParseResult<&Node> {
        self.root = None;
        let root = build(&split_fields(line))?;
        Ok(self.root.insert(root))
    }

    /// Evaluates the tree with checked 32-bit integer arithmetic.
    ///
    /// # Errors
    /// - `ExpressionMissing` if no tree is held.
    /// - `Overflow` or `DivisionByZero` from any node.
    pub fn evaluate_int(&self) -> EvalResult<i32> {
        self.root
            .as_ref()
            .ok_or(RuntimeError::ExpressionMissing)?
            .eval_int()
    }

    /// Evaluates the tree with IEEE-754 double arithmetic.
    ///
    /// # Errors
    /// `ExpressionMissing` if no tree is held. Arithmetic never fails.
    pub fn evaluate_double(&self) -> EvalResult<f64> {
        self.root
            .as_ref()
            .map(Node::eval_double)
            .ok_or(RuntimeError::ExpressionMissing)
    }
}

impl Node {
    /// Evaluates this subtree with checked 32-bit integer arithmetic.
    ///
    /// Leaves yield their integer literal. Operators evaluate their children
    /// left to right and combine them with [`UnaryOperator::eval_int`] or
    /// [`BinaryOperator::eval_int`]. The first failure aborts the whole
    /// evaluation.
    ///
    /// [`UnaryOperator::eval_int`]: crate::ast::UnaryOperator::eval_int
    /// [`BinaryOperator::eval_int`]: crate::ast::BinaryOperator::eval_int
    ///
    /// # Example
    /// ```
    /// use prefix_calc::ast::{BinaryOperator, Node};
    ///
    /// let sum = Node::binary(BinaryOperator::Add, Node::value(2), Node::value(3));
    /// assert_eq!(sum.eval_int(), Ok(5));
    /// ```
    pub fn eval_int(&self) -> EvalResult<i32> {
        match self {
            Self::Value { int_value, .. } => Ok(*int_value),
            Self::UnaryOp { op, operand } => op.eval_int(operand.eval_int()?),
            Self::BinaryOp { op, left, right } => {
                let left = left.eval_int()?;
                let right = right.eval_int()?;
                op.eval_int(left, right)
            },
        }
    }

    /// Evaluates this subtree with IEEE-754 double arithmetic.
    ///
    /// Leaves yield their stored double; no integer value is converted here.
    /// Overflow and division by zero produce infinities or NaN.
    #[must_use]
    pub fn eval_double(&self) -> f64 {
        match self {
            Self::Value { double_value, .. } => *double_value,
            Self::UnaryOp { op, operand } => op.eval_double(operand.eval_double()),
            Self::BinaryOp { op, left, right } => {
                op.eval_double(left.eval_double(), right.eval_double())
            },
        }
    }
}
