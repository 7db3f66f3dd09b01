/// Represents a node of a prefix expression tree.
///
/// `Node` is a closed set of variants: literal leaves, negation, and the four
/// binary arithmetic operators. Every operator node exclusively owns its
/// children, so a tree has no shared or back references and is dropped as a
/// whole when its root is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal leaf.
    Value {
        /// The literal as a 32-bit signed integer.
        int_value:    i32,
        /// The same literal as a double, set once when the leaf is built.
        double_value: f64,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The single operand.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a literal leaf holding both representations of `value`.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::ast::Node;
    ///
    /// let leaf = Node::value(-7);
    /// assert_eq!(leaf, Node::Value { int_value: -7, double_value: -7.0 });
    /// ```
    #[must_use]
    pub fn value(value: i32) -> Self {
        Self::Value { int_value:    value,
                      double_value: f64::from(value), }
    }

    /// Creates a negation node owning `operand`.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryOp { op:      UnaryOperator::Negate,
                        operand: Box::new(operand), }
    }

    /// Creates a binary node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf, counting both ends.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Value { .. } => 1,
            Self::UnaryOp { operand, .. } => 1 + operand.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`~`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "~"),
        }
    }
}

/// Writes the tree back in prefix notation, tokens separated by one space.
///
/// # Example
/// ```
/// use prefix_calc::ast::{BinaryOperator, Node};
///
/// let tree = Node::binary(BinaryOperator::Mul, Node::negate(Node::value(4)), Node::value(5));
/// assert_eq!(tree.to_string(), "* ~ 4 5");
/// ```
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value { int_value, .. } => write!(f, "{int_value}"),
            Self::UnaryOp { op, operand } => write!(f, "{op} {operand}"),
            Self::BinaryOp { op, left, right } => write!(f, "{op} {left} {right}"),
        }
    }
}
