#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a command line or
/// building an expression tree.
///
/// Every variant is reported to the user as `Format Error`; the variant and its
/// fields only feed the detailed diagnostic.
pub enum ParseError {
    /// The line is not a rebuild line and not one of the known commands.
    UnknownCommand {
        /// The full line as read.
        command: String,
    },
    /// The rebuild line holds the marker and nothing else.
    MissingExpression,
    /// The token sequence is empty.
    EmptyExpression,
    /// A field is neither an integer literal nor an operator.
    UnexpectedToken {
        /// The field as written.
        token:    String,
        /// Zero-based index of the field after the marker.
        position: usize,
    },
    /// A `~` has no operand anywhere to its right.
    DanglingNegation {
        /// Zero-based index of the `~` after the marker.
        position: usize,
    },
    /// Operands and binary operators do not balance into a single value.
    Unbalanced {
        /// Operand count left after the scan.
        operands:  usize,
        /// Operator count left after the scan.
        operators: usize,
    },
    /// The builder needed another token but the sequence ended.
    UnexpectedEndOfInput {
        /// Index the builder tried to read.
        position: usize,
    },
    /// The expression nests deeper than the builder allows.
    TooDeep {
        /// The maximum supported depth.
        limit: usize,
    },
}

impl ParseError {
    /// The fixed text reported for this error in session output.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn label(&self) -> &'static str {
        "Format Error"
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { command } => write!(f, "Unknown command: '{command}'."),
            Self::MissingExpression => write!(f, "Expected an expression after the marker."),
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::DanglingNegation { position } => {
                write!(f, "Negation at position {position} has no operand.")
            },
            Self::Unbalanced { operands, operators } => write!(f,
                                                               "Operands and operators do not balance: {operands} operand(s) and {operators} operator(s) left over."),
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}.")
            },
            Self::TooDeep { limit } => {
                write!(f, "Expression nests deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
