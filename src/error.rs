/// Parsing errors.
///
/// Defines all error types that can occur while classifying command lines,
/// validating token sequences and building expression trees. All of them are
/// reported as `Format Error`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: a missing
/// expression, integer overflow, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a session command can end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line or its expression could not be parsed.
    Parse(ParseError),
    /// The current tree could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// The fixed text reported for this error in session output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.label(),
            Self::Runtime(e) => e.label(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
