/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks a tree recursively in one of two modes: checked 32-bit
/// integer arithmetic, which fails on overflow and division by zero, and
/// IEEE-754 double arithmetic, which never fails.
///
/// # Responsibilities
/// - Holds the current tree and replaces it as a whole on rebuild.
/// - Dispatches evaluation on the node variant.
/// - Reports missing expressions, overflow and division by zero.
pub mod evaluator;
/// The lexer module classifies the fields of a rebuild line.
///
/// A line is split on whitespace and every field is classified on its own as
/// an integer literal, a binary operator or the negation operator.
///
/// # Responsibilities
/// - Splits raw lines into fields.
/// - Recognizes signed 32-bit integer literals and the operator symbols.
pub mod lexer;
/// The parser module builds the expression tree from classified tokens.
///
/// The parser strips the marker field, runs the validator, and then builds the
/// tree by recursive descent over a shared cursor.
///
/// # Responsibilities
/// - Rejects marker-only lines.
/// - Converts tokens into owned tree nodes, children in token order.
/// - Bounds the nesting depth of the tree.
pub mod parser;
/// The session module runs the command loop.
///
/// A session reads lines, dispatches on rebuild and evaluation commands, keeps
/// the current expression tree, and formats results and error labels.
///
/// # Responsibilities
/// - Classifies command lines.
/// - Recovers from every command error and keeps going.
/// - Writes protocol output and, in verbose mode, diagnostics.
pub mod session;
/// The validator module checks arity balance before anything is built.
///
/// A single right-to-left scan counts supplied values and pending operators
/// without building any structure.
pub mod validator;
