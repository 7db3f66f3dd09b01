//! # prefix-calc
//!
//! prefix-calc reads prefix (Polish-notation) arithmetic expressions line by
//! line, builds an expression tree, and evaluates it on demand either with
//! checked 32-bit integer arithmetic or with IEEE-754 doubles.
//!
//! A session understands four kinds of lines:
//! - `= <tokens>` replaces the current tree, e.g. `= * ~ 4 5`;
//! - `i` prints the integer value of the current tree;
//! - `d` prints its floating-point value with five decimals;
//! - `end` stops the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::session::{Session, SessionConfig};

/// Defines the expression tree.
///
/// This module declares the `Node` enum and the operator enums that make up a
/// parsed prefix expression. Trees are built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines literal leaves carrying both integer and double representations.
/// - Defines negation and the four binary arithmetic operators.
/// - Renders trees back in prefix notation.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines every error a command can end with, together with the
/// fixed labels (`Format Error`, `Expression Missing`, `Overflow Error`,
/// `Divide Error`) a session writes for them.
///
/// # Responsibilities
/// - Defines error enums for parsing and evaluation failures.
/// - Carries detailed messages for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates reading, building, and evaluating expressions.
///
/// This module ties together the lexer, validator, parser, evaluator and the
/// session loop that drives them.
///
/// # Responsibilities
/// - Classifies input lines and tokens.
/// - Validates and builds expression trees.
/// - Evaluates trees in integer or floating-point mode.
pub mod interpreter;
/// General utilities.
///
/// This module provides output formatting helpers used by the session.
pub mod util;

/// Runs a session over `input`, writing its output to `output`.
///
/// # Errors
/// Returns an error only if reading `input` or writing `output` fails.
pub fn run_session<R: BufRead, W: Write>(input: R,
                                         output: &mut W,
                                         config: SessionConfig)
                                         -> std::io::Result<()> {
    Session::new(config).run(input, output)
}

/// Runs a whole script in memory and returns everything the session printed.
///
/// # Errors
/// Returns an error if the session output could not be collected.
///
/// # Examples
/// ```
/// use prefix_calc::{interpreter::session::SessionConfig, run_script};
///
/// let script = "= + 2 3\ni\nd\n= + 2\ni\nend\ni\n";
/// let output = run_script(script, SessionConfig::default()).unwrap();
/// assert_eq!(output, "5\n5.00000\nFormat Error\nExpression Missing\n");
/// ```
pub fn run_script(source: &str, config: SessionConfig) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run_session(source.as_bytes(), &mut output, config)?;
    Ok(String::from_utf8(output)?)
}
