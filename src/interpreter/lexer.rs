use logos::Logos;

use crate::ast::BinaryOperator;

/// Represents a classified field of a rebuild line.
///
/// A rebuild line is first split on whitespace; each field is then run through
/// this lexer on its own and is recognized only when a single token spans the
/// whole field. `5+3` is therefore one unrecognized field, not three tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens with an optional sign, such as `42`, `-7` or
    /// `+3`. Literals outside the `i32` range are rejected.
    #[regex(r"[+-]?[0-9]+", parse_integer)]
    Integer(i32),
    /// Binary operator tokens: `+`, `-`, `*` and `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Binary(BinaryOperator),
    /// `~`, unary negation.
    #[token("~")]
    Tilde,
}

impl Token {
    /// Classifies a single whitespace-free field.
    ///
    /// # Returns
    /// - `Some(Token)` if exactly one token covers the whole field.
    /// - `None` if the field holds anything else.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::{ast::BinaryOperator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::classify("-12"), Some(Token::Integer(-12)));
    /// assert_eq!(Token::classify("-"), Some(Token::Binary(BinaryOperator::Sub)));
    /// assert_eq!(Token::classify("5+3"), None);
    /// assert_eq!(Token::classify("99999999999"), None);
    /// ```
    #[must_use]
    pub fn classify(field: &str) -> Option<Self> {
        let mut lexer = Self::lexer(field);
        let token = lexer.next()?.ok()?;
        if lexer.next().is_some() {
            return None;
        }
        Some(token)
    }
}

/// Splits a raw line into fields, dropping empty ones.
///
/// # Example
/// ```
/// use prefix_calc::interpreter::lexer::split_fields;
///
/// assert_eq!(split_fields("=  + 2\t3 "), vec!["=", "+", "2", "3"]);
/// ```
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i32)`: The parsed value if it fits in 32 bits.
/// - `None`: Otherwise.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i32> {
    lex.slice().parse().ok()
}
