use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::ParseResult},
};

/// Returns whether `tokens` form a well-formed prefix expression.
///
/// This is [`check`] with the reason for rejection discarded.
///
/// # Example
/// ```
/// use prefix_calc::interpreter::validator::validate;
///
/// assert!(validate(&["+", "2", "3"]));
/// assert!(validate(&["*", "~", "4", "5"]));
/// assert!(!validate(&["+", "2"]));
/// assert!(!validate(&["~"]));
/// assert!(!validate(&[]));
/// ```
#[must_use]
pub fn validate(tokens: &[&str]) -> bool {
    check(tokens).is_ok()
}

/// Checks that `tokens` form a well-formed prefix expression and classifies
/// them.
///
/// The sequence is scanned once from right to left, which turns prefix
/// notation into postfix: every integer supplies a value, every binary
/// operator demands one more, and as soon as a supplied pair can satisfy a
/// pending operator both counters drop by one. A `~` neither supplies nor
/// demands but needs at least one value to its right. The sequence is valid
/// when exactly one value and no pending operator remain.
///
/// The scan only balances arity. Tokens left after a complete leading
/// expression (as in `2 3 +`) are not detected here.
///
/// # Parameters
/// - `tokens`: The fields of a rebuild line, marker removed.
///
/// # Returns
/// The classified tokens, in input order.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `UnexpectedToken` for a field that is neither an integer nor an operator.
/// - `DanglingNegation` for a `~` with no integer to its right.
/// - `Unbalanced` if the counters do not end at one operand and no operator.
pub fn check(tokens: &[&str]) -> ParseResult<Vec<Token>> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut classified = Vec::with_capacity(tokens.len());
    let mut operands = 0usize;
    let mut operators = 0usize;

    for (position, field) in tokens.iter().enumerate().rev() {
        let token = Token::classify(field).ok_or_else(|| {
                                               ParseError::UnexpectedToken { token: (*field).to_string(),
                                                                             position }
                                           })?;
        match token {
            Token::Integer(_) => operands += 1,
            Token::Tilde if operands > 0 => {},
            Token::Tilde => return Err(ParseError::DanglingNegation { position }),
            Token::Binary(_) => operators += 1,
        }
        if operands > 1 && operators > 0 {
            operands -= 1;
            operators -= 1;
        }
        classified.push(token);
    }

    if operands != 1 || operators != 0 {
        return Err(ParseError::Unbalanced { operands, operators });
    }

    classified.reverse();
    Ok(classified)
}
