use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, validator::check},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest tree the builder accepts. Evaluation recurses as deep as the tree,
/// so this also bounds evaluation.
pub const MAX_DEPTH: usize = 1000;

/// Builds an expression tree from the fields of a rebuild line.
///
/// `fields` is the whole line split on whitespace, marker included. The marker
/// is dropped, the rest is validated with [`check`], and the tree is built by
/// [`parse_node`] starting at the first token after the marker.
///
/// # Parameters
/// - `fields`: Whitespace-separated fields of the line, marker first.
///
/// # Returns
/// The root of the new tree.
///
/// # Errors
/// - `MissingExpression` if there are fewer than two fields.
/// - Any error reported by [`check`].
/// - `TooDeep` if the tree nests deeper than [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use prefix_calc::interpreter::parser::build;
///
/// let tree = build(&["=", "-", "~", "1", "2"]).unwrap();
/// assert_eq!(tree.to_string(), "- ~ 1 2");
///
/// assert!(build(&["="]).is_err());
/// assert!(build(&["=", "+", "2"]).is_err());
/// ```
pub fn build(fields: &[&str]) -> ParseResult<Node> {
    let Some((_, tokens)) = fields.split_first() else {
        return Err(ParseError::MissingExpression);
    };
    if tokens.is_empty() {
        return Err(ParseError::MissingExpression);
    }

    let tokens = check(tokens)?;
    let mut cursor = 0;
    parse_node(&tokens, &mut cursor, 1)
}

/// Parses the subtree starting at `cursor`.
///
/// The cursor is shared by the whole descent: after this call returns it
/// points at the last token consumed by the subtree, so the caller's next
/// child starts right after it. Children are built strictly left to right.
///
/// Grammar:
/// ```text
///     node := ("+" | "-" | "*" | "/") node node
///           | "~" node
///           | integer
/// ```
///
/// # Parameters
/// - `tokens`: Classified tokens, marker removed.
/// - `cursor`: Index of the token that starts this subtree.
/// - `depth`: Depth of this subtree's root, the tree root being 1.
///
/// # Returns
/// The parsed subtree.
///
/// # Errors
/// - `UnexpectedEndOfInput` if an operator is missing an operand.
/// - `TooDeep` once `depth` exceeds [`MAX_DEPTH`].
pub fn parse_node(tokens: &[Token], cursor: &mut usize, depth: usize) -> ParseResult<Node> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH });
    }
    let token = *tokens.get(*cursor)
                       .ok_or(ParseError::UnexpectedEndOfInput { position: *cursor })?;

    match token {
        Token::Integer(value) => Ok(Node::value(value)),
        Token::Tilde => {
            let operand = parse_operand(tokens, cursor, depth)?;
            Ok(Node::negate(operand))
        },
        Token::Binary(op) => {
            let left = parse_operand(tokens, cursor, depth)?;
            let right = parse_operand(tokens, cursor, depth)?;
            Ok(Node::binary(op, left, right))
        },
    }
}

/// Advances the cursor and parses the next child of the node at `depth`.
fn parse_operand(tokens: &[Token], cursor: &mut usize, depth: usize) -> ParseResult<Node> {
    *cursor += 1;
    parse_node(tokens, cursor, depth + 1)
}
