use prefix_calc::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        parser::{MAX_DEPTH, build},
        validator::{check, validate},
    },
};

fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[test]
fn balanced_expressions_validate() {
    for src in ["5", "-5", "+ 1 2", "~ 1", "~ ~ 1", "* ~ 4 5", "- ~ + 1 2 / 3 ~ 4", "+ + + 1 2 3 4"] {
        assert!(validate(&fields(src)), "expected '{src}' to validate");
    }
}

#[test]
fn unbalanced_expressions_are_rejected() {
    for src in ["+", "+ 2", "1 2", "+ 1 2 3", "* 1", "+ + 1 2", "- ~ 1"] {
        assert!(!validate(&fields(src)), "expected '{src}' to be rejected");
    }
}

#[test]
fn empty_sequence_is_rejected() {
    assert_eq!(check(&[]), Err(ParseError::EmptyExpression));
}

#[test]
fn lone_negation_is_rejected() {
    assert_eq!(check(&["~"]), Err(ParseError::DanglingNegation { position: 0 }));
}

#[test]
fn negation_without_operand_is_rejected_at_any_position() {
    assert_eq!(check(&fields("+ 1 ~")), Err(ParseError::DanglingNegation { position: 2 }));
    assert_eq!(check(&fields("~ ~")), Err(ParseError::DanglingNegation { position: 1 }));
    assert_eq!(check(&fields("+ ~ ~")), Err(ParseError::DanglingNegation { position: 2 }));
}

#[test]
fn unrecognized_tokens_are_rejected() {
    assert_eq!(check(&fields("+ 1 x")),
               Err(ParseError::UnexpectedToken { token:    "x".to_string(),
                                                 position: 2, }));
    assert!(!validate(&fields("++ 1 2")));
    assert!(!validate(&fields("+ 1.5 2")));
    assert!(!validate(&fields("~5")));
    assert!(!validate(&fields("+ 1 2147483648")));
}

#[test]
fn unbalanced_reports_leftover_counts() {
    assert_eq!(check(&fields("+ 2")), Err(ParseError::Unbalanced { operands:  1,
                                                                   operators: 1, }));
    assert_eq!(check(&fields("1 2 3")), Err(ParseError::Unbalanced { operands:  3,
                                                                     operators: 0, }));
}

#[test]
fn builds_children_in_token_order() {
    let tree = build(&fields("= - 10 / 6 2")).unwrap();
    let expected = Node::binary(BinaryOperator::Sub,
                                Node::value(10),
                                Node::binary(BinaryOperator::Div, Node::value(6), Node::value(2)));
    assert_eq!(tree, expected);
}

#[test]
fn leaves_hold_both_representations() {
    let tree = build(&fields("= -2147483648")).unwrap();
    assert_eq!(tree, Node::Value { int_value:    i32::MIN,
                                   double_value: -2_147_483_648.0, });
}

#[test]
fn marker_field_is_dropped_whatever_it_holds() {
    assert_eq!(build(&fields("=+ 7")), Ok(Node::value(7)));
    assert!(build(&fields("=+ 2 3")).is_err());
}

#[test]
fn marker_only_line_is_rejected() {
    assert_eq!(build(&["="]), Err(ParseError::MissingExpression));
    assert_eq!(build(&[]), Err(ParseError::MissingExpression));
    assert_eq!(build(&["=5"]), Err(ParseError::MissingExpression));
}

#[test]
fn tokens_after_a_complete_expression_are_ignored() {
    assert_eq!(build(&fields("= 2 3 +")), Ok(Node::value(2)));
    assert_eq!(build(&fields("= + 1 2 3 -")).map(|n| n.to_string()),
               Ok("+ 1 2".to_string()));
}

#[test]
fn nesting_deeper_than_the_limit_is_rejected() {
    let mut line = String::from("=");
    line.push_str(&" ~".repeat(MAX_DEPTH - 1));
    line.push_str(" 1");
    assert_eq!(build(&fields(&line)).map(|n| n.depth()), Ok(MAX_DEPTH));

    let mut line = String::from("=");
    line.push_str(&" ~".repeat(MAX_DEPTH));
    line.push_str(" 1");
    assert_eq!(build(&fields(&line)), Err(ParseError::TooDeep { limit: MAX_DEPTH }));
}
