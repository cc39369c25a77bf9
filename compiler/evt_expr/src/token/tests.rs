use std::collections::BTreeMap;

use super::*;
use crate::value::NoVariables;
use pretty_assertions::assert_eq;

fn table() -> BTreeMap<String, Value> {
    let mut vars = BTreeMap::new();
    vars.insert("x".to_string(), Value::Int(10));
    vars.insert("name".to_string(), Value::from("bob"));
    vars.insert("42".to_string(), Value::Int(-1));
    vars
}

#[test]
fn operators_are_closed_set() {
    assert_eq!(BinaryOp::from_token("*"), Some(BinaryOp::Mul));
    assert_eq!(BinaryOp::from_token("+"), Some(BinaryOp::Add));
    assert_eq!(BinaryOp::from_token("-"), None);
    assert_eq!(BinaryOp::from_token("++"), None);
    assert_eq!(BinaryOp::from_token(" +"), None);
    assert!(is_operator("*"));
    assert!(!is_operator("/"));
}

#[test]
fn symbols_round_trip() {
    for op in [BinaryOp::Mul, BinaryOp::Add] {
        assert_eq!(BinaryOp::from_token(op.as_symbol()), Some(op));
    }
}

#[test]
fn apply_wraps_on_overflow() {
    assert_eq!(BinaryOp::Add.apply(2, 3), 5);
    assert_eq!(BinaryOp::Mul.apply(2, 3), 6);
    assert_eq!(BinaryOp::Add.apply(i64::MAX, 1), i64::MIN);
    assert_eq!(BinaryOp::Mul.apply(i64::MAX, 2), -2);
}

#[test]
fn quoted_string_strips_first_and_last() {
    assert_eq!(classify("\"hi\"", &NoVariables), TokenKind::StringLiteral("hi"));
    assert_eq!(
        classify("\"a b  c\"", &NoVariables),
        TokenKind::StringLiteral("a b  c")
    );
    assert_eq!(classify("\"\"", &NoVariables), TokenKind::StringLiteral(""));
}

#[test]
fn any_embedded_quote_makes_a_string() {
    // Only the first and last characters go, even when they are not quotes.
    assert_eq!(
        classify("abc\"def", &NoVariables),
        TokenKind::StringLiteral("bc\"de")
    );
    assert_eq!(classify("\"", &NoVariables), TokenKind::StringLiteral(""));
}

#[test]
fn stripping_is_char_based() {
    assert_eq!(classify("\"héllo\"", &NoVariables), TokenKind::StringLiteral("héllo"));
    assert_eq!(classify("é\"é", &NoVariables), TokenKind::StringLiteral("\""));
}

#[test]
fn integer_literals() {
    assert_eq!(classify("5", &NoVariables), TokenKind::IntLiteral(5));
    assert_eq!(classify("-17", &NoVariables), TokenKind::IntLiteral(-17));
    assert_eq!(classify("+3", &NoVariables), TokenKind::IntLiteral(3));
    assert_eq!(classify("007", &NoVariables), TokenKind::IntLiteral(7));
    assert_eq!(classify("1.5", &NoVariables), TokenKind::Unrecognized);
    assert_eq!(classify("99999999999999999999", &NoVariables), TokenKind::Unrecognized);
}

#[test]
fn integer_beats_variable_of_same_name() {
    let vars = table();
    assert_eq!(classify("42", &vars), TokenKind::IntLiteral(42));
}

#[test]
fn variables_resolve_to_stored_value() {
    let vars = table();
    assert_eq!(classify("x", &vars), TokenKind::Variable(&Value::Int(10)));
    assert_eq!(classify("name", &vars), TokenKind::Variable(&Value::from("bob")));
}

#[test]
fn operator_and_unrecognized() {
    let vars = table();
    assert_eq!(classify("+", &vars), TokenKind::Operator(BinaryOp::Add));
    assert_eq!(classify("*", &vars), TokenKind::Operator(BinaryOp::Mul));
    assert_eq!(classify("y", &vars), TokenKind::Unrecognized);
    assert_eq!(classify("-", &vars), TokenKind::Unrecognized);
}
