// Edge Case Tests for Parser

use crate::ast::{NodeKind, Node};
use crate::parser::parse;

fn parse_expr(input: &str) -> Node {
    parse(input).unwrap()
}

// ==================== DEEPLY NESTED STRUCTURES ====================

#[test]
fn test_deeply_nested_parens() {
    let expr = parse_expr("((((((1))))))");
    assert_eq!(expr.kind, NodeKind::Integer(1));
}

#[test]
fn test_deeply_nested_arrays() {
    let expr = parse_expr("[[[[1]]]]");
    assert_eq!(expr.to_string(), "[[[[1]]]]");
}

#[test]
fn test_deeply_nested_calls() {
    let expr = parse_expr("f(g(h(1)))");
    assert_eq!(expr.to_string(), "f(g(h(1)))");
}

// ==================== EMPTY AND TRAILING ====================

#[test]
fn test_empty_array() {
    assert_eq!(parse_expr("[]").kind, NodeKind::Array(Vec::new()));
}

#[test]
fn test_trailing_comma_in_array() {
    assert_eq!(parse_expr("[1, 2,]").to_string(), "[1, 2]");
}

// ==================== SPANS ====================

#[test]
fn test_binary_span_covers_operands() {
    let expr = parse_expr("age in 18..31");
    assert_eq!(expr.span, 0..13);
}

#[test]
fn test_index_span_includes_bracket() {
    let expr = parse_expr("a[0]");
    assert_eq!(expr.span, 0..4);
}

#[test]
fn test_unary_span_starts_at_operator() {
    let expr = parse_expr("  -x");
    assert_eq!(expr.span, 2..4);
}

#[test]
fn test_call_span() {
    let expr = parse_expr("Add(a, b)");
    assert_eq!(expr.span, 0..9);
}

// ==================== LARGE VALUES ====================

#[test]
fn test_max_int() {
    assert_eq!(
        parse_expr("9223372036854775807").kind,
        NodeKind::Integer(i64::MAX)
    );
}
