// Printer Tests
//
// Display output for hand-built and parsed trees.

use crate::ast::{BinaryOp, Node, NodeKind};
use crate::parser::parse;
use crate::value::{Key, Value};

fn node(kind: NodeKind) -> Node {
    Node::new(kind, 0..0)
}

#[test]
fn test_constant_array() {
    let n = node(NodeKind::Constant(Value::Array(vec![
        Value::Int(-1),
        Value::Int(0),
        Value::Int(1),
    ])));
    assert_eq!(n.to_string(), "[-1, 0, 1]");
}

#[test]
fn test_constant_set_is_sorted() {
    let set = [3, 1, 2].into_iter().map(Key::Int).collect();
    let n = node(NodeKind::Constant(Value::Set(set)));
    assert_eq!(n.to_string(), "{1, 2, 3}");
}

#[test]
fn test_float_keeps_fraction() {
    assert_eq!(node(NodeKind::Float(2.0)).to_string(), "2.0");
}

#[test]
fn test_string_is_quoted() {
    assert_eq!(node(NodeKind::String("a b".to_string())).to_string(), "\"a b\"");
}

#[test]
fn test_nested_binary_is_parenthesised() {
    let left = Node::binary(
        BinaryOp::GtEq,
        node(NodeKind::Identifier("age".to_string())),
        node(NodeKind::Integer(18)),
    );
    let right = Node::binary(
        BinaryOp::LtEq,
        node(NodeKind::Identifier("age".to_string())),
        node(NodeKind::Integer(31)),
    );
    let and = Node::binary(BinaryOp::And, left, right);
    assert_eq!(and.to_string(), "(age >= 18) and (age <= 31)");
}

#[test]
fn test_printed_tree_parses_back_to_same_text() {
    for source in [
        "a.b[0] + f(1, 2.5, \"x\")",
        "not (a or b)",
        "x ? [1, 2] : nil",
        "-(1 + 2)",
    ] {
        let printed = parse(source).unwrap().to_string();
        let reprinted = parse(&printed).unwrap().to_string();
        assert_eq!(printed, reprinted, "source: {}", source);
    }
}
