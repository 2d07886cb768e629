// Type Checker Tests
//
// Types assigned to whole expressions and to inner nodes, plus errors.

use crate::checker::check;
use crate::config::Config;
use crate::error::CheckError;
use parser::{parse, NodeKind, Type};

fn named(name: &str) -> Type {
    Type::Named(name.to_string())
}

fn env() -> Config {
    Config::new()
        .with_variable("age", Type::Int)
        .with_variable("price", Type::Float)
        .with_variable("name", Type::String)
        .with_variable("ok", Type::Bool)
        .with_variable("items", Type::array_of(Type::Int))
        .with_variable("anything", Type::Any)
        .with_variable("user", named("User"))
        .with_struct("User", &[("name", Type::String), ("age", Type::Int)])
        .with_function("len", vec![Type::Any], Type::Int)
}

fn type_of(source: &str) -> Type {
    let mut tree = parse(source).unwrap();
    check(&mut tree, &env()).unwrap()
}

fn error_of(source: &str) -> CheckError {
    let mut tree = parse(source).unwrap();
    check(&mut tree, &env()).unwrap_err()
}

// ==================== LITERALS AND NAMES ====================

#[test]
fn test_literal_types() {
    assert_eq!(type_of("1"), Type::Int);
    assert_eq!(type_of("1.5"), Type::Float);
    assert_eq!(type_of("\"s\""), Type::String);
    assert_eq!(type_of("true"), Type::Bool);
    assert_eq!(type_of("nil"), Type::Nil);
}

#[test]
fn test_variable_type() {
    assert_eq!(type_of("price"), Type::Float);
}

#[test]
fn test_unknown_variable() {
    assert!(matches!(
        error_of("missing + 1"),
        CheckError::UnknownName { ref name, .. } if name == "missing"
    ));
}

// ==================== ARITHMETIC ====================

#[test]
fn test_int_arithmetic_stays_int() {
    assert_eq!(type_of("5 * 5 - 25"), Type::Int);
    assert_eq!(type_of("age % 2"), Type::Int);
}

#[test]
fn test_division_and_power_are_float() {
    assert_eq!(type_of("age / 2"), Type::Float);
    assert_eq!(type_of("2 ** 3"), Type::Float);
}

#[test]
fn test_mixed_arithmetic_is_float() {
    assert_eq!(type_of("age + price"), Type::Float);
}

#[test]
fn test_string_concatenation() {
    assert_eq!(type_of("name + \"!\""), Type::String);
}

#[test]
fn test_dynamic_operand_gives_any() {
    assert_eq!(type_of("anything + 1"), Type::Any);
}

#[test]
fn test_string_plus_int_is_error() {
    let err = error_of("name + 1");
    assert!(matches!(err, CheckError::BinaryMismatch { ref op, .. } if op == "+"));
    assert_eq!(err.span(), &(0..8));
    assert_eq!(err.code(), "E203");
}

// ==================== COMPARISON AND LOGIC ====================

#[test]
fn test_comparisons_are_bool() {
    assert_eq!(type_of("age >= 18 and age <= 31"), Type::Bool);
    assert_eq!(type_of("name < \"m\""), Type::Bool);
    assert_eq!(type_of("user == nil"), Type::Bool);
}

#[test]
fn test_membership_is_bool() {
    assert_eq!(type_of("age in [1, 2, 3]"), Type::Bool);
    assert_eq!(type_of("age in 18..31"), Type::Bool);
    assert_eq!(type_of("age in items"), Type::Bool);
}

#[test]
fn test_membership_needs_collection() {
    assert!(matches!(error_of("age in 3"), CheckError::BinaryMismatch { .. }));
}

#[test]
fn test_not_needs_bool() {
    assert_eq!(type_of("not ok"), Type::Bool);
    assert!(matches!(error_of("not age"), CheckError::UnaryMismatch { .. }));
}

// ==================== COLLECTIONS ====================

#[test]
fn test_array_literal_types() {
    assert_eq!(type_of("[1, 2, 3]"), Type::array_of(Type::Int));
    assert_eq!(type_of("[1, \"a\"]"), Type::array_of(Type::Any));
    assert_eq!(type_of("[]"), Type::array_of(Type::Any));
}

#[test]
fn test_index_gives_element_type() {
    assert_eq!(type_of("[1, 2, 3][5 * 5 - 25]"), Type::Int);
    assert_eq!(type_of("items[age]"), Type::Int);
}

#[test]
fn test_index_with_string_is_error() {
    assert!(matches!(error_of("items[name]"), CheckError::NotIndexable { .. }));
}

#[test]
fn test_range_type() {
    assert_eq!(type_of("-1..1"), Type::array_of(Type::Int));
}

#[test]
fn test_range_bound_must_be_int() {
    let err = error_of("1..price");
    assert!(matches!(err, CheckError::RangeBound { found: Type::Float, .. }));
    assert_eq!(err.span(), &(3..8));
}

// ==================== MEMBERS AND CALLS ====================

#[test]
fn test_struct_field() {
    assert_eq!(type_of("user.age"), Type::Int);
}

#[test]
fn test_unknown_field() {
    assert!(matches!(error_of("user.email"), CheckError::UnknownField { .. }));
}

#[test]
fn test_call_uses_signature() {
    assert_eq!(type_of("len(items) > 0"), Type::Bool);
}

#[test]
fn test_call_arity_error() {
    let err = error_of("len(items, 1)");
    assert!(matches!(err, CheckError::ArgumentMismatch { .. }));
    assert_eq!(err.to_string(), "cannot call len(any) with ([int], int)");
}

#[test]
fn test_unknown_function() {
    assert!(matches!(error_of("nope()"), CheckError::UnknownFunction { .. }));
}

// ==================== CONDITIONAL ====================

#[test]
fn test_conditional_branches() {
    assert_eq!(type_of("ok ? 1 : 2"), Type::Int);
    assert_eq!(type_of("ok ? 1 : \"x\""), Type::Any);
}

#[test]
fn test_conditional_needs_bool() {
    assert!(matches!(error_of("age ? 1 : 2"), CheckError::NonBoolCondition { .. }));
}

// ==================== OVERLOADS ====================

#[test]
fn test_overloaded_operator_takes_return_type() {
    let config = Config::new()
        .with_variable("a", named("Money"))
        .with_function("AddMoney", vec![named("Money"), named("Money")], named("Money"))
        .with_operator("+", "AddMoney");
    let mut tree = parse("a + a").unwrap();

    assert_eq!(check(&mut tree, &config).unwrap(), named("Money"));
}

#[test]
fn test_every_node_is_typed() {
    let mut tree = parse("[1, 2][0] + age").unwrap();
    check(&mut tree, &env()).unwrap();

    let NodeKind::Binary { left, right, .. } = &tree.kind else {
        panic!("Expected binary");
    };
    assert_eq!(left.ty, Type::Int);
    assert_eq!(right.ty, Type::Int);
    let NodeKind::Index { node, index } = &left.kind else {
        panic!("Expected index");
    };
    assert_eq!(node.ty, Type::array_of(Type::Int));
    assert_eq!(index.ty, Type::Int);
}
