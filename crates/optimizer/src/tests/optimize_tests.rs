// Optimizer Driver Tests
//
// Round structure, statistics and idempotence.

use crate::{optimize, Stats};
use checker::{check, patch_operators, Config};
use parser::{parse, Type};
use pretty_assertions::assert_eq;

const PROGRAMS: &[&str] = &[
    "[1, 2, 3][5*5-25]",
    "v in [1, 2, 3]",
    "age in 18..31",
    "-1..1",
    "(1..3)[0] + x",
    "[1..2, 3]",
    "f(x) in 1..3",
    "c ? 1 + 1 : -(2)",
    "1 / 0",
    "name in [\"a\", \"b\"] and age in 0..120",
];

// ==================== STATS ====================

#[test]
fn test_stats_count_rewrites() {
    let mut tree = parse("age in 18..31").unwrap();
    let stats = optimize(&mut tree);

    assert_eq!(stats.range_checks, 1);
    assert_eq!(stats.ranges_expanded, 0);
    assert_eq!(stats.sets, 0);
    assert_eq!(stats.total(), 1);
}

#[test]
fn test_stats_for_set_conversion() {
    let mut tree = parse("v in [1, 2, 3]").unwrap();
    let stats = optimize(&mut tree);

    // array literal folded to a constant, then converted
    assert_eq!(stats.folded, 1);
    assert_eq!(stats.sets, 1);
}

#[test]
fn test_nothing_to_do() {
    let mut tree = parse("a + b").unwrap();
    let stats = optimize(&mut tree);

    assert_eq!(stats, Stats { rounds: 1, ..Stats::default() });
    assert_eq!(tree.to_string(), "a + b");
}

#[test]
fn test_expansion_takes_another_round() {
    let mut tree = parse("(1..3)[0]").unwrap();
    let stats = optimize(&mut tree);

    assert_eq!(tree.to_string(), "1");
    assert_eq!(stats.ranges_expanded, 1);
    assert_eq!(stats.folded, 1);
    assert_eq!(stats.rounds, 3);
}

// ==================== IDEMPOTENCE ====================

#[test]
fn test_second_run_changes_nothing() {
    for source in PROGRAMS {
        let mut tree = parse(source).unwrap();
        optimize(&mut tree);
        let once = tree.clone();

        let stats = optimize(&mut tree);

        assert_eq!(stats.total(), 0, "second run rewrote {}", source);
        assert_eq!(tree, once, "second run changed {}", source);
    }
}

#[test]
fn test_root_type_is_preserved() {
    let config = Config::new()
        .with_variable("v", Type::Int)
        .with_variable("age", Type::Int)
        .with_variable("x", Type::Float)
        .with_variable("name", Type::String);

    for source in [
        "[1, 2, 3][5*5-25]",
        "v in [1, 2, 3]",
        "age in 18..31",
        "-1..1",
        "(1..3)[0] + x",
        "name in [\"a\", \"b\"] and age in 0..120",
    ] {
        let mut tree = parse(source).unwrap();
        let ty = check(&mut tree, &config).unwrap();
        optimize(&mut tree);
        assert_eq!(tree.ty, ty, "type changed for {}", source);
    }
}

// ==================== WITH PATCHING ====================

#[test]
fn test_patched_calls_are_not_folded() {
    let config = Config::new()
        .with_function("Add", vec![Type::Int, Type::Int], Type::Int)
        .with_operator("+", "Add");
    let mut tree = parse("1 + 2").unwrap();
    check(&mut tree, &config).unwrap();
    patch_operators(&mut tree, &config);

    optimize(&mut tree);

    assert_eq!(tree.to_string(), "Add(1, 2)");
}

#[test]
fn test_arguments_of_patched_calls_are_optimized() {
    let config = Config::new()
        .with_variable("a", Type::Named("Money".to_string()))
        .with_function(
            "Scale",
            vec![Type::Named("Money".to_string()), Type::Int],
            Type::Named("Money".to_string()),
        )
        .with_operator("*", "Scale");
    let mut tree = parse("a * (2 + 3)").unwrap();
    check(&mut tree, &config).unwrap();
    patch_operators(&mut tree, &config);

    optimize(&mut tree);

    assert_eq!(tree.to_string(), "Scale(a, 5)");
    assert_eq!(tree.ty, Type::Named("Money".to_string()));
}
