// Optimizer Test Modules

mod optimize_tests;

use checker::{check, Config};
use parser::{parse, Node};

/// Parse and optimize without type information
fn optimized(source: &str) -> Node {
    let mut tree = parse(source).unwrap();
    crate::optimize(&mut tree);
    tree
}

/// Parse, check against `config`, then optimize
fn checked_and_optimized(source: &str, config: &Config) -> Node {
    let mut tree = parse(source).unwrap();
    check(&mut tree, config).unwrap();
    crate::optimize(&mut tree);
    tree
}

fn print(source: &str) -> String {
    optimized(source).to_string()
}
