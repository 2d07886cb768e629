// Test module for parser
//
// Unit tests for the expression parser, the node model and the walker.
// Tests are organized by category to ensure complete AST construction coverage.

mod edge_cases;
mod pretty_tests;
