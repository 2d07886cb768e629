pub mod ast;
pub mod error;
pub mod parser;
pub mod pretty;
pub mod types;
pub mod value;
pub mod walk;

pub use ast::{BinaryOp, Node, NodeKind, Span, UnaryOp};
pub use error::{report_errors, ParseError};
pub use parser::parse;
pub use types::Type;
pub use value::{Key, Value};
pub use walk::{walk, Visitor};

#[cfg(test)]
mod tests;
