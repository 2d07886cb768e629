// Printing nodes back as expression text
//
// Nested binary and conditional operands are wrapped in parentheses, so the
// output never depends on precedence rules to read back the same tree.

use crate::ast::{Node, NodeKind, UnaryOp};
use std::fmt;

fn needs_parens(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Binary { .. } | NodeKind::Conditional { .. } | NodeKind::Range { .. }
    )
}

struct Operand<'a>(&'a Node);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_parens(self.0) {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Nil => write!(f, "nil"),
            NodeKind::Identifier(name) => write!(f, "{}", name),
            NodeKind::Integer(n) => write!(f, "{}", n),
            NodeKind::Float(x) => write!(f, "{:?}", x),
            NodeKind::Bool(b) => write!(f, "{}", b),
            NodeKind::String(s) => write!(f, "{:?}", s),
            NodeKind::Constant(value) => write!(f, "{}", value),
            NodeKind::Unary { op, node } => match op {
                UnaryOp::Not => write!(f, "not {}", Operand(node)),
                _ => write!(f, "{}{}", op.symbol(), Operand(node)),
            },
            NodeKind::Binary { op, left, right } => {
                write!(f, "{} {} {}", Operand(left), op, Operand(right))
            }
            NodeKind::Index { node, index } => write!(f, "{}[{}]", Operand(node), index),
            NodeKind::Member { node, property } => write!(f, "{}.{}", Operand(node), property),
            NodeKind::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            NodeKind::Range { from, to } => write!(f, "{}..{}", Operand(from), Operand(to)),
            NodeKind::Array(elements) => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            NodeKind::Conditional {
                cond,
                then,
                otherwise,
            } => write!(
                f,
                "{} ? {} : {}",
                Operand(cond),
                Operand(then),
                Operand(otherwise)
            ),
        }
    }
}
