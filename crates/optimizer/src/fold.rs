//! Constant folding.
//!
//! Post-order, so operands are already folded when their parent is visited
//! and a single walk collapses a whole constant subtree. Anything that would
//! fail at runtime (overflow, division by zero, a bad index) is left alone so
//! the runtime raises the same error the unoptimized program would.

use parser::{BinaryOp, Node, NodeKind, UnaryOp, Value, Visitor};
use tracing::{debug, trace};

#[derive(Default)]
pub(crate) struct Fold {
    pub applied: usize,
}

impl Visitor for Fold {
    fn exit(&mut self, node: &mut Node) {
        let Some(folded) = fold_node(node) else {
            return;
        };
        debug!(from = %node, to = %folded, "folded constant");
        self.applied += 1;

        // The replacement stands in for the old node: same type, same span.
        *node = Node {
            kind: folded.kind,
            ty: node.ty.clone(),
            span: node.span.clone(),
        };
    }
}

fn fold_node(node: &Node) -> Option<Node> {
    let span = node.span.clone();
    match &node.kind {
        NodeKind::Unary { op, node: operand } => {
            let value = fold_unary(*op, operand.as_value()?)?;
            Some(Node::from_value(value, span))
        }

        NodeKind::Binary { op, left, right } => {
            let left = left.as_value()?;
            let value = match (&right.kind, *op) {
                (NodeKind::Range { from, to }, BinaryOp::In) => in_range(&left, from, to)?,
                _ => fold_binary(*op, &left, &right.as_value()?)?,
            };
            Some(Node::from_value(value, span))
        }

        NodeKind::Index { node: base, index } => {
            let Some(Value::Array(items)) = base.as_value() else {
                return None;
            };
            let i = index.as_value()?.as_int()?;
            let Some(item) = usize::try_from(i).ok().and_then(|i| items.get(i)) else {
                trace!(index = i, len = items.len(), "index out of range, not folded");
                return None;
            };
            Some(Node::from_value(item.clone(), span))
        }

        NodeKind::Array(elements) => {
            if !elements.iter().all(Node::is_literal) {
                return None;
            }
            let values = elements.iter().filter_map(Node::as_value).collect();
            Some(Node::new(NodeKind::Constant(Value::Array(values)), span))
        }

        NodeKind::Conditional {
            cond,
            then,
            otherwise,
        } => {
            let branch = if cond.as_value()?.as_bool()? {
                then
            } else {
                otherwise
            };
            Some(branch.as_ref().clone())
        }

        _ => None,
    }
}

fn fold_unary(op: UnaryOp, value: Value) -> Option<Value> {
    match (op, value) {
        (UnaryOp::Negate, Value::Int(n)) => n.checked_neg().map(Value::Int),
        (UnaryOp::Negate, Value::Float(x)) => Some(Value::Float(-x)),
        (UnaryOp::Plus, value @ (Value::Int(_) | Value::Float(_))) => Some(value),
        (UnaryOp::Not, Value::Bool(b)) => Some(Value::Bool(!b)),
        _ => None,
    }
}

/// `literal in lo..hi` with constant integer bounds
fn in_range(needle: &Value, from: &Node, to: &Node) -> Option<Value> {
    let (NodeKind::Integer(lo), NodeKind::Integer(hi)) = (&from.kind, &to.kind) else {
        return None;
    };
    let hit = match needle {
        Value::Int(n) => lo <= n && n <= hi,
        Value::Float(x) => x.fract() == 0.0 && (*lo as f64) <= *x && *x <= (*hi as f64),
        _ => return None,
    };
    Some(Value::Bool(hit))
}

fn fold_binary(op: BinaryOp, left: &Value, right: &Value) -> Option<Value> {
    match op {
        _ if op.is_arithmetic() => arithmetic(op, left, right),
        BinaryOp::Eq | BinaryOp::NotEq => {
            if !left.is_scalar() || !right.is_scalar() {
                return None;
            }
            let eq = left.loose_eq(right);
            Some(Value::Bool(if op == BinaryOp::Eq { eq } else { !eq }))
        }
        _ if op.is_ordering() => compare(op, left, right),
        BinaryOp::And => Some(Value::Bool(left.as_bool()? && right.as_bool()?)),
        BinaryOp::Or => Some(Value::Bool(left.as_bool()? || right.as_bool()?)),
        BinaryOp::In => {
            if !left.is_scalar() {
                return None;
            }
            right.contains(left).map(Value::Bool)
        }
        _ => None,
    }
}

fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Option<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            let (a, b) = (*a, *b);
            match op {
                BinaryOp::Add => a.checked_add(b).map(Value::Int),
                BinaryOp::Sub => a.checked_sub(b).map(Value::Int),
                BinaryOp::Mul => a.checked_mul(b).map(Value::Int),
                BinaryOp::Mod if b != 0 => a.checked_rem(b).map(Value::Int),
                BinaryOp::Div if b != 0 => finite(a as f64 / b as f64),
                BinaryOp::Pow => finite((a as f64).powf(b as f64)),
                _ => None,
            }
        }
        (Value::String(a), Value::String(b)) if op == BinaryOp::Add => {
            Some(Value::String(format!("{}{}", a, b)))
        }
        _ => {
            let (a, b) = (left.as_f64()?, right.as_f64()?);
            match op {
                BinaryOp::Add => finite(a + b),
                BinaryOp::Sub => finite(a - b),
                BinaryOp::Mul => finite(a * b),
                BinaryOp::Div if b != 0.0 => finite(a / b),
                BinaryOp::Mod if b != 0.0 => finite(a % b),
                BinaryOp::Pow => finite(a.powf(b)),
                _ => None,
            }
        }
    }
}

/// Float results are only folded when they are ordinary numbers
fn finite(x: f64) -> Option<Value> {
    x.is_finite().then_some(Value::Float(x))
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> Option<Value> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => left.as_f64()?.partial_cmp(&right.as_f64()?)?,
    };
    let result = match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::GtEq => ordering.is_ge(),
        _ => return None,
    };
    Some(Value::Bool(result))
}
