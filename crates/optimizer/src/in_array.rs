//! `x in [constants]` becomes `x in {constants}`.

use parser::{BinaryOp, Key, Node, NodeKind, Type, Value, Visitor};
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Default)]
pub(crate) struct InArray {
    pub applied: usize,
}

impl Visitor for InArray {
    fn exit(&mut self, node: &mut Node) {
        let NodeKind::Binary {
            op: BinaryOp::In,
            left,
            right,
        } = &mut node.kind
        else {
            return;
        };
        let NodeKind::Constant(Value::Array(items)) = &right.kind else {
            return;
        };
        let Some(set) = to_set(items, &left.ty) else {
            trace!(array = %right, "membership array kept");
            return;
        };

        debug!(span = ?right.span, len = set.len(), "membership array converted to set");
        self.applied += 1;
        right.kind = NodeKind::Constant(Value::Set(set));
    }
}

/// Set of the array's elements, or `None` when the elements are not all
/// integers or all strings, or `needle` can never be one of them.
fn to_set(items: &[Value], needle: &Type) -> Option<HashSet<Key>> {
    let first = items.first()?;
    let fits = match first {
        Value::Int(_) => needle.is_numeric() || needle.is_dynamic(),
        Value::String(_) => *needle == Type::String || needle.is_dynamic(),
        _ => false,
    };
    if !fits {
        return None;
    }

    items
        .iter()
        .map(|item| match (first, item) {
            (Value::Int(_), Value::Int(n)) => Some(Key::Int(*n)),
            (Value::String(_), Value::String(s)) => Some(Key::String(s.clone())),
            _ => None,
        })
        .collect()
}
