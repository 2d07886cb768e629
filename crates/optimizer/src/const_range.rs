//! Materialise ranges with constant bounds into constant sequences.

use parser::{BinaryOp, Node, NodeKind, Value, Visitor};
use tracing::{debug, trace};

/// Largest range that is expanded at compile time
pub const MAX_RANGE_LEN: i128 = 1_000_000;

#[derive(Default)]
pub(crate) struct ConstRange {
    pub applied: usize,
}

impl Visitor for ConstRange {
    // Ranges are expanded from their parent so the right side of `in` can be
    // skipped. The root has no parent; see `expand`.
    fn exit(&mut self, node: &mut Node) {
        let is_membership = matches!(
            node.kind,
            NodeKind::Binary {
                op: BinaryOp::In,
                ..
            }
        );
        let mut children = node.children_mut();
        if is_membership {
            children.pop();
        }
        for child in children {
            self.expand(child);
        }
    }
}

impl ConstRange {
    /// Replace `slot` with its expansion if it is a constant range.
    pub fn expand(&mut self, slot: &mut Node) {
        let NodeKind::Range { from, to } = &slot.kind else {
            return;
        };
        let (NodeKind::Integer(lo), NodeKind::Integer(hi)) = (&from.kind, &to.kind) else {
            return;
        };
        let (lo, hi) = (*lo, *hi);

        let len = i128::from(hi) - i128::from(lo) + 1;
        if len > MAX_RANGE_LEN {
            trace!(lo, hi, "range too large to expand");
            return;
        }
        // lo > hi is an empty sequence
        let items: Vec<Value> = if lo > hi {
            Vec::new()
        } else {
            (lo..=hi).map(Value::Int).collect()
        };

        debug!(lo, hi, len = items.len(), "expanded constant range");
        self.applied += 1;
        slot.kind = NodeKind::Constant(Value::Array(items));
    }
}
