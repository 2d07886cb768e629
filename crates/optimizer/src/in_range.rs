//! `x in lo..hi` becomes `(x >= lo) and (x <= hi)`.

use parser::{BinaryOp, Node, NodeKind, Type, Visitor};
use tracing::{debug, trace};

#[derive(Default)]
pub(crate) struct InRange {
    pub applied: usize,
}

impl Visitor for InRange {
    fn exit(&mut self, node: &mut Node) {
        let NodeKind::Binary {
            op: BinaryOp::In,
            left,
            right,
        } = &mut node.kind
        else {
            return;
        };
        let NodeKind::Range { from, to } = &mut right.kind else {
            return;
        };
        if !matches!(
            (&from.kind, &to.kind),
            (NodeKind::Integer(_), NodeKind::Integer(_))
        ) {
            return;
        }
        // Only an integer is in `lo..hi` exactly when it lies between the
        // bounds; `1.5` is between 1 and 3 but not in `1..3`.
        if left.ty != Type::Int && !left.ty.is_dynamic() {
            trace!(needle = %left, ty = %left.ty, "range membership kept, needle is not an int");
            return;
        }
        // The needle appears twice in the conjunction, so it must be safe
        // to evaluate twice.
        if !left.is_pure() {
            trace!(needle = %left, "range membership kept, needle has calls");
            return;
        }

        let cmp_ty = if node.ty == Type::Unknown {
            Type::Unknown
        } else {
            Type::Bool
        };
        let needle = *std::mem::take(left);
        let lower = Node::binary(BinaryOp::GtEq, needle.clone(), *std::mem::take(from))
            .with_type(cmp_ty.clone());
        let upper = Node::binary(BinaryOp::LtEq, needle, *std::mem::take(to)).with_type(cmp_ty);
        let conjunction = Node::binary(BinaryOp::And, lower, upper);

        debug!(to = %conjunction, "range membership rewritten to comparisons");
        self.applied += 1;
        *node = Node {
            kind: conjunction.kind,
            ty: node.ty.clone(),
            span: node.span.clone(),
        };
    }
}
