//! Operator patching.
//!
//! Rewrites `left op right` into `Fn(left, right)` when the operator table
//! lists candidates for `op` and exactly one of them accepts the operand
//! types. Runs after type checking, since it reads the operands' resolved
//! types, and before the optimizer.

use crate::config::{Config, OperatorTable};
use crate::overload::find_suitable_operator_overload;
use crate::table::TypesTable;
use parser::{walk, Node, NodeKind, Visitor};
use tracing::debug;

struct OperatorPatcher<'c> {
    ops: &'c OperatorTable,
    types: &'c TypesTable,
}

impl Visitor for OperatorPatcher<'_> {
    // Rewrites happen on exit only, once both operands are final.
    fn exit(&mut self, node: &mut Node) {
        let NodeKind::Binary { op, left, right } = &mut node.kind else {
            return;
        };
        let Some(fns) = self.ops.get(op.symbol()) else {
            return;
        };
        let Some(overload) = find_suitable_operator_overload(fns, self.types, &left.ty, &right.ty)
        else {
            return;
        };
        debug!(operator = op.symbol(), function = overload.name, "patched operator");

        let args = vec![*std::mem::take(left), *std::mem::take(right)];
        *node = Node {
            kind: NodeKind::Call {
                callee: overload.name.to_string(),
                args,
            },
            ty: node.ty.clone(),
            span: node.span.clone(),
        };
    }
}

/// Replace overloaded binary operators in `tree` with calls to their
/// implementation functions.
pub fn patch_operators(tree: &mut Node, config: &Config) {
    if config.operators.is_empty() {
        return;
    }
    let mut patcher = OperatorPatcher {
        ops: &config.operators,
        types: &config.types,
    };
    walk(tree, &mut patcher);
}
