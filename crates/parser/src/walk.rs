//! Generic tree traversal shared by every pass.
//!
//! A [`Visitor`] sees each node twice: `enter` before its children, `exit`
//! after them. Both hooks receive the slot the parent holds, so assigning to
//! `*node` rewires the parent's child pointer in place.

use crate::ast::Node;

pub trait Visitor {
    fn enter(&mut self, _node: &mut Node) {}

    fn exit(&mut self, node: &mut Node);
}

/// Walk `node` depth-first. Children are taken from the node as it stands
/// after `enter`, so a replacement made on entry is the one descended into.
pub fn walk<V: Visitor + ?Sized>(node: &mut Node, visitor: &mut V) {
    visitor.enter(node);
    for child in node.children_mut() {
        walk(child, visitor);
    }
    visitor.exit(node);
}
