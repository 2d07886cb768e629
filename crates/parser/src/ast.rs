// crates/parser/src/ast.rs

use crate::types::Type;
use crate::value::Value;
use std::fmt;
use std::ops::Range;

pub type Span = Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
    In,
}

impl BinaryOp {
    /// Source spelling, also the key of the operator-overload table
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::In => "in",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::Mul
                | BinaryOp::Div
                | BinaryOp::Mod
                | BinaryOp::Pow
        )
    }

    pub fn is_ordering(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Plus,
    Not,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "not",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Nil,

    Identifier(String),

    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),

    /// Value computed ahead of time by the optimizer
    Constant(Value),

    Unary {
        op: UnaryOp,
        node: Box<Node>,
    },

    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    Index {
        node: Box<Node>,
        index: Box<Node>,
    },

    Member {
        node: Box<Node>,
        property: String,
    },

    Call {
        callee: String,
        args: Vec<Node>,
    },

    /// Inclusive integer range `from..to`
    Range {
        from: Box<Node>,
        to: Box<Node>,
    },

    Array(Vec<Node>),

    Conditional {
        cond: Box<Node>,
        then: Box<Node>,
        otherwise: Box<Node>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub ty: Type,
    pub span: Span,
}

impl Default for Node {
    fn default() -> Self {
        Node::new(NodeKind::Nil, 0..0)
    }
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node {
            kind,
            ty: Type::Unknown,
            span,
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    /// Binary node spanning both operands
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        let span = left.span.start..right.span.end;
        Node::new(
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    /// Child slots in evaluation order
    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        match &mut self.kind {
            NodeKind::Nil
            | NodeKind::Identifier(_)
            | NodeKind::Integer(_)
            | NodeKind::Float(_)
            | NodeKind::Bool(_)
            | NodeKind::String(_)
            | NodeKind::Constant(_) => Vec::new(),
            NodeKind::Unary { node, .. } | NodeKind::Member { node, .. } => vec![node.as_mut()],
            NodeKind::Binary { left, right, .. } => vec![left.as_mut(), right.as_mut()],
            NodeKind::Index { node, index } => vec![node.as_mut(), index.as_mut()],
            NodeKind::Range { from, to } => vec![from.as_mut(), to.as_mut()],
            NodeKind::Call { args, .. } | NodeKind::Array(args) => args.iter_mut().collect(),
            NodeKind::Conditional {
                cond,
                then,
                otherwise,
            } => vec![cond.as_mut(), then.as_mut(), otherwise.as_mut()],
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Nil
            | NodeKind::Identifier(_)
            | NodeKind::Integer(_)
            | NodeKind::Float(_)
            | NodeKind::Bool(_)
            | NodeKind::String(_)
            | NodeKind::Constant(_) => Vec::new(),
            NodeKind::Unary { node, .. } | NodeKind::Member { node, .. } => vec![node.as_ref()],
            NodeKind::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            NodeKind::Index { node, index } => vec![node.as_ref(), index.as_ref()],
            NodeKind::Range { from, to } => vec![from.as_ref(), to.as_ref()],
            NodeKind::Call { args, .. } | NodeKind::Array(args) => args.iter().collect(),
            NodeKind::Conditional {
                cond,
                then,
                otherwise,
            } => vec![cond.as_ref(), then.as_ref(), otherwise.as_ref()],
        }
    }

    /// Value of a literal or constant node
    pub fn as_value(&self) -> Option<Value> {
        match &self.kind {
            NodeKind::Nil => Some(Value::Nil),
            NodeKind::Integer(n) => Some(Value::Int(*n)),
            NodeKind::Float(x) => Some(Value::Float(*x)),
            NodeKind::Bool(b) => Some(Value::Bool(*b)),
            NodeKind::String(s) => Some(Value::String(s.clone())),
            NodeKind::Constant(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Nil
                | NodeKind::Integer(_)
                | NodeKind::Float(_)
                | NodeKind::Bool(_)
                | NodeKind::String(_)
                | NodeKind::Constant(_)
        )
    }

    /// Canonical node for a value: scalars become literal nodes, collections
    /// become `Constant`.
    pub fn from_value(value: Value, span: Span) -> Node {
        let kind = match value {
            Value::Nil => NodeKind::Nil,
            Value::Bool(b) => NodeKind::Bool(b),
            Value::Int(n) => NodeKind::Integer(n),
            Value::Float(x) => NodeKind::Float(x),
            Value::String(s) => NodeKind::String(s),
            collection => NodeKind::Constant(collection),
        };
        Node::new(kind, span)
    }

    /// True when evaluating the node cannot run user code. Only calls can.
    pub fn is_pure(&self) -> bool {
        !matches!(self.kind, NodeKind::Call { .. })
            && self.children().into_iter().all(Node::is_pure)
    }
}
