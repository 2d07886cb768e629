//! Static type assignment.
//!
//! The checker walks the tree bottom-up and stores the resolved type in
//! every node's `ty`. Operators backed by an overload take the overload's
//! return type, so the operator patcher can later swap the node for a call
//! without changing what the parent sees.

use crate::config::Config;
use crate::error::{CheckError, CheckResult};
use crate::overload::find_suitable_operator_overload;
use parser::{walk, BinaryOp, Node, NodeKind, Type, UnaryOp, Value, Visitor};
use parser::value::Key;
use tracing::debug;

/// Type-check `tree` in place and return the type of the whole expression.
/// Stops at the first error.
pub fn check(tree: &mut Node, config: &Config) -> CheckResult<Type> {
    let mut checker = Checker {
        config,
        error: None,
    };
    walk(tree, &mut checker);

    match checker.error {
        Some(err) => Err(err),
        None => {
            debug!(ty = %tree.ty, "type checked");
            Ok(tree.ty.clone())
        }
    }
}

struct Checker<'c> {
    config: &'c Config,
    error: Option<CheckError>,
}

impl Visitor for Checker<'_> {
    fn exit(&mut self, node: &mut Node) {
        if self.error.is_some() {
            return;
        }
        match self.infer(node) {
            Ok(ty) => node.ty = ty,
            Err(err) => self.error = Some(err),
        }
    }
}

impl Checker<'_> {
    fn infer(&self, node: &Node) -> CheckResult<Type> {
        let ty = match &node.kind {
            NodeKind::Nil => Type::Nil,
            NodeKind::Integer(_) => Type::Int,
            NodeKind::Float(_) => Type::Float,
            NodeKind::Bool(_) => Type::Bool,
            NodeKind::String(_) => Type::String,
            NodeKind::Constant(value) => type_of_value(value),

            NodeKind::Identifier(name) => self
                .config
                .types
                .variable(name)
                .cloned()
                .ok_or_else(|| CheckError::UnknownName {
                    name: name.clone(),
                    span: node.span.clone(),
                })?,

            NodeKind::Unary { op, node: operand } => unary(*op, &operand.ty).ok_or_else(|| {
                CheckError::UnaryMismatch {
                    op: op.symbol().to_string(),
                    operand: operand.ty.clone(),
                    span: node.span.clone(),
                }
            })?,

            NodeKind::Binary { op, left, right } => self
                .binary(*op, &left.ty, &right.ty)
                .ok_or_else(|| CheckError::BinaryMismatch {
                    op: op.symbol().to_string(),
                    left: left.ty.clone(),
                    right: right.ty.clone(),
                    span: node.span.clone(),
                })?,

            NodeKind::Index { node: base, index } => {
                let index_ok = index.ty == Type::Int || index.ty.is_dynamic();
                match &base.ty {
                    base_ty if base_ty.is_dynamic() => Type::Any,
                    Type::Array(elem) if index_ok => (**elem).clone(),
                    Type::String if index_ok => Type::String,
                    base_ty => {
                        return Err(CheckError::NotIndexable {
                            ty: base_ty.clone(),
                            index: index.ty.clone(),
                            span: node.span.clone(),
                        });
                    }
                }
            }

            NodeKind::Member {
                node: base,
                property,
            } => {
                if base.ty.is_dynamic() {
                    Type::Any
                } else {
                    self.config
                        .types
                        .field(&base.ty, property)
                        .cloned()
                        .ok_or_else(|| CheckError::UnknownField {
                            ty: base.ty.clone(),
                            property: property.clone(),
                            span: node.span.clone(),
                        })?
                }
            }

            NodeKind::Call { callee, args } => {
                let signature = self.config.types.function(callee).ok_or_else(|| {
                    CheckError::UnknownFunction {
                        name: callee.clone(),
                        span: node.span.clone(),
                    }
                })?;
                let arg_types: Vec<&Type> = args.iter().map(|arg| &arg.ty).collect();
                if !signature.accepts(&arg_types) {
                    return Err(CheckError::ArgumentMismatch {
                        name: callee.clone(),
                        expected: signature.params.clone(),
                        found: arg_types.into_iter().cloned().collect(),
                        span: node.span.clone(),
                    });
                }
                signature.ret.clone()
            }

            NodeKind::Range { from, to } => {
                for bound in [from, to] {
                    if bound.ty != Type::Int && !bound.ty.is_dynamic() {
                        return Err(CheckError::RangeBound {
                            found: bound.ty.clone(),
                            span: bound.span.clone(),
                        });
                    }
                }
                Type::array_of(Type::Int)
            }

            NodeKind::Array(elements) => {
                Type::array_of(common_type(elements.iter().map(|e| &e.ty)))
            }

            NodeKind::Conditional {
                cond,
                then,
                otherwise,
            } => {
                if cond.ty != Type::Bool && !cond.ty.is_dynamic() {
                    return Err(CheckError::NonBoolCondition {
                        found: cond.ty.clone(),
                        span: cond.span.clone(),
                    });
                }
                if then.ty == otherwise.ty {
                    then.ty.clone()
                } else {
                    Type::Any
                }
            }
        };

        Ok(ty)
    }

    fn binary(&self, op: BinaryOp, left: &Type, right: &Type) -> Option<Type> {
        if let Some(candidates) = self.config.operators.get(op.symbol()) {
            if let Some(overload) =
                find_suitable_operator_overload(candidates, &self.config.types, left, right)
            {
                return Some(overload.ret);
            }
        }

        let dynamic = left.is_dynamic() || right.is_dynamic();
        match op {
            BinaryOp::Add if *left == Type::String && *right == Type::String => Some(Type::String),
            _ if op.is_arithmetic() => {
                if left.is_numeric() && right.is_numeric() {
                    Some(arithmetic(op, left, right))
                } else if dynamic && operand_fits(left) && operand_fits(right) {
                    Some(Type::Any)
                } else {
                    None
                }
            }
            BinaryOp::Eq | BinaryOp::NotEq => Some(Type::Bool),
            _ if op.is_ordering() => {
                let comparable = (left.is_numeric() && right.is_numeric())
                    || (*left == Type::String && *right == Type::String)
                    || dynamic;
                comparable.then_some(Type::Bool)
            }
            BinaryOp::And | BinaryOp::Or => {
                let is_bool = |ty: &Type| *ty == Type::Bool || ty.is_dynamic();
                (is_bool(left) && is_bool(right)).then_some(Type::Bool)
            }
            BinaryOp::In => {
                matches!(right, Type::Array(_) | Type::Unknown | Type::Any).then_some(Type::Bool)
            }
            _ => None,
        }
    }
}

/// Operand that may meet a dynamic value in arithmetic
fn operand_fits(ty: &Type) -> bool {
    ty.is_numeric() || ty.is_dynamic() || *ty == Type::String
}

/// `int op int` stays `int`, except `/` and `**` which always give `float`
fn arithmetic(op: BinaryOp, left: &Type, right: &Type) -> Type {
    match op {
        BinaryOp::Div | BinaryOp::Pow => Type::Float,
        _ if *left == Type::Int && *right == Type::Int => Type::Int,
        _ => Type::Float,
    }
}

fn unary(op: UnaryOp, operand: &Type) -> Option<Type> {
    match op {
        UnaryOp::Negate | UnaryOp::Plus if operand.is_numeric() => Some(operand.clone()),
        UnaryOp::Not if *operand == Type::Bool => Some(Type::Bool),
        _ if operand.is_dynamic() => Some(match op {
            UnaryOp::Not => Type::Bool,
            _ => Type::Any,
        }),
        _ => None,
    }
}

/// The shared type of a list, or `any` when it is empty or mixed
fn common_type<'a>(mut types: impl Iterator<Item = &'a Type>) -> Type {
    let Some(first) = types.next() else {
        return Type::Any;
    };
    if first.is_dynamic() {
        return Type::Any;
    }
    if types.all(|ty| ty == first) {
        first.clone()
    } else {
        Type::Any
    }
}

pub fn type_of_value(value: &Value) -> Type {
    match value {
        Value::Nil => Type::Nil,
        Value::Bool(_) => Type::Bool,
        Value::Int(_) => Type::Int,
        Value::Float(_) => Type::Float,
        Value::String(_) => Type::String,
        Value::Array(items) => {
            let types: Vec<Type> = items.iter().map(type_of_value).collect();
            Type::array_of(common_type(types.iter()))
        }
        Value::Set(keys) => {
            let types: Vec<Type> = keys
                .iter()
                .map(|key| match key {
                    Key::Int(_) => Type::Int,
                    Key::String(_) => Type::String,
                })
                .collect();
            Type::array_of(common_type(types.iter()))
        }
    }
}
