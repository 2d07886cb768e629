// Type checking errors
//
// Every error carries the span of the offending node so it can be rendered
// with Ariadne (see error_report.rs).

use parser::{Span, Type};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("unknown name '{name}'")]
    UnknownName { name: String, span: Span },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String, span: Span },

    #[error("invalid operation: {left} {op} {right}")]
    BinaryMismatch {
        op: String,
        left: Type,
        right: Type,
        span: Span,
    },

    #[error("invalid operation: {op} {operand}")]
    UnaryMismatch {
        op: String,
        operand: Type,
        span: Span,
    },

    #[error("cannot index {ty} with {index}")]
    NotIndexable { ty: Type, index: Type, span: Span },

    #[error("type {ty} has no field '{property}'")]
    UnknownField {
        ty: Type,
        property: String,
        span: Span,
    },

    #[error("cannot call {name}({}) with ({})", join(.expected), join(.found))]
    ArgumentMismatch {
        name: String,
        expected: Vec<Type>,
        found: Vec<Type>,
        span: Span,
    },

    #[error("range bounds must be int, found {found}")]
    RangeBound { found: Type, span: Span },

    #[error("condition must be bool, found {found}")]
    NonBoolCondition { found: Type, span: Span },
}

fn join(types: &[Type]) -> String {
    types
        .iter()
        .map(Type::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CheckError {
    pub fn span(&self) -> &Span {
        match self {
            CheckError::UnknownName { span, .. }
            | CheckError::UnknownFunction { span, .. }
            | CheckError::BinaryMismatch { span, .. }
            | CheckError::UnaryMismatch { span, .. }
            | CheckError::NotIndexable { span, .. }
            | CheckError::UnknownField { span, .. }
            | CheckError::ArgumentMismatch { span, .. }
            | CheckError::RangeBound { span, .. }
            | CheckError::NonBoolCondition { span, .. } => span,
        }
    }

    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::UnknownName { .. } => "E201",
            CheckError::UnknownFunction { .. } => "E202",
            CheckError::BinaryMismatch { .. } => "E203",
            CheckError::UnaryMismatch { .. } => "E204",
            CheckError::NotIndexable { .. } => "E205",
            CheckError::UnknownField { .. } => "E206",
            CheckError::ArgumentMismatch { .. } => "E207",
            CheckError::RangeBound { .. } => "E208",
            CheckError::NonBoolCondition { .. } => "E209",
        }
    }
}

/// Convenient Result type for checking
pub type CheckResult<T> = Result<T, CheckError>;
