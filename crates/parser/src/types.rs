// Static types assigned to nodes by the checker
//
// Types are read and written as short text forms so they can live in JSON
// configuration: `int`, `float`, `bool`, `string`, `nil`, `any`, `[T]`, and
// any other identifier names a user type such as `Money`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Type {
    /// Not yet checked
    #[default]
    Unknown,
    /// Interface-like type that accepts every value
    Any,
    Nil,
    Bool,
    Int,
    Float,
    String,
    Array(Box<Type>),
    Named(String),
}

impl Type {
    pub fn array_of(elem: Type) -> Type {
        Type::Array(Box::new(elem))
    }

    /// True for `Unknown` and `Any`: nothing can be ruled out about the value
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Type::Unknown | Type::Any)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Whether a parameter declared as `self` takes an argument of type `arg`.
    pub fn accepts(&self, arg: &Type) -> bool {
        match self {
            Type::Any => true,
            _ => self == arg,
        }
    }

    /// Element type when this is an array
    pub fn elem(&self) -> Option<&Type> {
        match self {
            Type::Array(elem) => Some(elem),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => write!(f, "unknown"),
            Type::Any => write!(f, "any"),
            Type::Nil => write!(f, "nil"),
            Type::Bool => write!(f, "bool"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "string"),
            Type::Array(elem) => write!(f, "[{}]", elem),
            Type::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParseError(pub String);

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type '{}'", self.0)
    }
}

impl std::error::Error for TypeParseError {}

impl FromStr for Type {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Ok(Type::array_of(inner.parse()?));
        }

        let ty = match s {
            "unknown" => Type::Unknown,
            "any" => Type::Any,
            "nil" => Type::Nil,
            "bool" => Type::Bool,
            "int" => Type::Int,
            "float" => Type::Float,
            "string" => Type::String,
            name if is_identifier(name) => Type::Named(name.to_string()),
            _ => return Err(TypeParseError(s.to_string())),
        };
        Ok(ty)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl TryFrom<String> for Type {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> Self {
        ty.to_string()
    }
}
