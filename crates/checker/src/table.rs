// Type table consulted by the checker and the overload resolver

use parser::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared parameter and return types of a function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Signature {
    pub fn new(params: Vec<Type>, ret: Type) -> Self {
        Signature { params, ret }
    }

    /// True when the function takes exactly `args`, position by position
    pub fn accepts(&self, args: &[&Type]) -> bool {
        self.params.len() == args.len()
            && self.params.iter().zip(args).all(|(param, arg)| param.accepts(arg))
    }
}

/// Structural descriptors for everything an expression may reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesTable {
    /// Environment variables and their types
    pub variables: HashMap<String, Type>,
    pub functions: HashMap<String, Signature>,
    /// Fields of named struct types
    pub structs: HashMap<String, HashMap<String, Type>>,
}

impl TypesTable {
    pub fn variable(&self, name: &str) -> Option<&Type> {
        self.variables.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }

    pub fn field(&self, ty: &Type, property: &str) -> Option<&Type> {
        match ty {
            Type::Named(name) => self.structs.get(name)?.get(property),
            _ => None,
        }
    }
}
