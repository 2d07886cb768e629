// Pass configuration: the type table and the operator-overload table

use crate::table::{Signature, TypesTable};
use parser::Type;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operator symbol to candidate implementation names, in declaration order
pub type OperatorTable = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub types: TypesTable,
    pub operators: OperatorTable,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: &str, ty: Type) -> Self {
        self.types.variables.insert(name.to_string(), ty);
        self
    }

    pub fn with_function(mut self, name: &str, params: Vec<Type>, ret: Type) -> Self {
        self.types
            .functions
            .insert(name.to_string(), Signature::new(params, ret));
        self
    }

    pub fn with_struct(mut self, name: &str, fields: &[(&str, Type)]) -> Self {
        let fields = fields
            .iter()
            .map(|(field, ty)| (field.to_string(), ty.clone()))
            .collect();
        self.types.structs.insert(name.to_string(), fields);
        self
    }

    /// Register `function` as one more candidate for `operator`
    pub fn with_operator(mut self, operator: &str, function: &str) -> Self {
        self.operators
            .entry(operator.to_string())
            .or_default()
            .push(function.to_string());
        self
    }
}
