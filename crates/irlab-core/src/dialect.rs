//! Dialect vocabulary
//!
//! A dialect groups operation definitions under one namespace. Definitions
//! describe the shape an operation must have; they are checked by the parser
//! and by the `verify` pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of operands an operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly this many operands
    Fixed(usize),
    /// Any number of operands
    Variadic,
}

impl Arity {
    /// Check whether `count` operands satisfy this arity
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => *n == count,
            Arity::Variadic => true,
        }
    }
}

/// Definition of one operation inside a dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpDefinition {
    /// Operation name without the dialect prefix
    pub name: String,

    /// Accepted operand count
    pub arity: Arity,

    /// Whether the operation defines a result
    pub has_result: bool,

    /// Attributes that must be present
    #[serde(default)]
    pub required_attributes: Vec<String>,

    /// Whether the operation is free of side effects
    pub pure: bool,

    /// Whether operand and result types must all agree
    pub same_operand_and_result_type: bool,
}

impl OpDefinition {
    /// Create a definition with no operands, no result and side effects
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: Arity::Fixed(0),
            has_result: false,
            required_attributes: Vec::new(),
            pure: false,
            same_operand_and_result_type: false,
        }
    }

    /// Set the operand arity
    pub fn operands(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Mark the operation as defining a result
    pub fn with_result(mut self) -> Self {
        self.has_result = true;
        self
    }

    /// Require an attribute
    pub fn requires(mut self, attribute: impl Into<String>) -> Self {
        self.required_attributes.push(attribute.into());
        self
    }

    /// Mark the operation as side-effect free
    pub fn pure(mut self) -> Self {
        self.pure = true;
        self
    }

    /// Require all operand types to match the result type
    pub fn same_operand_and_result_type(mut self) -> Self {
        self.same_operand_and_result_type = true;
        self
    }
}

/// A named set of operation definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    name: String,
    operations: BTreeMap<String, OpDefinition>,
}

impl Dialect {
    /// Create an empty dialect
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: BTreeMap::new(),
        }
    }

    /// Add an operation definition
    pub fn with_op(mut self, definition: OpDefinition) -> Self {
        self.operations.insert(definition.name.clone(), definition);
        self
    }

    /// Dialect namespace
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an operation by its unprefixed name
    pub fn get(&self, op: &str) -> Option<&OpDefinition> {
        self.operations.get(op)
    }

    /// Iterate over definitions sorted by name
    pub fn operations(&self) -> impl Iterator<Item = &OpDefinition> {
        self.operations.values()
    }

    /// Number of operation definitions
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the dialect defines no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
