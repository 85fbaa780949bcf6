//! IR Module
//!
//! A module is an ordered sequence of operations. Operand references are
//! stored by value name (without the leading `%`).

use crate::ir::{Attribute, Type};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fully qualified operation name (`dialect.op`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OpName {
    /// Dialect namespace (e.g. "arith")
    pub dialect: String,
    /// Operation name inside the dialect (e.g. "addi")
    pub op: String,
}

impl OpName {
    /// Create a new operation name
    pub fn new(dialect: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            op: op.into(),
        }
    }

    /// Split `dialect.op` at the first dot
    pub fn parse(full: &str) -> Option<Self> {
        let (dialect, op) = full.split_once('.')?;
        if dialect.is_empty() || op.is_empty() {
            return None;
        }
        Some(Self::new(dialect, op))
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.dialect, self.op)
    }
}

/// An SSA value defined by an operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
    /// Value name without the `%` sigil
    pub name: String,
    /// Value type
    pub ty: Type,
}

impl Value {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A single IR operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name
    pub name: OpName,

    /// Result defined by this operation, if any
    pub result: Option<Value>,

    /// Names of the consumed values, in order
    pub operands: Vec<String>,

    /// Attributes, kept sorted by key so printing is canonical
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Operation {
    /// Create an operation with no result, operands or attributes
    pub fn new(name: OpName) -> Self {
        Self {
            name,
            result: None,
            operands: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set the result value
    pub fn with_result(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.result = Some(Value::new(name, ty));
        self
    }

    /// Append an operand
    pub fn with_operand(mut self, name: impl Into<String>) -> Self {
        self.operands.push(name.into());
        self
    }

    /// Set an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Attribute>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Build an `arith.constant` defining `name`
    pub fn constant(name: impl Into<String>, value: i64, ty: Type) -> Self {
        Self::new(OpName::new("arith", "constant"))
            .with_result(name, ty)
            .with_attribute("value", ty.wrap(value))
    }

    /// Check whether this is `dialect.op`
    pub fn is(&self, dialect: &str, op: &str) -> bool {
        self.name.dialect == dialect && self.name.op == op
    }

    /// Result name, if the operation defines one
    pub fn result_name(&self) -> Option<&str> {
        self.result.as_ref().map(|value| value.name.as_str())
    }

    /// Result type, if the operation defines one
    pub fn result_type(&self) -> Option<Type> {
        self.result.as_ref().map(|value| value.ty)
    }

    /// Look up an attribute by key
    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// Constant integer value if this is an `arith.constant`
    pub fn constant_value(&self) -> Option<i64> {
        if !self.is("arith", "constant") {
            return None;
        }
        self.attribute("value").and_then(Attribute::as_integer)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(result) = &self.result {
            write!(f, "%{} = ", result.name)?;
        }

        write!(f, "{}", self.name)?;

        for (i, operand) in self.operands.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}%{}", sep, operand)?;
        }

        if !self.attributes.is_empty() {
            f.write_str(" {")?;
            for (i, (key, value)) in self.attributes.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} = {}", key, value)?;
            }
            f.write_str("}")?;
        }

        if let Some(result) = &self.result {
            write!(f, " : {}", result.ty)?;
        }

        Ok(())
    }
}

/// An IR module
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    /// The operations, in program order
    pub operations: Vec<Operation>,
}

impl Module {
    /// Create an empty module
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module from a list of operations
    pub fn with_operations(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the module has no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append an operation
    pub fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Iterate over operations in program order
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Find the operation defining `name`
    pub fn defining_op(&self, name: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.result_name() == Some(name))
    }

    /// Type of the value `name`, if it is defined in this module
    pub fn value_type(&self, name: &str) -> Option<Type> {
        self.defining_op(name).and_then(Operation::result_type)
    }

    /// Number of operands across the module that reference `name`
    pub fn use_count(&self, name: &str) -> usize {
        self.operations
            .iter()
            .flat_map(|op| op.operands.iter())
            .filter(|operand| operand.as_str() == name)
            .count()
    }

    /// Rewrite every use of `from` into a use of `to`; returns the number of rewritten operands
    pub fn replace_all_uses(&mut self, from: &str, to: &str) -> usize {
        let mut replaced = 0;
        for operand in self
            .operations
            .iter_mut()
            .flat_map(|op| op.operands.iter_mut())
        {
            if operand == from {
                *operand = to.to_string();
                replaced += 1;
            }
        }
        replaced
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::printer::Printer::new().print(self))
    }
}
