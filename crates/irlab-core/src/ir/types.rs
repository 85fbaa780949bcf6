//! Value types and attributes
//!
//! Types annotate operation results; attributes are the compile-time
//! constants attached to an operation (for example the `value` of an
//! `arith.constant`).

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported integer width
pub const MAX_INTEGER_WIDTH: u32 = 64;

/// Type of an SSA value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Signless integer of the given bit width (`i1` .. `i64`)
    Integer(u32),
    /// Target-sized index type
    Index,
}

impl Type {
    /// Parse a type from its textual form (`i32`, `index`, ...)
    pub fn parse(text: &str) -> Result<Self> {
        if text == "index" {
            return Ok(Type::Index);
        }

        let width = text
            .strip_prefix('i')
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| CoreError::InvalidType(text.to_string()))?;

        if width == 0 || width > MAX_INTEGER_WIDTH {
            return Err(CoreError::InvalidType(format!(
                "{} (integer width must be between 1 and {})",
                text, MAX_INTEGER_WIDTH
            )));
        }

        Ok(Type::Integer(width))
    }

    /// Bit width of the type; `index` is treated as 64 bits wide
    pub fn bit_width(&self) -> u32 {
        match self {
            Type::Integer(width) => *width,
            Type::Index => MAX_INTEGER_WIDTH,
        }
    }

    /// Wrap a value into the signed range of this type
    pub fn wrap(&self, value: i64) -> i64 {
        let width = self.bit_width();
        if width >= MAX_INTEGER_WIDTH {
            return value;
        }
        let shift = MAX_INTEGER_WIDTH - width;
        (value << shift) >> shift
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer(width) => write!(f, "i{}", width),
            Type::Index => write!(f, "index"),
        }
    }
}

/// Compile-time constant attached to an operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    /// Integer literal
    Integer(i64),
    /// Boolean literal
    Bool(bool),
    /// String literal
    String(String),
}

impl Attribute {
    /// Integer payload, if this is an integer attribute
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Attribute::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean attribute
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Attribute::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, if this is a string attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attribute::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Integer(value) => write!(f, "{}", value),
            Attribute::Bool(value) => write!(f, "{}", value),
            Attribute::String(value) => {
                f.write_str("\"")?;
                for ch in value.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        other => write!(f, "{}", other)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Attribute::Integer(value)
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Attribute::Bool(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::String(value.to_string())
    }
}
