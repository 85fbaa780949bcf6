//! Intermediate Representation (IR) for irlab
//!
//! The IR is a flat SSA module: an ordered list of operations, each of which
//! may define one named result and consume previously defined values.

pub mod module;
pub mod types;

pub use module::{Module, OpName, Operation, Value};
pub use types::{Attribute, Type};
