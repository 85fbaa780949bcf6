//! irlab Core - IR types and vocabulary for the irlab pass explorer
//!
//! This crate provides the fundamental types shared by the parser, the passes
//! and the session core:
//! - IR types (modules, operations, values, types, attributes)
//! - Dialect vocabulary and the per-run compilation [`Context`]
//! - The [`Printer`] that renders modules and errors as text
//! - Error types

pub mod context;
pub mod dialect;
pub mod error;
pub mod ir;
pub mod printer;

// Re-export commonly used types
pub use context::Context;
pub use dialect::{Arity, Dialect, OpDefinition};
pub use error::{CoreError, Result};
pub use ir::{Attribute, Module, OpName, Operation, Type, Value};
pub use printer::{Printable, Printer};
