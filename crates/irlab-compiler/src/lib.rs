//! irlab Compiler - dialects and passes
//!
//! This crate provides the built-in `arith` and `test` dialects, the
//! [`ModulePass`] interface, the built-in passes and the [`PassRegistry`]
//! that hands out fresh pass instances by name.

pub mod dialects;
pub mod error;
pub mod optimizer;
pub mod pass;
pub mod registry;
pub mod semantic;
pub mod transform;

// Re-export main types
pub use error::{ApplicationError, RegistryError, Result};
pub use pass::{ModulePass, PassFactory, PassInfo};
pub use registry::{factory_of, PassRegistry};

// Re-export dialect constructors
pub use dialects::{builtin_context, builtin_dialects};

// Re-export pass types
pub use optimizer::{
    Canonicalizer, CommonSubexpressionEliminator, ConstantFolder, DeadCodeEliminator,
};
pub use semantic::Verifier;
pub use transform::ValueRenamer;
