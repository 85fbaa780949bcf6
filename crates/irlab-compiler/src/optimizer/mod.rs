//! IR optimizers
//!
//! Provides optimization passes for modules.

pub mod canonicalize;
pub mod constant_folding;
pub mod cse;
pub mod dead_code_elimination;

pub use canonicalize::Canonicalizer;
pub use constant_folding::ConstantFolder;
pub use cse::CommonSubexpressionEliminator;
pub use dead_code_elimination::DeadCodeEliminator;
