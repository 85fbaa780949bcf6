//! Structural transformations

pub mod rename_values;

pub use rename_values::ValueRenamer;
