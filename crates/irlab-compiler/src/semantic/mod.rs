//! Semantic analysis module
//!
//! Verification of modules against the loaded vocabulary.

pub mod verifier;

pub use verifier::Verifier;
