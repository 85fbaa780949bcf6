//! irlab Parser - IR text to module parser
//!
//! This crate converts the textual IR form into [`irlab_core::Module`]
//! values, validating operations against a loaded [`irlab_core::Context`].
//!
//! Parsing runs in three stages: a `chumsky` lexer produces spanned tokens,
//! a token grammar builds a syntax tree, and lowering checks the tree against
//! the vocabulary and SSA rules.

pub mod error;
pub mod lexer;
pub mod module_parser;
pub mod syntax;

// Re-export main parser types
pub use error::{ParseError, ParseErrorKind, Result};
pub use lexer::{lexer, Span, Spanned, Token};
pub use module_parser::ModuleParser;
