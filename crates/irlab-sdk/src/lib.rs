//! irlab SDK
//!
//! The interactive pass-pipeline core: a [`Session`] holds source text and
//! an ordered list of selected passes, and recomputes the transformed module
//! (or the failure) synchronously after every change.

pub mod builder;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod executor;
pub mod projector;
pub mod services;
pub mod session;
pub mod state;

// Re-export main types
pub use builder::SessionBuilder;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::SessionConfig;
pub use error::{Result, SdkError};
pub use executor::{execute, ExecutionResult, PipelineError};
pub use projector::{DerivedView, Projector};
pub use services::{CompilerServices, StandardServices};
pub use session::Session;
pub use state::{PassId, PassPipeline, SourceBuffer};

// Re-export commonly used types from dependencies
pub use irlab_compiler::{ApplicationError, ModulePass, PassFactory, PassInfo};
pub use irlab_core::{Context, Module, Printable};
pub use irlab_parser::ParseError;
