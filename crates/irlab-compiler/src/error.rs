//! Pass error types

use irlab_core::{CoreError, Printable, Printer};
use thiserror::Error;

/// Failure while applying a pass to a module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// The pass could not complete its transformation
    #[error("pass '{pass}' failed: {message}")]
    PassFailed { pass: String, message: String },

    /// The module violates an invariant of one of its operations
    #[error("pass '{pass}' failed: invalid '{op}': {message}")]
    VerificationFailed {
        pass: String,
        op: String,
        message: String,
    },

    /// No pass is registered under this name
    #[error("unknown pass '{0}'")]
    UnknownPass(String),

    /// The pass tripped over the compilation context
    #[error("context error: {0}")]
    Context(#[from] CoreError),
}

impl ApplicationError {
    /// Create a generic pass failure
    pub fn failed(pass: impl Into<String>, message: impl Into<String>) -> Self {
        ApplicationError::PassFailed {
            pass: pass.into(),
            message: message.into(),
        }
    }
}

impl Printable for ApplicationError {
    fn print(&self, printer: &mut Printer) {
        printer.write_line(&format!("error: {}", self));
    }
}

/// Pass registration error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("a pass named '{0}' is already registered")]
    DuplicatePass(String),
}

/// Result type for pass application
pub type Result<T> = std::result::Result<T, ApplicationError>;
