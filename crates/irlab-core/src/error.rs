//! Error types for irlab Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Dialect '{0}' is already loaded")]
    DialectAlreadyLoaded(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DialectAlreadyLoaded("arith".to_string());
        assert_eq!(err.to_string(), "Dialect 'arith' is already loaded");

        let err = CoreError::InvalidType("f32".to_string());
        assert!(err.to_string().contains("f32"));
    }
}
