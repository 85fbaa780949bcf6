//! SDK error types

use crate::clipboard::ClipboardError;
use irlab_compiler::RegistryError;
use thiserror::Error;

/// SDK error type
///
/// Pipeline failures are not errors at this level: they are carried as
/// [`ExecutionResult::Failure`](crate::ExecutionResult::Failure) values.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The selected pass is not registered
    #[error("Unknown pass: {0}")]
    UnknownPass(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML configuration could not be decoded
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Clipboard collaborator failed
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Pass registration failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pass() {
        let error = SdkError::UnknownPass("loop-unroll".to_string());
        assert_eq!(error.to_string(), "Unknown pass: loop-unroll");
    }

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("empty query separator".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("empty query separator"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<u32>("[not a number").unwrap_err();
        let sdk_error: SdkError = yaml_error.into();
        assert!(sdk_error.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_clipboard_error_conversion() {
        let sdk_error: SdkError = ClipboardError::Unavailable("no display".to_string()).into();
        assert!(sdk_error.to_string().contains("no display"));
    }

    #[test]
    fn test_registry_error_conversion() {
        let sdk_error: SdkError = RegistryError::DuplicatePass("dce".to_string()).into();
        assert!(matches!(sdk_error, SdkError::Registry(_)));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }
}
