//! Configuration types for Session

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text shown when there is no source
pub const DEFAULT_EMPTY_OUTPUT: &str = "No input";

/// Invocation prefix of the query text
pub const DEFAULT_QUERY_TEMPLATE: &str = "irlab-opt -p \n";

/// Separator between pass names in the query text
pub const DEFAULT_QUERY_SEPARATOR: &str = ", \n";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Output text for an empty source
    pub empty_output: String,

    /// Prefix of the reconstructed invocation
    pub query_template: String,

    /// Separator between pass names in the reconstructed invocation
    pub query_separator: String,

    /// Accept operations that no loaded dialect defines
    pub allow_unregistered: bool,
}

impl SessionConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            empty_output: DEFAULT_EMPTY_OUTPUT.to_string(),
            query_template: DEFAULT_QUERY_TEMPLATE.to_string(),
            query_separator: DEFAULT_QUERY_SEPARATOR.to_string(),
            allow_unregistered: true,
        }
    }

    /// Set the empty-source output text
    pub fn with_empty_output(mut self, text: impl Into<String>) -> Self {
        self.empty_output = text.into();
        self
    }

    /// Set the query template
    pub fn with_query_template(mut self, template: impl Into<String>) -> Self {
        self.query_template = template.into();
        self
    }

    /// Set the query separator
    pub fn with_query_separator(mut self, separator: impl Into<String>) -> Self {
        self.query_separator = separator.into();
        self
    }

    /// Allow or reject unregistered operations
    pub fn allow_unregistered(mut self, allow: bool) -> Self {
        self.allow_unregistered = allow;
        self
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Check the configuration for unusable values
    pub fn validate(&self) -> Result<()> {
        if self.empty_output.is_empty() {
            return Err(SdkError::ConfigError(
                "empty_output must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
