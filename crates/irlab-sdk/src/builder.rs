//! Builder pattern for Session

use crate::config::SessionConfig;
use crate::error::Result;
use crate::services::{CompilerServices, StandardServices};
use crate::session::Session;
use irlab_compiler::{ModulePass, PassInfo};
use irlab_core::Dialect;
use std::path::Path;
use std::sync::Arc;

/// Builder for Session
///
/// # Example
///
/// ```rust,ignore
/// use irlab_sdk::SessionBuilder;
///
/// // Built-in dialects and passes
/// let mut session = SessionBuilder::new().build()?;
///
/// // Strict vocabulary and a custom pass
/// let mut session = SessionBuilder::new()
///     .allow_unregistered(false)
///     .add_pass("nop", "Does nothing", || Nop)
///     .build()?;
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    dialects: Vec<Dialect>,
    passes: Vec<(PassInfo, irlab_compiler::PassFactory)>,
    services: Option<Arc<dyn CompilerServices>>,
}

impl SessionBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SessionConfig::new(),
            dialects: Vec::new(),
            passes: Vec::new(),
            services: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a YAML file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = SessionConfig::from_file(path)?;
        Ok(self)
    }

    /// Set the empty-source output text
    pub fn with_empty_output(mut self, text: impl Into<String>) -> Self {
        self.config.empty_output = text.into();
        self
    }

    /// Allow or reject unregistered operations
    pub fn allow_unregistered(mut self, allow: bool) -> Self {
        self.config.allow_unregistered = allow;
        self
    }

    /// Load an extra dialect into every run's context
    pub fn add_dialect(mut self, dialect: Dialect) -> Self {
        self.dialects.push(dialect);
        self
    }

    /// Register an extra pass
    pub fn add_pass<P, F>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Self
    where
        P: ModulePass + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        self.passes.push((
            PassInfo::new(name, description),
            Arc::new(move || Box::new(factory()) as Box<dyn ModulePass>),
        ));
        self
    }

    /// Use custom compiler services
    ///
    /// Extra dialects and passes added to the builder are ignored when
    /// custom services are supplied.
    pub fn with_services(mut self, services: Arc<dyn CompilerServices>) -> Self {
        self.services = Some(services);
        self
    }

    /// Build the session
    pub fn build(self) -> Result<Session> {
        let services = match self.services {
            Some(services) => services,
            None => {
                let mut services =
                    StandardServices::new().allow_unregistered(self.config.allow_unregistered);
                for dialect in self.dialects {
                    services = services.with_dialect(dialect);
                }
                for (info, factory) in self.passes {
                    services.register_pass(info, factory)?;
                }
                Arc::new(services)
            }
        };

        Session::with_services(self.config, services)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
