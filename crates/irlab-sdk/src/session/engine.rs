//! Session - Main API for exploring pass pipelines

use super::scheduler::Scheduler;
use crate::clipboard::Clipboard;
use crate::config::SessionConfig;
use crate::error::{Result, SdkError};
use crate::executor::ExecutionResult;
use crate::projector::{DerivedView, Projector};
use crate::services::{CompilerServices, StandardServices};
use crate::state::{PassId, PassPipeline, SourceBuffer};
use irlab_compiler::PassInfo;
use std::sync::Arc;

/// Interactive pass-pipeline session
///
/// Each of [`select_pass`](Session::select_pass),
/// [`clear_passes`](Session::clear_passes),
/// [`set_source`](Session::set_source) and
/// [`clear_source`](Session::clear_source) triggers exactly one
/// recomputation, which has finished by the time the call returns.
pub struct Session {
    services: Arc<dyn CompilerServices>,
    config: SessionConfig,
    source: SourceBuffer,
    pipeline: PassPipeline,
    scheduler: Scheduler,
}

impl Session {
    /// Create a session with the built-in services
    pub fn new(config: SessionConfig) -> Result<Self> {
        let services = StandardServices::new().allow_unregistered(config.allow_unregistered);
        Self::with_services(config, Arc::new(services))
    }

    /// Create a session over the given services
    ///
    /// Fails if `config` does not validate.
    pub fn with_services(
        config: SessionConfig,
        services: Arc<dyn CompilerServices>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, services))
    }

    fn assemble(config: SessionConfig, services: Arc<dyn CompilerServices>) -> Self {
        let mut scheduler = Scheduler::new(Projector::new(&config));
        let source = SourceBuffer::new();
        let pipeline = PassPipeline::new();
        scheduler.prime(&source, &pipeline, services.as_ref());

        tracing::debug!(
            "session created with {} available passes",
            services.list_passes().len()
        );

        Self {
            services,
            config,
            source,
            pipeline,
            scheduler,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Append a registered pass to the pipeline
    ///
    /// Unknown names are rejected and leave the session untouched.
    pub fn select_pass(&mut self, name: &str) -> Result<()> {
        if self.services.pass_factory(name).is_none() {
            tracing::debug!("rejected unknown pass '{}'", name);
            return Err(SdkError::UnknownPass(name.to_string()));
        }

        self.pipeline.append(PassId::new(name));
        self.recompute();
        Ok(())
    }

    /// Remove every pass from the pipeline
    pub fn clear_passes(&mut self) {
        self.pipeline.clear();
        self.recompute();
    }

    /// Replace the source text
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source.set(text);
        self.recompute();
    }

    /// Reset the source text to empty
    pub fn clear_source(&mut self) {
        self.source.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.scheduler
            .recompute(&self.source, &self.pipeline, self.services.as_ref());
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Copy the output text
    pub fn copy_output(&self, clipboard: &mut dyn Clipboard) -> Result<()> {
        self.copy(clipboard, &self.view().output)
    }

    /// Copy the query text
    pub fn copy_query(&self, clipboard: &mut dyn Clipboard) -> Result<()> {
        self.copy(clipboard, &self.view().query)
    }

    fn copy(&self, clipboard: &mut dyn Clipboard, text: &str) -> Result<()> {
        clipboard.set_text(text).map_err(|err| {
            tracing::warn!("copy to clipboard failed: {}", err);
            SdkError::from(err)
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Passes that can be selected, sorted by name
    pub fn available_passes(&self) -> Vec<PassInfo> {
        self.services.list_passes()
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn pipeline(&self) -> &PassPipeline {
        &self.pipeline
    }

    pub fn result(&self) -> &ExecutionResult {
        self.scheduler.result()
    }

    pub fn view(&self) -> &DerivedView {
        self.scheduler.view()
    }

    /// Rendered output text
    pub fn output(&self) -> &str {
        &self.view().output
    }

    /// Reconstructed invocation text
    pub fn query(&self) -> &str {
        &self.view().query
    }

    /// Number of mutation-triggered recomputations so far
    pub fn recompute_count(&self) -> usize {
        self.scheduler.recomputations()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        // The default configuration always validates
        Self::assemble(SessionConfig::default(), Arc::new(StandardServices::new()))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source)
            .field("pipeline", &self.pipeline)
            .field("result", self.result())
            .field("recompute_count", &self.recompute_count())
            .finish()
    }
}
