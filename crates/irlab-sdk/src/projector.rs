//! View projector
//!
//! Derives the two user-visible texts from the session state: the rendered
//! output and the reconstructed command-line invocation.

use crate::config::SessionConfig;
use crate::executor::ExecutionResult;
use crate::services::CompilerServices;
use crate::state::PassPipeline;

/// Text shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Rendering of the execution result
    pub output: String,
    /// Reconstructed invocation for the current pipeline
    pub query: String,
}

/// Renders results and pipelines as text
#[derive(Debug, Clone)]
pub struct Projector {
    empty_output: String,
    query_template: String,
    query_separator: String,
}

impl Projector {
    /// Create a projector from the session configuration
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            empty_output: config.empty_output.clone(),
            query_template: config.query_template.clone(),
            query_separator: config.query_separator.clone(),
        }
    }

    /// Render an execution result
    ///
    /// Modules and failures go through the same printing routine.
    pub fn render_output(
        &self,
        result: &ExecutionResult,
        services: &dyn CompilerServices,
    ) -> String {
        match result {
            ExecutionResult::Empty => self.empty_output.clone(),
            ExecutionResult::Module(module) => services.print(module),
            ExecutionResult::Failure(err) => services.print(err),
        }
    }

    /// Render a pipeline as an invocation string
    pub fn render_query(&self, pipeline: &PassPipeline) -> String {
        format!(
            "{}{}",
            self.query_template,
            pipeline.names().join(&self.query_separator)
        )
    }

    /// Render both texts
    pub fn project(
        &self,
        result: &ExecutionResult,
        pipeline: &PassPipeline,
        services: &dyn CompilerServices,
    ) -> DerivedView {
        DerivedView {
            output: self.render_output(result, services),
            query: self.render_query(pipeline),
        }
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
