//! Recompute scheduling

use crate::executor::{execute, ExecutionResult};
use crate::projector::{DerivedView, Projector};
use crate::services::CompilerServices;
use crate::state::{PassPipeline, SourceBuffer};

/// Owns the execution result and the derived view
///
/// Every call to [`Scheduler::recompute`] runs the executor and then the
/// projector to completion before returning; there is no queueing and no
/// coalescing of requests.
#[derive(Debug)]
pub(crate) struct Scheduler {
    projector: Projector,
    result: ExecutionResult,
    view: DerivedView,
    recomputations: usize,
}

impl Scheduler {
    /// Create a scheduler that has not computed anything yet
    pub(crate) fn new(projector: Projector) -> Self {
        Self {
            projector,
            result: ExecutionResult::Empty,
            view: DerivedView::default(),
            recomputations: 0,
        }
    }

    /// Compute the initial view without counting it as a recomputation
    pub(crate) fn prime(
        &mut self,
        source: &SourceBuffer,
        pipeline: &PassPipeline,
        services: &dyn CompilerServices,
    ) {
        self.refresh(source, pipeline, services);
    }

    /// Rerun the pipeline and rerender the view
    pub(crate) fn recompute(
        &mut self,
        source: &SourceBuffer,
        pipeline: &PassPipeline,
        services: &dyn CompilerServices,
    ) {
        self.recomputations += 1;
        tracing::trace!("recompute #{}", self.recomputations);
        self.refresh(source, pipeline, services);
    }

    fn refresh(
        &mut self,
        source: &SourceBuffer,
        pipeline: &PassPipeline,
        services: &dyn CompilerServices,
    ) {
        let result = execute(source.as_str(), pipeline, services);
        self.view = self.projector.project(&result, pipeline, services);
        self.result = result;
    }

    pub(crate) fn result(&self) -> &ExecutionResult {
        &self.result
    }

    pub(crate) fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Number of recomputations triggered since creation
    pub(crate) fn recomputations(&self) -> usize {
        self.recomputations
    }
}
