//! Pipeline executor
//!
//! Maps `(source, pipeline)` to an [`ExecutionResult`]. Every call starts
//! from a freshly loaded context and fresh pass instances, so nothing a run
//! does can be observed by the next one. Every failure is turned into a
//! value; nothing escapes as an error.

use crate::services::CompilerServices;
use crate::state::PassPipeline;
use irlab_compiler::ApplicationError;
use irlab_core::{CoreError, Module, Printable, Printer};
use irlab_parser::ParseError;
use thiserror::Error;

/// Why a run produced no module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The source text is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A pass failed
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The vocabulary could not be loaded
    #[error("context error: {0}")]
    Context(#[from] CoreError),
}

impl Printable for PipelineError {
    fn print(&self, printer: &mut Printer) {
        match self {
            PipelineError::Parse(err) => err.print(printer),
            PipelineError::Application(err) => err.print(printer),
            PipelineError::Context(err) => printer.write_line(&format!("error: {}", err)),
        }
    }
}

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExecutionResult {
    /// The source is empty
    #[default]
    Empty,
    /// Every pass succeeded
    Module(Module),
    /// Parsing or a pass failed
    Failure(PipelineError),
}

impl ExecutionResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExecutionResult::Empty)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionResult::Failure(_))
    }

    /// The resulting module, if the run succeeded
    pub fn module(&self) -> Option<&Module> {
        match self {
            ExecutionResult::Module(module) => Some(module),
            _ => None,
        }
    }

    /// The failure, if the run failed
    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            ExecutionResult::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Run `pipeline` over `source`
pub fn execute(
    source: &str,
    pipeline: &PassPipeline,
    services: &dyn CompilerServices,
) -> ExecutionResult {
    if source.is_empty() {
        return ExecutionResult::Empty;
    }

    let span = tracing::debug_span!("execute", passes = pipeline.len());
    let _guard = span.enter();

    match run(source, pipeline, services) {
        Ok(module) => {
            tracing::debug!("pipeline produced {} operations", module.len());
            ExecutionResult::Module(module)
        }
        Err(err) => {
            tracing::debug!("pipeline failed: {}", err);
            ExecutionResult::Failure(err)
        }
    }
}

fn run(
    source: &str,
    pipeline: &PassPipeline,
    services: &dyn CompilerServices,
) -> Result<Module, PipelineError> {
    let mut ctx = services.load_vocabulary()?;
    let mut module = services.parse(source, &ctx)?;

    for id in pipeline.iter() {
        let factory = services
            .pass_factory(id.as_str())
            .ok_or_else(|| ApplicationError::UnknownPass(id.to_string()))?;

        let mut pass = factory();
        tracing::debug!("applying pass '{}'", pass.name());
        pass.apply(&mut ctx, &mut module)?;
    }

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StandardServices;

    const SOURCE: &str = "module {
  %a = arith.constant {value = 2} : i64
  %b = arith.muli %a, %a : i64
  test.print %b
}
";

    #[test]
    fn test_empty_source_is_empty_for_any_pipeline() {
        let services = StandardServices::new();
        let pipeline: PassPipeline = ["no-such-pass"].into_iter().collect();
        assert_eq!(execute("", &pipeline, &services), ExecutionResult::Empty);
        assert_eq!(
            execute("", &PassPipeline::new(), &services),
            ExecutionResult::Empty
        );
    }

    #[test]
    fn test_identity_pipeline() {
        let services = StandardServices::new();
        let result = execute(SOURCE, &PassPipeline::new(), &services);

        let ctx = services.load_vocabulary().unwrap();
        let parsed = services.parse(SOURCE, &ctx).unwrap();
        assert_eq!(result.module(), Some(&parsed));
    }

    #[test]
    fn test_parse_failure_short_circuits() {
        let services = StandardServices::new();
        let pipeline: PassPipeline = ["no-such-pass"].into_iter().collect();
        let result = execute("module {", &pipeline, &services);

        assert!(matches!(
            result,
            ExecutionResult::Failure(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_pass_is_failure() {
        let services = StandardServices::new();
        let pipeline: PassPipeline = ["no-such-pass"].into_iter().collect();
        let result = execute(SOURCE, &pipeline, &services);

        assert_eq!(
            result.error(),
            Some(&PipelineError::Application(ApplicationError::UnknownPass(
                "no-such-pass".to_string()
            )))
        );
    }

    #[test]
    fn test_vocabulary_failure_is_failure() {
        let services = StandardServices::new().with_dialect(irlab_core::Dialect::new("test"));
        let result = execute(SOURCE, &PassPipeline::new(), &services);
        assert!(matches!(
            result,
            ExecutionResult::Failure(PipelineError::Context(_))
        ));
        assert_eq!(
            Printer::new().print(result.error().unwrap()),
            "error: context error: Dialect 'test' is already loaded\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let services = StandardServices::new();
        let pipeline: PassPipeline = ["constant-fold", "dce"].into_iter().collect();
        let first = execute(SOURCE, &pipeline, &services);
        let _ = execute("module {\n}\n", &PassPipeline::new(), &services);
        let second = execute(SOURCE, &pipeline, &services);
        assert_eq!(first, second);
    }
}
