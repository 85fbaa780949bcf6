//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use irlab_compiler::{ApplicationError, ModulePass};
use irlab_core::{Context, Dialect, Module, OpName, Operation};
use irlab_sdk::{ExecutionResult, Session, SessionBuilder, SessionConfig};

/// Canonical text of a small program that every built-in pass accepts
pub const PROGRAM: &str = "module {
  %a = arith.constant {value = 4} : i64
  %b = arith.constant {value = 5} : i64
  %c = arith.addi %a, %b : i64
  test.print %c
}
";

// =============================================================================
// Test Passes
// =============================================================================

/// Always fails
pub struct FailingPass;

impl ModulePass for FailingPass {
    fn name(&self) -> &str {
        "fail"
    }

    fn apply(&mut self, _ctx: &mut Context, _module: &mut Module) -> irlab_compiler::Result<()> {
        Err(ApplicationError::failed("fail", "intentional failure"))
    }
}

/// Appends `test.mark {tag = ...}` to the module
pub struct MarkPass {
    pub tag: &'static str,
}

impl ModulePass for MarkPass {
    fn name(&self) -> &str {
        self.tag
    }

    fn apply(&mut self, _ctx: &mut Context, module: &mut Module) -> irlab_compiler::Result<()> {
        module.push_operation(
            Operation::new(OpName::new("test", "mark")).with_attribute("tag", self.tag),
        );
        Ok(())
    }
}

/// Loads a dialect into the context; fails if a previous run left it there
pub struct LoadScratchPass;

impl ModulePass for LoadScratchPass {
    fn name(&self) -> &str {
        "load-scratch"
    }

    fn apply(&mut self, ctx: &mut Context, _module: &mut Module) -> irlab_compiler::Result<()> {
        ctx.load_dialect(Dialect::new("scratch"))?;
        Ok(())
    }
}

/// Fails when one instance is applied more than once
#[derive(Default)]
pub struct SingleUsePass {
    applied: usize,
}

impl ModulePass for SingleUsePass {
    fn name(&self) -> &str {
        "single-use"
    }

    fn apply(&mut self, _ctx: &mut Context, _module: &mut Module) -> irlab_compiler::Result<()> {
        self.applied += 1;
        if self.applied > 1 {
            return Err(ApplicationError::failed("single-use", "instance reused"));
        }
        Ok(())
    }
}

// =============================================================================
// Session Helper
// =============================================================================

/// Test helper building a Session with the built-in passes plus the test passes
pub struct TestSession {
    config: SessionConfig,
}

impl TestSession {
    /// Create a new test session helper
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }

    /// Use a custom configuration
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the session
    pub fn build(self) -> Session {
        SessionBuilder::new()
            .with_config(self.config)
            .add_pass("fail", "Always fails", || FailingPass)
            .add_pass("mark-a", "Appends a mark tagged a", || MarkPass { tag: "mark-a" })
            .add_pass("mark-b", "Appends a mark tagged b", || MarkPass { tag: "mark-b" })
            .add_pass("load-scratch", "Loads the scratch dialect", || LoadScratchPass)
            .add_pass("single-use", "Fails if reused", SingleUsePass::default)
            .build()
            .expect("test session should build")
    }

    /// Build a session with `source` and `passes` applied in order
    pub fn run(self, source: &str, passes: &[&str]) -> Session {
        let mut session = self.build();
        session.set_source(source);
        for pass in passes {
            session
                .select_pass(pass)
                .unwrap_or_else(|err| panic!("selecting {} failed: {}", pass, err));
        }
        session
    }
}

// =============================================================================
// Assertions
// =============================================================================

pub trait SessionAssertions {
    fn assert_module(&self);
    fn assert_failure(&self);
    fn assert_empty(&self);
    fn assert_pipeline(&self, expected: &[&str]);
}

impl SessionAssertions for Session {
    fn assert_module(&self) {
        assert!(
            matches!(self.result(), ExecutionResult::Module(_)),
            "Expected a module, got {:?}",
            self.result()
        );
    }

    fn assert_failure(&self) {
        assert!(
            self.result().is_failure(),
            "Expected a failure, got {:?}",
            self.result()
        );
    }

    fn assert_empty(&self) {
        assert!(
            self.result().is_empty(),
            "Expected an empty result, got {:?}",
            self.result()
        );
    }

    fn assert_pipeline(&self, expected: &[&str]) {
        assert_eq!(
            self.pipeline().names(),
            expected,
            "Unexpected pipeline {:?}",
            self.pipeline()
        );
    }
}
