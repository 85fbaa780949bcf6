//! Compiler services
//!
//! Everything the session needs from a compiler: a vocabulary, a pass
//! registry, a parser and a printer. The vocabulary is rebuilt on every call
//! to [`CompilerServices::load_vocabulary`]; nothing is cached between runs.

use crate::error::Result;
use irlab_compiler::{builtin_dialects, PassFactory, PassInfo, PassRegistry};
use irlab_core::{Context, CoreError, Dialect, Module, Printable, Printer};
use irlab_parser::{ModuleParser, ParseError};

/// Compiler collaborator used by the executor
pub trait CompilerServices: Send + Sync {
    /// Build a fresh compilation context
    fn load_vocabulary(&self) -> std::result::Result<Context, CoreError>;

    /// Available passes, sorted by name
    fn list_passes(&self) -> Vec<PassInfo>;

    /// Factory for a pass, if one is registered under `name`
    fn pass_factory(&self, name: &str) -> Option<PassFactory>;

    /// Parse source text in the given context
    fn parse(&self, text: &str, ctx: &Context) -> std::result::Result<Module, ParseError>;

    /// Render a module or an error as text
    fn print(&self, value: &dyn Printable) -> String;
}

/// Default services: the built-in dialects and passes
#[derive(Debug)]
pub struct StandardServices {
    dialects: Vec<Dialect>,
    registry: PassRegistry,
    allow_unregistered: bool,
}

impl StandardServices {
    /// Create services with the built-in dialects and passes
    pub fn new() -> Self {
        Self {
            dialects: builtin_dialects(),
            registry: PassRegistry::builtin(),
            allow_unregistered: true,
        }
    }

    /// Allow or reject unregistered operations in loaded contexts
    pub fn allow_unregistered(mut self, allow: bool) -> Self {
        self.allow_unregistered = allow;
        self
    }

    /// Add a dialect to every loaded context
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialects.push(dialect);
        self
    }

    /// Register an additional pass
    pub fn register_pass(&mut self, info: PassInfo, factory: PassFactory) -> Result<()> {
        self.registry.register(info, factory)?;
        Ok(())
    }

    /// The pass registry
    pub fn registry(&self) -> &PassRegistry {
        &self.registry
    }
}

impl Default for StandardServices {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerServices for StandardServices {
    fn load_vocabulary(&self) -> std::result::Result<Context, CoreError> {
        let mut ctx = Context::new(self.allow_unregistered);
        for dialect in &self.dialects {
            ctx.load_dialect(dialect.clone())?;
        }
        Ok(ctx)
    }

    fn list_passes(&self) -> Vec<PassInfo> {
        self.registry.list()
    }

    fn pass_factory(&self, name: &str) -> Option<PassFactory> {
        self.registry.factory(name)
    }

    fn parse(&self, text: &str, ctx: &Context) -> std::result::Result<Module, ParseError> {
        ModuleParser::parse(text, ctx)
    }

    fn print(&self, value: &dyn Printable) -> String {
        Printer::new().print(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irlab_compiler::{ApplicationError, ModulePass};
    use std::sync::Arc;

    struct Nop;

    impl ModulePass for Nop {
        fn name(&self) -> &str {
            "nop"
        }

        fn apply(
            &mut self,
            _ctx: &mut Context,
            _module: &mut Module,
        ) -> irlab_compiler::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_vocabulary_is_fresh_each_time() {
        let services = StandardServices::new();
        let mut first = services.load_vocabulary().unwrap();
        first.load_dialect(Dialect::new("scratch")).unwrap();

        let second = services.load_vocabulary().unwrap();
        assert!(!second.is_loaded("scratch"));
        assert!(second.is_loaded("arith"));
        assert!(second.allows_unregistered());
    }

    #[test]
    fn test_duplicate_dialect_fails_to_load() {
        let services = StandardServices::new().with_dialect(Dialect::new("arith"));
        assert_eq!(
            services.load_vocabulary().unwrap_err(),
            CoreError::DialectAlreadyLoaded("arith".to_string())
        );
    }

    #[test]
    fn test_passes_sorted() {
        let mut services = StandardServices::new();
        services
            .register_pass(
                PassInfo::new("a-nop", "Does nothing"),
                Arc::new(|| Box::new(Nop) as Box<dyn ModulePass>),
            )
            .unwrap();

        let names: Vec<_> = services
            .list_passes()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names[0], "a-nop");
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(services.pass_factory("a-nop").is_some());
        assert!(services.pass_factory("missing").is_none());
    }

    #[test]
    fn test_print_module_and_error() {
        let services = StandardServices::new();
        let ctx = services.load_vocabulary().unwrap();
        let module = services
            .parse("module {\n  test.print\n}\n", &ctx)
            .unwrap();

        assert_eq!(services.print(&module), "module {\n  test.print\n}\n");
        assert_eq!(
            services.print(&ApplicationError::failed("dce", "boom")),
            "error: pass 'dce' failed: boom\n"
        );
    }
}
