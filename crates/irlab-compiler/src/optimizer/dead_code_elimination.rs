//! Dead code elimination optimizer
//!
//! Removes side-effect free operations whose results are never used.

use crate::error::Result;
use crate::pass::ModulePass;
use irlab_core::{Context, Module};
use std::collections::HashSet;

/// Dead code eliminator (`dce`)
#[derive(Debug, Default)]
pub struct DeadCodeEliminator;

impl DeadCodeEliminator {
    pub const NAME: &'static str = "dce";

    /// Create a new dead code eliminator
    pub fn new() -> Self {
        Self
    }

    /// Remove dead operations; returns the number removed
    ///
    /// Uses always follow definitions, so a single backward walk reaches the
    /// fixpoint: an operation removed here can only have been keeping alive
    /// operations that are visited after it.
    pub fn eliminate(&self, ctx: &Context, module: &mut Module) -> usize {
        let mut live: HashSet<String> = HashSet::new();
        let mut keep = vec![false; module.len()];

        for (index, op) in module.operations.iter().enumerate().rev() {
            let used = op.result_name().map_or(false, |name| live.contains(name));
            if used || !ctx.is_pure(&op.name) {
                keep[index] = true;
                live.extend(op.operands.iter().cloned());
            }
        }

        let before = module.len();
        let mut flags = keep.into_iter();
        module
            .operations
            .retain(|_| flags.next().unwrap_or(true));
        before - module.len()
    }
}

impl ModulePass for DeadCodeEliminator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()> {
        let removed = self.eliminate(ctx, module);
        tracing::debug!("dce: removed {} operations", removed);
        Ok(())
    }
}
