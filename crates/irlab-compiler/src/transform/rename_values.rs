//! Value renumbering
//!
//! Gives every result a sequential name (`%0`, `%1`, ...) in program order
//! and rewrites the uses to match.

use crate::error::{ApplicationError, Result};
use crate::pass::ModulePass;
use irlab_core::{Context, Module};
use std::collections::HashMap;

/// Renumbering pass (`rename-values`)
#[derive(Debug, Default)]
pub struct ValueRenamer;

impl ValueRenamer {
    pub const NAME: &'static str = "rename-values";

    /// Create a new renamer
    pub fn new() -> Self {
        Self
    }
}

impl ModulePass for ValueRenamer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, _ctx: &mut Context, module: &mut Module) -> Result<()> {
        let mut names: HashMap<String, String> = HashMap::new();

        for op in module.operations.iter_mut() {
            for operand in op.operands.iter_mut() {
                match names.get(operand) {
                    Some(renamed) => *operand = renamed.clone(),
                    None => {
                        return Err(ApplicationError::failed(
                            Self::NAME,
                            format!("use of undefined value '%{}'", operand),
                        ))
                    }
                }
            }

            if let Some(result) = op.result.as_mut() {
                let renamed = names.len().to_string();
                names.insert(std::mem::replace(&mut result.name, renamed.clone()), renamed);
            }
        }

        tracing::debug!("rename-values: renumbered {} values", names.len());
        Ok(())
    }
}
