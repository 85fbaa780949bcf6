//! Pass interface
//!
//! A pass transforms a module in place. Instances are created by a
//! [`PassFactory`] for every run, so any state a pass keeps lives for one
//! application only.

use crate::error::Result;
use irlab_core::{Context, Module};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A module-level transformation or analysis
pub trait ModulePass {
    /// Registered name of the pass
    fn name(&self) -> &str;

    /// Apply the pass to `module`
    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()>;
}

/// Builds a fresh pass instance
pub type PassFactory = Arc<dyn Fn() -> Box<dyn ModulePass> + Send + Sync>;

/// Name and description of a registered pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassInfo {
    pub name: String,
    pub description: String,
}

impl PassInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
