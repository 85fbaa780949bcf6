//! Pass registry
//!
//! Maps pass names to factories. The registry is built once; every lookup
//! through [`PassRegistry::create`] hands out a brand new pass instance.

use crate::error::RegistryError;
use crate::optimizer::{
    Canonicalizer, CommonSubexpressionEliminator, ConstantFolder, DeadCodeEliminator,
};
use crate::pass::{ModulePass, PassFactory, PassInfo};
use crate::semantic::Verifier;
use crate::transform::ValueRenamer;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Factory building a default-constructed pass
pub fn factory_of<P>() -> PassFactory
where
    P: ModulePass + Default + 'static,
{
    Arc::new(|| Box::new(P::default()) as Box<dyn ModulePass>)
}

struct RegistryEntry {
    info: PassInfo,
    factory: PassFactory,
}

/// Registry of available passes, keyed by name
#[derive(Default)]
pub struct PassRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl PassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in pass
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let builtins: [(&str, &str, PassFactory); 6] = [
            (
                Canonicalizer::NAME,
                "Rewrite algebraic identities and drop the dead code they leave",
                factory_of::<Canonicalizer>(),
            ),
            (
                ConstantFolder::NAME,
                "Fold arithmetic on constant operands",
                factory_of::<ConstantFolder>(),
            ),
            (
                CommonSubexpressionEliminator::NAME,
                "Merge identical side-effect free operations",
                factory_of::<CommonSubexpressionEliminator>(),
            ),
            (
                DeadCodeEliminator::NAME,
                "Remove side-effect free operations with unused results",
                factory_of::<DeadCodeEliminator>(),
            ),
            (
                ValueRenamer::NAME,
                "Renumber SSA values in program order",
                factory_of::<ValueRenamer>(),
            ),
            (
                Verifier::NAME,
                "Check operations against their definitions and types",
                factory_of::<Verifier>(),
            ),
        ];

        for (name, description, factory) in builtins {
            registry.entries.insert(
                name.to_string(),
                RegistryEntry {
                    info: PassInfo::new(name, description),
                    factory,
                },
            );
        }

        registry
    }

    /// Register a pass under `info.name`
    pub fn register(&mut self, info: PassInfo, factory: PassFactory) -> Result<(), RegistryError> {
        if self.entries.contains_key(&info.name) {
            return Err(RegistryError::DuplicatePass(info.name));
        }

        tracing::debug!("registered pass '{}'", info.name);
        self.entries
            .insert(info.name.clone(), RegistryEntry { info, factory });
        Ok(())
    }

    /// Check whether a pass is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Factory for a registered pass
    pub fn factory(&self, name: &str) -> Option<PassFactory> {
        self.entries.get(name).map(|entry| Arc::clone(&entry.factory))
    }

    /// Create a fresh instance of a registered pass
    pub fn create(&self, name: &str) -> Option<Box<dyn ModulePass>> {
        self.entries.get(name).map(|entry| (entry.factory)())
    }

    /// Registered passes, sorted by name
    pub fn list(&self) -> Vec<PassInfo> {
        self.entries.values().map(|entry| entry.info.clone()).collect()
    }

    /// Registered pass names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered passes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no pass is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassRegistry")
            .field("passes", &self.names())
            .finish()
    }
}
