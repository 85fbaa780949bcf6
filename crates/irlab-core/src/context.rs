//! Compilation context
//!
//! A [`Context`] is the vocabulary one run parses and transforms a module
//! in. It starts empty and dialects are loaded into it explicitly; nothing
//! about a context is shared between runs.

use crate::dialect::{Dialect, OpDefinition};
use crate::error::{CoreError, Result};
use crate::ir::OpName;
use std::collections::BTreeMap;

/// Per-run compilation context
#[derive(Debug, Clone, Default)]
pub struct Context {
    dialects: BTreeMap<String, Dialect>,
    allow_unregistered: bool,
}

impl Context {
    /// Create an empty context
    ///
    /// With `allow_unregistered` set, operations from unknown dialects (or
    /// unknown operations of known dialects) are accepted as opaque,
    /// side-effecting operations.
    pub fn new(allow_unregistered: bool) -> Self {
        Self {
            dialects: BTreeMap::new(),
            allow_unregistered,
        }
    }

    /// Load a dialect into this context
    pub fn load_dialect(&mut self, dialect: Dialect) -> Result<()> {
        if self.dialects.contains_key(dialect.name()) {
            return Err(CoreError::DialectAlreadyLoaded(dialect.name().to_string()));
        }

        log::debug!(
            "loaded dialect '{}' ({} operations)",
            dialect.name(),
            dialect.len()
        );
        self.dialects.insert(dialect.name().to_string(), dialect);
        Ok(())
    }

    /// Check whether a dialect is loaded
    pub fn is_loaded(&self, dialect: &str) -> bool {
        self.dialects.contains_key(dialect)
    }

    /// Get a loaded dialect
    pub fn dialect(&self, name: &str) -> Option<&Dialect> {
        self.dialects.get(name)
    }

    /// Names of the loaded dialects, sorted
    pub fn loaded_dialects(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(String::as_str)
    }

    /// Whether unregistered operations are accepted
    pub fn allows_unregistered(&self) -> bool {
        self.allow_unregistered
    }

    /// Look up the definition of an operation
    pub fn lookup(&self, name: &OpName) -> Option<&OpDefinition> {
        self.dialects.get(&name.dialect)?.get(&name.op)
    }

    /// Look up an operation, failing unless unregistered operations are allowed
    ///
    /// Returns `Ok(None)` for an unregistered operation in a permissive
    /// context.
    pub fn resolve(&self, name: &OpName) -> Result<Option<&OpDefinition>> {
        match self.lookup(name) {
            Some(definition) => Ok(Some(definition)),
            None if self.allow_unregistered => Ok(None),
            None => Err(CoreError::UnknownOperation(name.to_string())),
        }
    }

    /// Whether an operation is known to be side-effect free
    ///
    /// Unregistered operations are never considered pure.
    pub fn is_pure(&self, name: &OpName) -> bool {
        self.lookup(name).map(|d| d.pure).unwrap_or(false)
    }
}
