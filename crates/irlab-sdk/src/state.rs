//! Session state: the source buffer and the pass pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw program text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Reset the buffer to empty
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Name of a registered pass
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassId(String);

impl PassId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PassId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PassId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered list of selected passes
///
/// Only grows at the end or is cleared as a whole. The same pass may appear
/// more than once; each occurrence is applied at its own position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassPipeline {
    passes: Vec<PassId>,
}

impl PassPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass to the end
    pub fn append(&mut self, id: impl Into<PassId>) {
        self.passes.push(id.into());
    }

    /// Remove every pass
    pub fn clear(&mut self) {
        self.passes.clear();
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Iterate in application order
    pub fn iter(&self) -> impl Iterator<Item = &PassId> {
        self.passes.iter()
    }

    pub fn as_slice(&self) -> &[PassId] {
        &self.passes
    }

    /// Pass names in application order
    pub fn names(&self) -> Vec<&str> {
        self.passes.iter().map(PassId::as_str).collect()
    }
}

impl<I: Into<PassId>> FromIterator<I> for PassPipeline {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            passes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_buffer() {
        let mut source = SourceBuffer::new();
        assert!(source.is_empty());

        source.set("module {}");
        assert_eq!(source.as_str(), "module {}");

        source.clear();
        assert!(source.is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut pipeline = PassPipeline::new();
        pipeline.append("cse");
        pipeline.append("dce");
        pipeline.append("cse");

        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.names(), vec!["cse", "dce", "cse"]);
        assert_eq!(pipeline.as_slice()[1], PassId::new("dce"));
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut pipeline: PassPipeline = ["a", "b", "c", "a"].into_iter().collect();
        assert_eq!(pipeline.len(), 4);

        pipeline.clear();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline, PassPipeline::new());
    }

    #[test]
    fn test_pass_id_serializes_as_string() {
        let pipeline: PassPipeline = ["dce"].into_iter().collect();
        let json = serde_json::to_string(&pipeline).unwrap();
        assert_eq!(json, r#"{"passes":["dce"]}"#);
    }
}
