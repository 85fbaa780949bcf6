//! Clipboard seam
//!
//! The session hands rendered text to a clipboard collaborator. Failures are
//! reported to the caller and never touch session state.

use thiserror::Error;

/// Clipboard failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// No clipboard is reachable
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination for copied text
pub trait Clipboard {
    /// Replace the clipboard contents
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text
    pub fn text(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
