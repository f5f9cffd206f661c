//! Clipboard collaborator used by the copy-all / paste-all toolbar actions.

use thiserror::Error;

/// Errors reported by a [`Clipboard`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The host refused access (for example a missing permission).
    #[error("clipboard access denied")]
    PermissionDenied,

    /// The clipboard could not be reached.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Whole-text clipboard access provided by the host.
pub trait Clipboard {
    /// Read the clipboard's text content.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard's content with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Process-local clipboard, useful for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: String,
}

impl MemoryClipboard {
    /// Create a clipboard holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.text.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = text.to_string();
        Ok(())
    }
}
