//! Documents edited in a pane.

use std::fmt;
use std::time::SystemTime;

/// Font sizes offered by the toolbar, in pixels.
pub const FONT_SIZES: [u16; 5] = [14, 16, 18, 20, 24];

/// Font size of a freshly created document.
pub const DEFAULT_FONT_SIZE: u16 = 16;

/// Stable identifier of a document within a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Markdown document and its display preferences.
///
/// Content changes go through [`Document::set_content`], which stamps the modification time
/// and bumps [`Document::revision`].
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    title: String,
    content: String,
    last_modified: SystemTime,
    font_size: u16,
    revision: u64,
}

impl Document {
    /// Create a document with the default font size.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            title: title.into(),
            content: content.into(),
            last_modified: SystemTime::now(),
            font_size: DEFAULT_FONT_SIZE,
            revision: 0,
        }
    }

    /// Document identifier.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Display title (usually a file name).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Full Markdown text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the document last changed.
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Display font size in pixels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Change counter, incremented on every content or font-size update.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the content. Returns `false` (and changes nothing) if the text is identical.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.content {
            return false;
        }
        self.content = content;
        self.touch();
        true
    }

    /// Change the font size. Sizes outside [`FONT_SIZES`] are rejected.
    pub fn set_font_size(&mut self, font_size: u16) -> bool {
        if !FONT_SIZES.contains(&font_size) || font_size == self.font_size {
            return false;
        }
        self.font_size = font_size;
        self.touch();
        true
    }

    /// Number of lines shown in the gutter.
    pub fn line_count(&self) -> usize {
        crate::line_index::LineIndex::from_text(&self.content).line_count()
    }

    fn touch(&mut self) {
        self.last_modified = SystemTime::now();
        self.revision += 1;
    }
}
