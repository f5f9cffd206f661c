//! Bounded linear undo/redo history of whole-document snapshots.
//!
//! Every committed edit stores the full resulting text. Committing after an undo discards the
//! redo tail (linear history, not a tree), and the oldest snapshots are evicted once the
//! history exceeds its capacity.

use std::collections::VecDeque;

/// Default number of snapshots retained per document.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Linear snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<String>,
    index: usize,
    capacity: usize,
}

impl HistoryStack {
    /// Create a history holding a single snapshot of `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history with an explicit capacity (at least one snapshot is always kept).
    pub fn with_capacity(initial: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY) + 1);
        entries.push_back(initial.into());
        Self {
            entries,
            index: 0,
            capacity,
        }
    }

    /// Record `text` as the newest snapshot.
    pub fn commit(&mut self, text: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push_back(text.into());
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one snapshot. Returns the text to display, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one snapshot. Returns the text to display, or `None` at the tip.
    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// Drop all history and start over from `text`.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.entries.clear();
        self.entries.push_back(text.into());
        self.index = 0;
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Whether [`HistoryStack::undo`] would move.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether [`HistoryStack::redo`] would move.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least one snapshot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position within the retained snapshots.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Maximum number of retained snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
