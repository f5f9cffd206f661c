//! Line index over the document text.
//!
//! Backs the line-number gutter and the "lines before a match" lookup used when scrolling a
//! match into view. Built on a [`Rope`], so lookups stay O(log N) on long documents.

use ropey::Rope;

/// Logical line index for one text snapshot.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Number of logical lines (an empty document and a trailing newline each count a line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Zero-based line containing `char_offset` (clamped to the end of the text).
    pub fn char_to_line(&self, char_offset: usize) -> usize {
        self.rope.char_to_line(char_offset.min(self.rope.len_chars()))
    }

    /// Line numbers for the gutter, 1-based.
    pub fn gutter_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.line_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(LineIndex::from_text("").line_count(), 1);
        assert_eq!(LineIndex::from_text("a").line_count(), 1);
        assert_eq!(LineIndex::from_text("a\nb").line_count(), 2);
        assert_eq!(LineIndex::from_text("a\nb\n").line_count(), 3);
    }

    #[test]
    fn test_char_to_line() {
        let index = LineIndex::from_text("one\ntwo\nthree");
        assert_eq!(index.char_to_line(0), 0);
        assert_eq!(index.char_to_line(4), 1);
        assert_eq!(index.char_to_line(8), 2);
        assert_eq!(index.char_to_line(999), 2);
    }

    #[test]
    fn test_gutter_numbers() {
        let index = LineIndex::from_text("a\nb\nc");
        assert_eq!(index.gutter_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
