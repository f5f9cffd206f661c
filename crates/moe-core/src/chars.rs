//! Char-offset helpers.
//!
//! Every public offset in this crate counts Unicode scalar values. These helpers map char
//! ranges onto the UTF-8 text they index, clamping out-of-range input to the text.

use std::ops::Range;

/// Char to byte offset table for one text snapshot.
///
/// Building the table is O(n); each lookup afterwards is O(1) (char to byte) or O(log n)
/// (byte to char).
#[derive(Debug)]
pub struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    /// Index `text`.
    pub fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    /// Number of chars in the indexed text.
    pub fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    /// Byte offset of `char_offset`, clamped to the end of the text.
    pub fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .copied()
            .unwrap_or(self.text_len)
    }

    /// Char offset of `byte_offset`. Offsets inside a multi-byte char round up.
    pub fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// `range` clamped to the text, with `start <= end`.
    pub fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.char_count());
        range.start.min(end)..end
    }

    /// Byte range of the clamped char `range`.
    pub fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        let range = self.clamp(range);
        self.char_to_byte(range.start)..self.char_to_byte(range.end)
    }
}

/// `range` clamped to `text`, with `start <= end`.
pub fn clamp_char_range(text: &str, range: Range<usize>) -> Range<usize> {
    CharIndex::new(text).clamp(range)
}

/// The text covered by the char `range` (clamped).
pub fn char_slice(text: &str, range: Range<usize>) -> &str {
    let bytes = CharIndex::new(text).byte_range(range);
    &text[bytes]
}

/// `text` with the char `range` (clamped) replaced by `insert`.
pub fn splice_chars(text: &str, range: Range<usize>, insert: &str) -> String {
    let bytes = CharIndex::new(text).byte_range(range);
    let mut out = String::with_capacity(text.len() - bytes.len() + insert.len());
    out.push_str(&text[..bytes.start]);
    out.push_str(insert);
    out.push_str(&text[bytes.end..]);
    out
}
