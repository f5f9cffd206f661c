//! Current-match tracking.
//!
//! [`MatchNavigator`] keeps the "current match" index over a match list produced by
//! [`crate::search::find_all`] and moves forward/backward with wrap-around. Moving to a match
//! yields a [`MatchFocus`]: the selection the frontend should apply and an approximate scroll
//! offset that brings the match into view.

use crate::line_index::LineIndex;
use crate::search::SearchMatch;

/// Assumed height of one text line in pixels when scrolling a match into view.
pub const DEFAULT_LINE_HEIGHT: f64 = 24.0;

/// Lines kept visible above a focused match.
pub const DEFAULT_CONTEXT_LINES: usize = 10;

/// Text metrics used to turn a line number into a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    /// Height of one text line in pixels.
    pub line_height: f64,
    /// Number of lines left above the focused match.
    pub context_lines: usize,
}

impl Default for ViewMetrics {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// Where the frontend should put focus after navigating to a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFocus {
    /// Index of the focused match.
    pub index: usize,
    /// Selection range to apply (char offsets, half-open).
    pub selection: SearchMatch,
    /// Approximate vertical scroll offset for the text view.
    pub scroll_top: f64,
}

impl MatchFocus {
    /// Compute the focus request for `m`, the match at `index` within `text`.
    ///
    /// Scrolling is approximate: the offset is derived from the number of lines preceding the
    /// match and a fixed line height, not from measured layout.
    pub fn for_match(text: &str, index: usize, m: SearchMatch, metrics: ViewMetrics) -> Self {
        let lines_through_match = LineIndex::from_text(text).char_to_line(m.start) + 1;
        let lines_above = lines_through_match.saturating_sub(metrics.context_lines);
        Self {
            index,
            selection: m,
            scroll_top: lines_above as f64 * metrics.line_height,
        }
    }
}

/// Tracks the current match over a list of `count` matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchNavigator {
    current: Option<usize>,
    count: usize,
}

impl MatchNavigator {
    /// Create a navigator with no matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current match index, or `None` when there are no matches.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of matches the navigator is tracking.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Adopt a freshly computed match count.
    ///
    /// An empty list clears the index; a non-empty list keeps a still-valid index and
    /// otherwise resets to the first match.
    pub fn sync(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.current = None;
        } else if self.current.is_none_or(|current| current >= count) {
            self.current = Some(0);
        }
    }

    /// Advance to `(current + 1) mod count`. Returns the new index, or `None` if empty.
    pub fn next(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let next = self.current.map_or(0, |current| (current + 1) % self.count);
        self.current = Some(next);
        Some(next)
    }

    /// Move to `(current - 1 + count) mod count`. Returns the new index, or `None` if empty.
    pub fn previous(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let prev = self
            .current
            .map_or(self.count - 1, |current| (current + self.count - 1) % self.count);
        self.current = Some(prev);
        Some(prev)
    }

    /// Jump to `index` if it is in range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }
        self.current = Some(index);
        Some(index)
    }
}
