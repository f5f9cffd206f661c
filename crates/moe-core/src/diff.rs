//! Character-level diff and the insertion highlight overlay.
//!
//! [`diff_chars`] computes a minimal edit script (Myers' O(ND) algorithm) that turns a
//! comparison text into the current text, grouped into [`DiffSegment`]s. [`DiffOverlay`] turns
//! those segments into spans for a transparent layer drawn behind the editable text: removed
//! text is dropped (it does not exist in the displayed document) and inserted text is
//! highlighted.

use std::ops::Range;

/// Default upper bound on the edit distance explored by [`diff_chars`].
///
/// Past this bound the remaining middle section is reported as one removal plus one insertion.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2048;

/// One classified span of a two-way comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment {
    /// Present in both texts.
    Unchanged(String),
    /// Present only in the current text.
    Inserted(String),
    /// Present only in the comparison text.
    Removed(String),
}

impl DiffSegment {
    /// The text fragment carried by this segment.
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(text) | Self::Inserted(text) | Self::Removed(text) => text,
        }
    }

    /// Returns `true` for [`DiffSegment::Removed`].
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// Returns `true` for [`DiffSegment::Inserted`].
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Insert,
    Delete,
}

/// Diff `comparison` → `current` character by character.
pub fn diff_chars(comparison: &str, current: &str) -> Vec<DiffSegment> {
    diff_chars_bounded(comparison, current, DEFAULT_MAX_EDIT_DISTANCE)
}

/// Like [`diff_chars`], with an explicit bound on the explored edit distance.
pub fn diff_chars_bounded(
    comparison: &str,
    current: &str,
    max_edit_distance: usize,
) -> Vec<DiffSegment> {
    let a: Vec<char> = comparison.chars().collect();
    let b: Vec<char> = current.chars().collect();

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let a_mid = &a[prefix..a.len() - suffix];
    let b_mid = &b[prefix..b.len() - suffix];

    let ops = match edit_script(a_mid, b_mid, max_edit_distance) {
        Some(ops) => ops,
        None => {
            tracing::debug!(
                removed = a_mid.len(),
                inserted = b_mid.len(),
                max_edit_distance,
                "diff exceeded edit bound, reporting block replacement"
            );
            std::iter::repeat_n(Op::Delete, a_mid.len())
                .chain(std::iter::repeat_n(Op::Insert, b_mid.len()))
                .collect()
        }
    };

    let mut builder = SegmentBuilder::default();
    builder.unchanged(&a[..prefix]);

    let (mut ai, mut bi) = (0usize, 0usize);
    for op in ops {
        match op {
            Op::Equal => {
                builder.unchanged(&a_mid[ai..=ai]);
                ai += 1;
                bi += 1;
            }
            Op::Delete => {
                builder.removed.push(a_mid[ai]);
                ai += 1;
            }
            Op::Insert => {
                builder.inserted.push(b_mid[bi]);
                bi += 1;
            }
        }
    }

    builder.unchanged(&a[a.len() - suffix..]);
    builder.finish()
}

/// Groups ops into segments; within a changed run, removals are emitted before insertions.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<DiffSegment>,
    unchanged: String,
    removed: String,
    inserted: String,
}

impl SegmentBuilder {
    fn unchanged(&mut self, chars: &[char]) {
        if chars.is_empty() {
            return;
        }
        self.flush_changes();
        self.unchanged.extend(chars);
    }

    fn flush_unchanged(&mut self) {
        if !self.unchanged.is_empty() {
            self.segments
                .push(DiffSegment::Unchanged(std::mem::take(&mut self.unchanged)));
        }
    }

    fn flush_changes(&mut self) {
        if self.removed.is_empty() && self.inserted.is_empty() {
            return;
        }
        self.flush_unchanged();
        if !self.removed.is_empty() {
            self.segments
                .push(DiffSegment::Removed(std::mem::take(&mut self.removed)));
        }
        if !self.inserted.is_empty() {
            self.segments
                .push(DiffSegment::Inserted(std::mem::take(&mut self.inserted)));
        }
    }

    fn finish(mut self) -> Vec<DiffSegment> {
        self.flush_changes();
        self.flush_unchanged();
        self.segments
    }
}

/// Myers' greedy forward search, keeping one frontier per edit distance for backtracking.
///
/// Returns `None` when the edit distance exceeds `max_d`.
fn edit_script(a: &[char], b: &[char], max_d: usize) -> Option<Vec<Op>> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    if n == 0 {
        return Some(vec![Op::Insert; b.len()]);
    }
    if m == 0 {
        return Some(vec![Op::Delete; a.len()]);
    }

    let max = (n + m) as usize;
    let limit = max.min(max_d) as isize;
    let offset = max as isize + 1;
    let mut v = vec![0isize; 2 * max + 3];
    // frontiers[d][k + d] = furthest x on diagonal k after d edits.
    let mut frontiers: Vec<Vec<isize>> = Vec::new();

    let mut final_d = None;
    'search: for d in 0..=limit {
        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                frontiers.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());
                final_d = Some(d);
                break 'search;
            }
        }
        frontiers.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());
    }

    let final_d = final_d?;
    let mut ops = Vec::with_capacity((n + m) as usize);
    let (mut x, mut y) = (n, m);

    for d in (1..=final_d).rev() {
        let prev = &frontiers[(d - 1) as usize];
        let at = |k: isize| prev[(k + d - 1) as usize];
        let k = x - y;
        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops.push(Op::Equal);
            x -= 1;
            y -= 1;
        }
        if x == prev_x {
            ops.push(Op::Insert);
            y -= 1;
        } else {
            ops.push(Op::Delete);
            x -= 1;
        }
    }
    while x > 0 && y > 0 {
        ops.push(Op::Equal);
        x -= 1;
        y -= 1;
    }

    ops.reverse();
    Some(ops)
}

/// One span of the highlight overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Text of the span, taken from the displayed document.
    pub text: String,
    /// Whether the span is drawn with the insertion highlight.
    pub highlighted: bool,
    /// Character range of the span within the displayed document.
    pub range: Range<usize>,
}

/// Insertion highlights for the displayed document, relative to a comparison text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOverlay {
    spans: Vec<HighlightSpan>,
}

impl DiffOverlay {
    /// Build the overlay, or `None` when diff mode is off or there is nothing to compare to.
    pub fn build(enabled: bool, comparison: &str, current: &str) -> Option<Self> {
        if !enabled || comparison.is_empty() {
            return None;
        }
        Some(Self::from_segments(diff_chars(comparison, current)))
    }

    /// Build the overlay from precomputed segments, dropping removed ones.
    pub fn from_segments(segments: Vec<DiffSegment>) -> Self {
        let mut spans = Vec::with_capacity(segments.len());
        let mut offset = 0usize;
        for segment in segments {
            let (text, highlighted) = match segment {
                DiffSegment::Removed(_) => continue,
                DiffSegment::Inserted(text) => (text, true),
                DiffSegment::Unchanged(text) => (text, false),
            };
            let len = text.chars().count();
            spans.push(HighlightSpan {
                text,
                highlighted,
                range: offset..offset + len,
            });
            offset += len;
        }
        Self { spans }
    }

    /// Spans in document order.
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Character ranges that carry the insertion highlight.
    pub fn highlighted_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.spans
            .iter()
            .filter(|span| span.highlighted)
            .map(|span| span.range.clone())
    }

    /// Concatenated overlay text; always equal to the displayed document.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}
