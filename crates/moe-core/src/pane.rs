//! Editor pane controller.
//!
//! [`EditorPane`] owns everything one document view needs besides the document itself: the
//! display mode, the search session, the undo history, scroll sync, overlay visibility and the
//! current toast. The host turns user input into [`PaneCommand`]s and feeds them to
//! [`EditorPane::execute`] together with the [`Document`] the pane is showing.
//!
//! # Example
//!
//! ```rust
//! use moe_core::{Document, EditorPane, PaneCommand, PaneResult};
//! use std::time::Instant;
//!
//! let mut doc = Document::new("doc1", "notes.md", "The cat sat");
//! let mut pane = EditorPane::new(&doc);
//! let now = Instant::now();
//!
//! pane.execute(&mut doc, PaneCommand::SetQuery("cat".to_string()), now);
//! pane.execute(&mut doc, PaneCommand::SetReplacement("dog".to_string()), now);
//! assert_eq!(pane.execute(&mut doc, PaneCommand::ReplaceAll, now), PaneResult::Replaced(1));
//! assert_eq!(doc.content(), "The dog sat");
//!
//! pane.execute(&mut doc, PaneCommand::Undo, now);
//! assert_eq!(doc.content(), "The cat sat");
//! ```

use crate::chars::clamp_char_range;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::diff::DiffOverlay;
use crate::document::{Document, DocumentId};
use crate::format::{BlankLineMode, indent_paragraphs, remove_empty_lines};
use crate::history::HistoryStack;
use crate::line_index::LineIndex;
use crate::navigator::{MatchFocus, MatchNavigator, ViewMetrics};
use crate::replace::{replace_all, replace_one};
use crate::scroll::{ScrollMetrics, ScrollSide, ScrollSync, ScrollUpdate};
use crate::search::{SearchError, SearchMatch, SearchOptions, check_pattern, find_all};
use crate::status::{Toast, ToastKind};
use std::ops::{Range, RangeInclusive};
use std::time::Instant;

/// Which views a pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Raw text only.
    Edit,
    /// Rendered preview only.
    Preview,
    /// Raw text and preview side by side.
    #[default]
    Split,
}

impl EditorMode {
    /// Whether the raw text view is visible.
    pub fn shows_editor(self) -> bool {
        !matches!(self, EditorMode::Preview)
    }

    /// Whether the rendered preview is visible.
    pub fn shows_preview(self) -> bool {
        !matches!(self, EditorMode::Edit)
    }
}

/// Search/replace state of a pane.
///
/// Matches are recomputed from scratch whenever the text, the query or the options change.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    replacement: String,
    options: SearchOptions,
    matches: Vec<SearchMatch>,
    navigator: MatchNavigator,
}

impl SearchSession {
    /// Current search pattern.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Current search flags.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Matches in the current text.
    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    /// Index of the current match.
    pub fn current(&self) -> Option<usize> {
        self.navigator.current()
    }

    /// The current match itself.
    pub fn current_match(&self) -> Option<SearchMatch> {
        self.matches.get(self.navigator.current()?).copied()
    }

    /// One-based position of the current match and the match count, for a "3/7" counter.
    pub fn counter(&self) -> (usize, usize) {
        let position = self.navigator.current().map_or(0, |index| index + 1);
        (position, self.matches.len())
    }

    /// Why the pattern produces no matches, if it does not compile.
    pub fn pattern_error(&self) -> Option<SearchError> {
        check_pattern(&self.query, self.options).err()
    }

    fn refresh(&mut self, text: &str) {
        self.matches = find_all(text, &self.query, self.options);
        self.navigator.sync(self.matches.len());
    }
}

/// Commands accepted by [`EditorPane::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaneCommand {
    /// Replace the document text with the edited text.
    Edit(String),
    /// Step back in history.
    Undo,
    /// Step forward in history.
    Redo,
    /// Record the text view's selection (char offsets).
    Select(Range<usize>),
    /// Set the search pattern.
    SetQuery(String),
    /// Set the replacement text.
    SetReplacement(String),
    /// Set the search flags.
    SetSearchOptions(SearchOptions),
    /// Focus the next match (wraps around).
    FindNext,
    /// Focus the previous match (wraps around).
    FindPrevious,
    /// Focus the match at the given index.
    SelectMatch(usize),
    /// Replace the current match.
    ReplaceCurrent,
    /// Replace every match.
    ReplaceAll,
    /// Indent prose paragraphs.
    FormatParagraphs,
    /// Collapse blank lines.
    RemoveEmptyLines(BlankLineMode),
    /// Change the document's font size.
    SetFontSize(u16),
    /// Change the display mode.
    SetMode(EditorMode),
    /// Turn proportional scroll sync on or off.
    SetSyncScroll(bool),
    /// Open the search bar, or close it if it is open.
    ToggleSearch,
    /// Open search with the replace row, or close search if both are already open.
    ToggleReplace,
    /// Open the inline assist prompt, or close it if it is open.
    ToggleInlineAssist,
    /// Close the search bar and the inline assist prompt.
    CloseOverlays,
}

/// Outcome of a pane command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneResult {
    /// Pane state changed, the document did not.
    Success,
    /// Nothing to do.
    Unchanged,
    /// The document changed.
    Changed,
    /// `n` occurrences were replaced.
    Replaced(usize),
    /// A match was focused; the frontend should apply the selection and scroll offset.
    Focus(MatchFocus),
    /// The frontend should restore this selection in the text view.
    Selection(Range<usize>),
}

/// Per-pane editing controller.
#[derive(Debug, Clone)]
pub struct EditorPane {
    document_id: DocumentId,
    seen_revision: u64,
    mode: EditorMode,
    history: HistoryStack,
    search: SearchSession,
    scroll: ScrollSync,
    view_metrics: ViewMetrics,
    selection: Range<usize>,
    captured_selection: Option<Range<usize>>,
    show_search: bool,
    show_replace: bool,
    show_inline_assist: bool,
    toast: Option<Toast>,
}

impl EditorPane {
    /// Create a pane showing `document`.
    pub fn new(document: &Document) -> Self {
        Self {
            document_id: document.id().clone(),
            seen_revision: document.revision(),
            mode: EditorMode::default(),
            history: HistoryStack::new(document.content()),
            search: SearchSession::default(),
            scroll: ScrollSync::new(),
            view_metrics: ViewMetrics::default(),
            selection: 0..0,
            captured_selection: None,
            show_search: false,
            show_replace: false,
            show_inline_assist: false,
            toast: None,
        }
    }

    /// Execute a command against `document`.
    ///
    /// If `document` is not the one the pane last saw, the pane re-attaches to it first (see
    /// [`EditorPane::attach`]).
    pub fn execute(
        &mut self,
        document: &mut Document,
        command: PaneCommand,
        now: Instant,
    ) -> PaneResult {
        self.attach(document);

        let result = match command {
            PaneCommand::Edit(text) => self.commit_result(document, text),
            PaneCommand::Undo => match self.history.undo() {
                Some(text) => {
                    let text = text.to_string();
                    self.restore(document, text)
                }
                None => PaneResult::Unchanged,
            },
            PaneCommand::Redo => match self.history.redo() {
                Some(text) => {
                    let text = text.to_string();
                    self.restore(document, text)
                }
                None => PaneResult::Unchanged,
            },
            PaneCommand::Select(range) => {
                self.selection = clamp_char_range(document.content(), range);
                PaneResult::Success
            }
            PaneCommand::SetQuery(query) => {
                self.search.query = query;
                self.search.refresh(document.content());
                PaneResult::Success
            }
            PaneCommand::SetReplacement(replacement) => {
                self.search.replacement = replacement;
                PaneResult::Success
            }
            PaneCommand::SetSearchOptions(options) => {
                self.search.options = options;
                self.search.refresh(document.content());
                PaneResult::Success
            }
            PaneCommand::FindNext => {
                let index = self.search.navigator.next();
                self.focus(document, index)
            }
            PaneCommand::FindPrevious => {
                let index = self.search.navigator.previous();
                self.focus(document, index)
            }
            PaneCommand::SelectMatch(index) => {
                let index = self.search.navigator.select(index);
                self.focus(document, index)
            }
            PaneCommand::ReplaceCurrent => {
                match replace_one(
                    document.content(),
                    &self.search.matches,
                    self.search.current(),
                    &self.search.replacement,
                ) {
                    Some(text) => self.commit_result(document, text),
                    None => PaneResult::Unchanged,
                }
            }
            PaneCommand::ReplaceAll => {
                match replace_all(
                    document.content(),
                    &self.search.query,
                    &self.search.replacement,
                    self.search.options,
                ) {
                    Some(outcome) => {
                        if self.commit(document, outcome.text) {
                            PaneResult::Replaced(outcome.replaced)
                        } else {
                            PaneResult::Unchanged
                        }
                    }
                    None => PaneResult::Unchanged,
                }
            }
            PaneCommand::FormatParagraphs => {
                let formatted = indent_paragraphs(document.content());
                self.commit_result(document, formatted)
            }
            PaneCommand::RemoveEmptyLines(mode) => {
                let cleaned = remove_empty_lines(document.content(), mode);
                if self.commit(document, cleaned) {
                    let message = match mode {
                        BlankLineMode::Smart => "Paragraph spacing normalized",
                        BlankLineMode::Aggressive => "Blank lines removed",
                    };
                    self.show_toast(message, ToastKind::Success, now);
                    PaneResult::Changed
                } else {
                    self.show_toast("Document is already tidy", ToastKind::Success, now);
                    PaneResult::Unchanged
                }
            }
            PaneCommand::SetFontSize(size) => {
                if document.set_font_size(size) {
                    PaneResult::Changed
                } else {
                    PaneResult::Unchanged
                }
            }
            PaneCommand::SetMode(mode) => {
                self.mode = mode;
                PaneResult::Success
            }
            PaneCommand::SetSyncScroll(enabled) => {
                self.scroll.set_enabled(enabled);
                PaneResult::Success
            }
            PaneCommand::ToggleSearch => {
                if self.show_search {
                    self.show_search = false;
                } else {
                    self.show_search = true;
                    self.show_inline_assist = false;
                }
                PaneResult::Success
            }
            PaneCommand::ToggleReplace => {
                if self.show_search && self.show_replace {
                    self.show_search = false;
                } else {
                    self.show_search = true;
                    self.show_replace = true;
                    self.show_inline_assist = false;
                }
                PaneResult::Success
            }
            PaneCommand::ToggleInlineAssist => {
                if self.show_inline_assist {
                    self.close_inline_assist()
                } else {
                    self.captured_selection = Some(self.selection.clone());
                    self.show_inline_assist = true;
                    self.show_search = false;
                    PaneResult::Success
                }
            }
            PaneCommand::CloseOverlays => {
                let mut result = PaneResult::Unchanged;
                if self.show_search {
                    self.show_search = false;
                    result = PaneResult::Success;
                }
                if self.show_inline_assist {
                    result = self.close_inline_assist();
                }
                result
            }
        };

        self.seen_revision = document.revision();
        result
    }

    /// Follow `document` if it is not the one the pane last saw.
    ///
    /// Switching to a different document resets history to a single snapshot of its text,
    /// unless the history tip already equals that text. A content change made outside the
    /// pane only refreshes the search matches.
    pub fn attach(&mut self, document: &Document) {
        if document.id() != &self.document_id {
            self.document_id = document.id().clone();
            if self.history.current() != document.content() {
                tracing::debug!(document = %document.id(), "pane switched document, resetting history");
                self.history.reset(document.content());
            }
            self.selection = 0..0;
            self.captured_selection = None;
            self.search.refresh(document.content());
        } else if document.revision() != self.seen_revision {
            self.search.refresh(document.content());
        }
        self.seen_revision = document.revision();
    }

    /// Apply text produced outside the command set (for example an assist result) through the
    /// normal edit pipeline. Returns whether the document changed.
    pub fn apply_edit(&mut self, document: &mut Document, text: impl Into<String>) -> bool {
        self.attach(document);
        let changed = self.commit(document, text.into());
        self.seen_revision = document.revision();
        changed
    }

    /// Copy the whole document to `clipboard`.
    pub fn copy_all(
        &mut self,
        document: &Document,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(document.content()) {
            Ok(()) => {
                self.show_toast("Copied the whole document", ToastKind::Success, now);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "copy to clipboard failed");
                self.show_toast("Copy failed", ToastKind::Error, now);
                Err(err)
            }
        }
    }

    /// Replace the whole document with the clipboard's text. Empty clipboard text is ignored.
    pub fn paste_all(
        &mut self,
        document: &mut Document,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<PaneResult, ClipboardError> {
        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "paste from clipboard failed");
                self.show_toast(
                    "Paste failed, check clipboard permissions",
                    ToastKind::Error,
                    now,
                );
                return Err(err);
            }
        };
        if text.is_empty() {
            return Ok(PaneResult::Unchanged);
        }

        let changed = self.apply_edit(document, text);
        self.show_toast("Pasted over the whole document", ToastKind::Success, now);
        Ok(if changed {
            PaneResult::Changed
        } else {
            PaneResult::Unchanged
        })
    }

    /// Handle a scroll event from one of the pane's views.
    pub fn on_scroll(
        &mut self,
        side: ScrollSide,
        source: ScrollMetrics,
        target: Option<ScrollMetrics>,
        now: Instant,
    ) -> ScrollUpdate {
        self.scroll
            .on_scroll(side, source, target, self.mode == EditorMode::Split, now)
    }

    /// Diff overlay against `comparison`, or `None` when diff mode is off (`comparison` is
    /// `None`) or the comparison text is empty.
    pub fn diff_overlay(
        &self,
        document: &Document,
        comparison: Option<&str>,
    ) -> Option<DiffOverlay> {
        comparison.and_then(|comparison| DiffOverlay::build(true, comparison, document.content()))
    }

    /// Line numbers for the gutter.
    pub fn gutter(&self, document: &Document) -> RangeInclusive<usize> {
        LineIndex::from_text(document.content()).gutter_numbers()
    }

    /// The selection an assist action should work on: the one captured when the inline
    /// prompt opened, or the live selection otherwise. Closes the inline prompt.
    pub fn take_assist_selection(&mut self) -> Range<usize> {
        let captured = self.captured_selection.take();
        let selection = match captured {
            Some(range) if self.show_inline_assist => range,
            _ => self.selection.clone(),
        };
        self.show_inline_assist = false;
        selection
    }

    /// Show a toast, replacing any current one.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toast = Some(Toast::new(message, kind, now));
    }

    /// The toast to display at `now`; expired toasts are dropped.
    pub fn toast(&mut self, now: Instant) -> Option<&Toast> {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
        self.toast.as_ref()
    }

    /// Hide the current toast.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Display mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Search state.
    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    /// Undo history.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether proportional scroll sync is on.
    pub fn sync_scroll(&self) -> bool {
        self.scroll.is_enabled()
    }

    /// Last selection reported by the text view.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Whether the search bar is open.
    pub fn is_search_open(&self) -> bool {
        self.show_search
    }

    /// Whether the replace row is shown when the search bar is open.
    pub fn is_replace_open(&self) -> bool {
        self.show_replace
    }

    /// Whether the inline assist prompt is open.
    pub fn is_inline_assist_open(&self) -> bool {
        self.show_inline_assist
    }

    /// Text metrics used to scroll matches into view.
    pub fn set_view_metrics(&mut self, metrics: ViewMetrics) {
        self.view_metrics = metrics;
    }

    fn commit(&mut self, document: &mut Document, text: String) -> bool {
        if !document.set_content(text) {
            return false;
        }
        self.history.commit(document.content());
        self.search.refresh(document.content());
        true
    }

    fn commit_result(&mut self, document: &mut Document, text: String) -> PaneResult {
        if self.commit(document, text) {
            PaneResult::Changed
        } else {
            PaneResult::Unchanged
        }
    }

    fn restore(&mut self, document: &mut Document, text: String) -> PaneResult {
        document.set_content(text);
        self.search.refresh(document.content());
        PaneResult::Changed
    }

    fn focus(&mut self, document: &Document, index: Option<usize>) -> PaneResult {
        let Some(index) = index else {
            return PaneResult::Unchanged;
        };
        let Some(m) = self.search.matches.get(index).copied() else {
            return PaneResult::Unchanged;
        };
        self.selection = m.start..m.end;
        PaneResult::Focus(MatchFocus::for_match(
            document.content(),
            index,
            m,
            self.view_metrics,
        ))
    }

    fn close_inline_assist(&mut self) -> PaneResult {
        self.show_inline_assist = false;
        match self.captured_selection.take() {
            Some(range) => {
                self.selection = range.clone();
                PaneResult::Selection(range)
            }
            None => PaneResult::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use pretty_assertions::assert_eq;

    fn setup(text: &str) -> (Document, EditorPane) {
        let doc = Document::new("doc1", "notes.md", text);
        let pane = EditorPane::new(&doc);
        (doc, pane)
    }

    #[test]
    fn test_edit_commits_history() {
        let (mut doc, mut pane) = setup("a");
        let now = Instant::now();
        assert_eq!(
            pane.execute(&mut doc, PaneCommand::Edit("ab".into()), now),
            PaneResult::Changed
        );
        assert_eq!(
            pane.execute(&mut doc, PaneCommand::Edit("ab".into()), now),
            PaneResult::Unchanged
        );
        assert_eq!(pane.history().len(), 2);

        pane.execute(&mut doc, PaneCommand::Undo, now);
        assert_eq!(doc.content(), "a");
        assert_eq!(pane.execute(&mut doc, PaneCommand::Undo, now), PaneResult::Unchanged);
        pane.execute(&mut doc, PaneCommand::Redo, now);
        assert_eq!(doc.content(), "ab");
    }

    #[test]
    fn test_find_next_wraps_and_focuses() {
        let (mut doc, mut pane) = setup("x\ny\nx");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::SetQuery("x".into()), now);
        assert_eq!(pane.search().counter(), (1, 2));

        let PaneResult::Focus(focus) = pane.execute(&mut doc, PaneCommand::FindNext, now) else {
            panic!("expected focus");
        };
        assert_eq!(focus.index, 1);
        assert_eq!(focus.selection, SearchMatch::new(4, 5));
        assert_eq!(pane.selection(), 4..5);

        let PaneResult::Focus(focus) = pane.execute(&mut doc, PaneCommand::FindNext, now) else {
            panic!("expected focus");
        };
        assert_eq!(focus.index, 0);
    }

    #[test]
    fn test_replace_current_splices_literally() {
        let (mut doc, mut pane) = setup("one two one");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::SetQuery("one".into()), now);
        pane.execute(&mut doc, PaneCommand::SetReplacement("$0".into()), now);
        pane.execute(&mut doc, PaneCommand::ReplaceCurrent, now);
        assert_eq!(doc.content(), "$0 two one");
        assert_eq!(pane.search().matches().len(), 1);
    }

    #[test]
    fn test_external_change_refreshes_matches() {
        let (mut doc, mut pane) = setup("cat");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::SetQuery("cat".into()), now);
        assert_eq!(pane.search().matches().len(), 1);

        doc.set_content("cat cat");
        pane.attach(&doc);
        assert_eq!(pane.search().matches().len(), 2);
    }

    #[test]
    fn test_remove_empty_lines_tidy_toast() {
        let (mut doc, mut pane) = setup("a\n\nb");
        let now = Instant::now();
        let result = pane.execute(
            &mut doc,
            PaneCommand::RemoveEmptyLines(BlankLineMode::Smart),
            now,
        );
        assert_eq!(result, PaneResult::Unchanged);
        assert_eq!(
            pane.toast(now).map(|t| t.message.as_str()),
            Some("Document is already tidy")
        );
        assert!(!pane.can_undo());
    }

    #[test]
    fn test_font_size_skips_history() {
        let (mut doc, mut pane) = setup("a");
        let now = Instant::now();
        assert_eq!(
            pane.execute(&mut doc, PaneCommand::SetFontSize(20), now),
            PaneResult::Changed
        );
        assert_eq!(doc.font_size(), 20);
        assert!(!pane.can_undo());
    }

    #[test]
    fn test_overlay_toggles_are_exclusive() {
        let (mut doc, mut pane) = setup("hello");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::Select(1..3), now);
        pane.execute(&mut doc, PaneCommand::ToggleInlineAssist, now);
        assert!(pane.is_inline_assist_open());

        pane.execute(&mut doc, PaneCommand::ToggleSearch, now);
        assert!(pane.is_search_open());
        assert!(!pane.is_inline_assist_open());

        pane.execute(&mut doc, PaneCommand::ToggleReplace, now);
        assert!(pane.is_search_open() && pane.is_replace_open());
        pane.execute(&mut doc, PaneCommand::ToggleReplace, now);
        assert!(!pane.is_search_open());

        // Closing the prompt restores the selection captured when it opened.
        pane.execute(&mut doc, PaneCommand::ToggleInlineAssist, now);
        pane.execute(&mut doc, PaneCommand::Select(0..5), now);
        assert_eq!(
            pane.execute(&mut doc, PaneCommand::CloseOverlays, now),
            PaneResult::Selection(1..3)
        );
        assert_eq!(pane.selection(), 1..3);
        assert_eq!(
            pane.execute(&mut doc, PaneCommand::CloseOverlays, now),
            PaneResult::Unchanged
        );
    }

    #[test]
    fn test_take_assist_selection_prefers_captured() {
        let (mut doc, mut pane) = setup("hello world");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::Select(0..5), now);
        pane.execute(&mut doc, PaneCommand::ToggleInlineAssist, now);
        pane.execute(&mut doc, PaneCommand::Select(6..6), now);
        assert_eq!(pane.take_assist_selection(), 0..5);
        assert!(!pane.is_inline_assist_open());
        assert_eq!(pane.take_assist_selection(), 6..6);
    }

    #[test]
    fn test_selection_is_clamped() {
        let (mut doc, mut pane) = setup("héllo");
        pane.execute(&mut doc, PaneCommand::Select(3..99), Instant::now());
        assert_eq!(pane.selection(), 3..5);
    }

    #[test]
    fn test_paste_all() {
        let (mut doc, mut pane) = setup("old");
        let now = Instant::now();

        let mut empty = MemoryClipboard::default();
        assert_eq!(
            pane.paste_all(&mut doc, &mut empty, now),
            Ok(PaneResult::Unchanged)
        );
        assert!(pane.toast(now).is_none());

        let mut clipboard = MemoryClipboard::new("new");
        assert_eq!(
            pane.paste_all(&mut doc, &mut clipboard, now),
            Ok(PaneResult::Changed)
        );
        assert_eq!(doc.content(), "new");
        assert!(pane.can_undo());
    }

    #[test]
    fn test_copy_all() {
        let (doc, mut pane) = setup("body");
        let mut clipboard = MemoryClipboard::default();
        pane.copy_all(&doc, &mut clipboard, Instant::now()).unwrap();
        assert_eq!(clipboard.text(), "body");
    }

    #[test]
    fn test_sync_requires_split_mode() {
        let (mut doc, mut pane) = setup("a");
        let now = Instant::now();
        pane.execute(&mut doc, PaneCommand::SetSyncScroll(true), now);
        pane.execute(&mut doc, PaneCommand::SetMode(EditorMode::Edit), now);

        let source = ScrollMetrics::new(50.0, 200.0, 100.0);
        let target = Some(ScrollMetrics::new(0.0, 300.0, 100.0));
        let update = pane.on_scroll(ScrollSide::Editor, source, target, now);
        assert_eq!(update.gutter_top, Some(50.0));
        assert_eq!(update.mirror_top, None);

        pane.execute(&mut doc, PaneCommand::SetMode(EditorMode::Split), now);
        let update = pane.on_scroll(ScrollSide::Editor, source, target, now);
        assert_eq!(update.mirror_top, Some(100.0));
    }
}
