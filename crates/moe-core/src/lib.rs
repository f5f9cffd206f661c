#![warn(missing_docs)]
//! Moe Core - Headless Markdown Editing Core
//!
//! # Overview
//!
//! `moe-core` holds the editing state of a Markdown editor with split preview and two-document
//! comparison. It never draws anything: a host (browser, native toolkit, TUI) feeds it input
//! events and reads back text, selections, scroll offsets and overlay spans.
//!
//! # Core Features
//!
//! - **Search/Replace**: regex-backed match enumeration with literal, whole-word and
//!   case-sensitivity options, wrap-around navigation, replace-one and replace-all
//! - **Diff Highlighting**: Myers character diff between two documents, rendered as an overlay
//!   marking what the current document adds
//! - **Snapshot History**: bounded linear undo/redo of whole-document snapshots
//! - **Scroll Sync**: gutter/overlay pinning and proportional editor/preview mirroring with an
//!   echo-suppressing origin lock
//! - **Text Formatting**: paragraph indentation and blank-line cleanup
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Workspace (layout, diff toggle, save state) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  EditorPane (PaneCommand interface)          │  ← Per-pane controller
//! ├─────────────────────────────────────────────┤
//! │  Search / Replace / History / Diff / Scroll  │  ← Algorithms
//! ├─────────────────────────────────────────────┤
//! │  Line Index (Rope-based)                     │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use moe_core::{Document, LayoutMode, PaneCommand, Slot, Workspace};
//! use std::time::Instant;
//!
//! let mut workspace = Workspace::new(
//!     Document::new("doc1", "guide.md", "hello world"),
//!     Document::new("doc2", "draft.md", "hello brave world"),
//! );
//! let now = Instant::now();
//!
//! workspace.set_layout(LayoutMode::Dual);
//! workspace.set_diff(true);
//! let overlay = workspace.diff_overlay(Slot::Right).unwrap();
//! assert_eq!(overlay.highlighted_ranges().collect::<Vec<_>>(), vec![6..12]);
//!
//! workspace.execute(Slot::Left, PaneCommand::Edit("hello there".to_string()), now);
//! workspace.execute(Slot::Left, PaneCommand::Undo, now);
//! assert_eq!(workspace.document(Slot::Left).content(), "hello world");
//! ```
//!
//! # Module Description
//!
//! - [`search`] - match finding
//! - [`navigator`] - current-match tracking and focus requests
//! - [`replace`] - replace one / replace all
//! - [`diff`] - character diff and highlight overlay
//! - [`history`] - snapshot undo/redo
//! - [`scroll`] - scroll synchronization
//! - [`line_index`] - Rope based line index
//! - [`chars`] - char-offset slicing and splicing
//! - [`format`] - paragraph indentation and blank-line cleanup
//! - [`status`] - save indicator and toasts
//! - [`pane`] - per-pane command interface
//! - [`keymap`] - keyboard shortcuts
//! - [`workspace`] - two-document workspace
//!
//! All offsets are character (Unicode scalar value) offsets.

pub mod chars;
pub mod clipboard;
pub mod diff;
pub mod document;
pub mod format;
pub mod history;
pub mod keymap;
pub mod line_index;
pub mod navigator;
pub mod pane;
pub mod replace;
pub mod scroll;
pub mod search;
pub mod status;
pub mod workspace;

pub use chars::{CharIndex, char_slice, clamp_char_range, splice_chars};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use diff::{DiffOverlay, DiffSegment, HighlightSpan, diff_chars};
pub use document::{DEFAULT_FONT_SIZE, Document, DocumentId, FONT_SIZES};
pub use format::{BlankLineMode, indent_paragraphs, remove_empty_lines};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryStack};
pub use keymap::{Key, KeyChord, Modifiers, command_for};
pub use line_index::LineIndex;
pub use navigator::{MatchFocus, MatchNavigator, ViewMetrics};
pub use pane::{EditorMode, EditorPane, PaneCommand, PaneResult, SearchSession};
pub use replace::{ReplaceOutcome, replace_all, replace_one};
pub use scroll::{ScrollMetrics, ScrollSide, ScrollSync, ScrollUpdate};
pub use search::{SearchError, SearchMatch, SearchOptions, check_pattern, find_all};
pub use status::{SaveIndicator, SaveState, Toast, ToastKind};
pub use workspace::{LayoutMode, Slot, Workspace};
