//! Two-document workspace.
//!
//! The editor shows one or two documents. [`Workspace`] owns both [`Document`]s and their
//! [`EditorPane`]s, plus the state that spans panes:
//!
//! - the layout (one pane or two side by side)
//! - which pane is active
//! - the diff toggle: in the dual layout each pane can highlight what it has that the other
//!   document does not
//! - the shared save indicator, touched whenever either document changes
//!
//! Commands are executed **against a slot**; the workspace routes them to that slot's pane and
//! document.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::diff::DiffOverlay;
use crate::document::Document;
use crate::pane::{EditorPane, PaneCommand, PaneResult};
use crate::scroll::{ScrollMetrics, ScrollSide, ScrollUpdate};
use crate::status::{SaveIndicator, SaveState};
use std::time::Instant;

/// One of the two document slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// The first document; the only one shown in the single layout.
    #[default]
    Left,
    /// The second document.
    Right,
}

impl Slot {
    /// The opposite slot.
    pub fn other(self) -> Self {
        match self {
            Slot::Left => Slot::Right,
            Slot::Right => Slot::Left,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Right => 1,
        }
    }
}

/// How many panes are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Only the left document.
    #[default]
    Single,
    /// Both documents side by side.
    Dual,
}

/// The documents, panes and cross-pane state of one editor window.
#[derive(Debug, Clone)]
pub struct Workspace {
    documents: [Document; 2],
    panes: [EditorPane; 2],
    layout: LayoutMode,
    active: Slot,
    show_diff: bool,
    save: SaveIndicator,
}

impl Workspace {
    /// Create a workspace in the single layout with the left slot active.
    pub fn new(left: Document, right: Document) -> Self {
        let panes = [EditorPane::new(&left), EditorPane::new(&right)];
        Self {
            documents: [left, right],
            panes,
            layout: LayoutMode::default(),
            active: Slot::Left,
            show_diff: false,
            save: SaveIndicator::default(),
        }
    }

    /// Current layout.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Change the layout. Switching to [`LayoutMode::Single`] turns diff mode off.
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
        if layout == LayoutMode::Single && self.show_diff {
            tracing::debug!("single layout, turning diff mode off");
            self.show_diff = false;
        }
    }

    /// Slots visible in the current layout.
    pub fn visible_slots(&self) -> &'static [Slot] {
        match self.layout {
            LayoutMode::Single => &[Slot::Left],
            LayoutMode::Dual => &[Slot::Left, Slot::Right],
        }
    }

    /// The active slot.
    pub fn active(&self) -> Slot {
        self.active
    }

    /// Make `slot` the active one.
    pub fn activate(&mut self, slot: Slot) {
        self.active = slot;
        let index = slot.index();
        self.panes[index].attach(&self.documents[index]);
    }

    /// Whether diff highlighting is on.
    pub fn diff_enabled(&self) -> bool {
        self.show_diff
    }

    /// Turn diff highlighting on or off. Only the dual layout accepts it; returns whether the
    /// requested state is now in effect.
    pub fn set_diff(&mut self, enabled: bool) -> bool {
        if enabled && self.layout != LayoutMode::Dual {
            return false;
        }
        self.show_diff = enabled;
        true
    }

    /// Flip diff highlighting (dual layout only).
    pub fn toggle_diff(&mut self) -> bool {
        self.set_diff(!self.show_diff)
    }

    /// The document in `slot`.
    pub fn document(&self, slot: Slot) -> &Document {
        &self.documents[slot.index()]
    }

    /// The pane for `slot`.
    pub fn pane(&self, slot: Slot) -> &EditorPane {
        &self.panes[slot.index()]
    }

    /// Mutable access to the pane for `slot`, for pane state that does not touch the document.
    pub fn pane_mut(&mut self, slot: Slot) -> &mut EditorPane {
        &mut self.panes[slot.index()]
    }

    /// The pane for `slot` together with its document, for pane operations that read the
    /// document without editing it.
    pub fn pane_and_document(&mut self, slot: Slot) -> (&mut EditorPane, &Document) {
        let index = slot.index();
        (&mut self.panes[index], &self.documents[index])
    }

    /// Replace the document in `slot` wholesale (for example after opening a file).
    pub fn load_document(&mut self, slot: Slot, document: Document) {
        let index = slot.index();
        self.documents[index] = document;
        self.panes[index].attach(&self.documents[index]);
    }

    /// Run a pane command in `slot`.
    pub fn execute(&mut self, slot: Slot, command: PaneCommand, now: Instant) -> PaneResult {
        self.with_pane(slot, now, |pane, document| pane.execute(document, command, now))
    }

    /// Run a pane command in the active slot.
    pub fn execute_active(&mut self, command: PaneCommand, now: Instant) -> PaneResult {
        self.execute(self.active, command, now)
    }

    /// Apply externally produced text to the document in `slot` through its pane's history.
    pub fn apply_edit(&mut self, slot: Slot, text: impl Into<String>, now: Instant) -> bool {
        let text = text.into();
        self.with_pane(slot, now, |pane, document| pane.apply_edit(document, text))
    }

    /// Copy the document in `slot` to the clipboard.
    pub fn copy_all(
        &mut self,
        slot: Slot,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let index = slot.index();
        self.panes[index].copy_all(&self.documents[index], clipboard, now)
    }

    /// Replace the document in `slot` with the clipboard's text.
    pub fn paste_all(
        &mut self,
        slot: Slot,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<PaneResult, ClipboardError> {
        self.with_pane(slot, now, |pane, document| {
            pane.paste_all(document, clipboard, now)
        })
    }

    /// Text the pane in `slot` is compared against, when diff mode is on.
    pub fn comparison(&self, slot: Slot) -> Option<&str> {
        if self.layout == LayoutMode::Dual && self.show_diff {
            Some(self.documents[slot.other().index()].content())
        } else {
            None
        }
    }

    /// Diff overlay for the pane in `slot`.
    pub fn diff_overlay(&self, slot: Slot) -> Option<DiffOverlay> {
        let index = slot.index();
        self.panes[index].diff_overlay(&self.documents[index], self.comparison(slot))
    }

    /// Forward a scroll event to the pane in `slot`.
    pub fn on_scroll(
        &mut self,
        slot: Slot,
        side: ScrollSide,
        source: ScrollMetrics,
        target: Option<ScrollMetrics>,
        now: Instant,
    ) -> ScrollUpdate {
        self.panes[slot.index()].on_scroll(side, source, target, now)
    }

    /// Save indicator state at `now`.
    pub fn save_state(&mut self, now: Instant) -> SaveState {
        self.save.poll(now)
    }

    fn with_pane<R>(
        &mut self,
        slot: Slot,
        now: Instant,
        f: impl FnOnce(&mut EditorPane, &mut Document) -> R,
    ) -> R {
        let index = slot.index();
        let before = self.documents[index].revision();
        let out = f(&mut self.panes[index], &mut self.documents[index]);
        if self.documents[index].revision() != before {
            self.save.touch(now);
        }
        out
    }
}
