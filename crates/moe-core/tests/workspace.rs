use moe_core::{
    Clipboard, ClipboardError, Document, Key, KeyChord, LayoutMode, MemoryClipboard, PaneCommand,
    PaneResult, SaveState, Slot, ToastKind, Workspace, command_for,
};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn workspace() -> Workspace {
    Workspace::new(
        Document::new("doc1", "guide.md", "# Guide\n\nhello world"),
        Document::new("doc2", "draft.md", "# Guide\n\nhello brave world"),
    )
}

#[test]
fn test_dual_diff_highlights_each_side() {
    let mut ws = workspace();
    ws.set_layout(LayoutMode::Dual);
    assert!(ws.set_diff(true));

    let right = ws.diff_overlay(Slot::Right).unwrap();
    assert_eq!(right.highlighted_ranges().collect::<Vec<_>>(), vec![15..21]);
    assert_eq!(right.text(), ws.document(Slot::Right).content());

    // The left side has nothing the right side lacks.
    let left = ws.diff_overlay(Slot::Left).unwrap();
    assert_eq!(left.highlighted_ranges().count(), 0);

    // Edits on one side change the other side's overlay.
    let now = Instant::now();
    ws.execute(
        Slot::Left,
        PaneCommand::Edit("# Guide\n\nhello world!".into()),
        now,
    );
    let right = ws.diff_overlay(Slot::Right).unwrap();
    assert_eq!(right.highlighted_ranges().collect::<Vec<_>>(), vec![15..21]);
    let left = ws.diff_overlay(Slot::Left).unwrap();
    assert_eq!(left.highlighted_ranges().collect::<Vec<_>>(), vec![20..21]);
}

#[test]
fn test_single_layout_forces_diff_off() {
    let mut ws = workspace();
    ws.set_layout(LayoutMode::Dual);
    ws.set_diff(true);
    ws.set_layout(LayoutMode::Single);
    assert!(!ws.diff_enabled());

    ws.set_layout(LayoutMode::Dual);
    assert!(!ws.diff_enabled());
    assert!(ws.diff_overlay(Slot::Left).is_none());
}

#[test]
fn test_save_indicator_debounce_across_documents() {
    let mut ws = workspace();
    let t0 = Instant::now();

    ws.execute(Slot::Left, PaneCommand::Edit("a".into()), t0);
    assert_eq!(ws.save_state(t0), SaveState::Saving);

    let t1 = t0 + Duration::from_millis(600);
    ws.execute(Slot::Right, PaneCommand::Edit("b".into()), t1);
    assert_eq!(ws.save_state(t0 + Duration::from_millis(900)), SaveState::Saving);
    assert_eq!(ws.save_state(t1 + Duration::from_millis(800)), SaveState::Saved);
}

#[test]
fn test_keyboard_driven_search_session() {
    let mut ws = workspace();
    let now = Instant::now();

    let open = command_for(KeyChord::ctrl('h')).unwrap();
    ws.execute_active(open, now);
    assert!(ws.pane(Slot::Left).is_search_open());
    assert!(ws.pane(Slot::Left).is_replace_open());

    ws.execute_active(PaneCommand::SetQuery("hello".into()), now);
    ws.execute_active(PaneCommand::SetReplacement("goodbye".into()), now);
    assert_eq!(
        ws.execute_active(PaneCommand::ReplaceAll, now),
        PaneResult::Replaced(1)
    );
    assert_eq!(ws.document(Slot::Left).content(), "# Guide\n\ngoodbye world");

    let escape = command_for(KeyChord::plain(Key::Escape)).unwrap();
    ws.execute_active(escape, now);
    assert!(!ws.pane(Slot::Left).is_search_open());
}

#[test]
fn test_find_next_focus_scrolls_far_matches() {
    let text: String = (0..40).map(|i| format!("line {i}\n")).collect();
    let mut ws = Workspace::new(
        Document::new("doc1", "long.md", text),
        Document::new("doc2", "empty.md", ""),
    );
    let now = Instant::now();
    ws.execute_active(PaneCommand::SetQuery("line 30".into()), now);
    let PaneResult::Focus(focus) = ws.execute_active(PaneCommand::FindNext, now) else {
        panic!("expected a focus request");
    };
    // Line 31 (1-based) with 10 lines of context above at 24px per line.
    assert_eq!(focus.scroll_top, 21.0 * 24.0);

    ws.execute_active(PaneCommand::SetQuery("line 1\n".into()), now);
    let PaneResult::Focus(focus) = ws.execute_active(PaneCommand::FindNext, now) else {
        panic!("expected a focus request");
    };
    assert_eq!(focus.scroll_top, 0.0);
}

#[test]
fn test_clipboard_round_trip() {
    let mut ws = workspace();
    let now = Instant::now();
    let mut clipboard = MemoryClipboard::default();

    ws.copy_all(Slot::Left, &mut clipboard, now).unwrap();
    assert_eq!(clipboard.text(), "# Guide\n\nhello world");
    assert_eq!(
        ws.pane_mut(Slot::Left).toast(now).map(|t| t.kind),
        Some(ToastKind::Success)
    );

    assert_eq!(
        ws.paste_all(Slot::Right, &mut clipboard, now),
        Ok(PaneResult::Changed)
    );
    assert_eq!(ws.document(Slot::Right).content(), "# Guide\n\nhello world");
    assert_eq!(ws.save_state(now), SaveState::Saving);

    // Toasts disappear after three seconds.
    assert!(ws.pane_mut(Slot::Right).toast(now + Duration::from_secs(3)).is_none());
}

struct FailingClipboard(ClipboardError);

impl Clipboard for FailingClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Err(self.0.clone())
    }

    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(self.0.clone())
    }
}

#[test]
fn test_clipboard_failure_leaves_document() {
    let mut ws = workspace();
    let now = Instant::now();

    let mut denied = FailingClipboard(ClipboardError::PermissionDenied);
    assert_eq!(
        ws.paste_all(Slot::Left, &mut denied, now),
        Err(ClipboardError::PermissionDenied)
    );
    assert_eq!(ws.document(Slot::Left).content(), "# Guide\n\nhello world");
    assert!(!ws.pane(Slot::Left).can_undo());
    assert_eq!(ws.save_state(now), SaveState::Saved);
    assert_eq!(
        ws.pane_mut(Slot::Left).toast(now).map(|t| t.kind),
        Some(ToastKind::Error)
    );

    let mut offline = FailingClipboard(ClipboardError::Unavailable("no display".into()));
    assert_eq!(
        ws.copy_all(Slot::Right, &mut offline, now),
        Err(ClipboardError::Unavailable("no display".into()))
    );
    assert_eq!(
        ws.pane_mut(Slot::Right)
            .toast(now)
            .map(|t| (t.kind, t.message.clone())),
        Some((ToastKind::Error, "Copy failed".to_string()))
    );
    assert_eq!(ws.save_state(now), SaveState::Saved);
}

#[test]
fn test_gutter_line_numbers() {
    let ws = workspace();
    let left = ws.document(Slot::Left);
    assert_eq!(ws.pane(Slot::Left).gutter(left), 1..=3);
}
