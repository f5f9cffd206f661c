//! Editor keyboard shortcuts.
//!
//! Maps a key chord to the [`PaneCommand`] it triggers. Ctrl and Cmd are interchangeable.

use crate::pane::PaneCommand;

/// A pressed key, independent of the host toolkit's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Char(char),
    /// The Escape key.
    Escape,
}

/// Modifier keys held with a [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Shift.
    pub shift: bool,
    /// Command (macOS) / Super.
    pub meta: bool,
}

/// A key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// A key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Ctrl + `c`.
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    /// Ctrl + Shift + `c`.
    pub fn ctrl_shift(c: char) -> Self {
        Self {
            key: Key::Char(c),
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
                meta: false,
            },
        }
    }

    fn command_key(&self) -> bool {
        self.modifiers.ctrl || self.modifiers.meta
    }
}

/// The pane command bound to `chord`, if any.
///
/// | Chord | Command |
/// |---|---|
/// | Ctrl/Cmd+Z | undo |
/// | Ctrl/Cmd+Shift+Z, Ctrl/Cmd+Y | redo |
/// | Ctrl/Cmd+F | toggle search |
/// | Ctrl/Cmd+H | toggle search with replace |
/// | Ctrl/Cmd+K | toggle inline assist |
/// | Escape | close overlays |
pub fn command_for(chord: KeyChord) -> Option<PaneCommand> {
    match chord.key {
        Key::Escape => Some(PaneCommand::CloseOverlays),
        Key::Char(c) if chord.command_key() => match c.to_ascii_lowercase() {
            'z' if chord.modifiers.shift => Some(PaneCommand::Redo),
            'z' => Some(PaneCommand::Undo),
            'y' => Some(PaneCommand::Redo),
            'f' => Some(PaneCommand::ToggleSearch),
            'h' => Some(PaneCommand::ToggleReplace),
            'k' => Some(PaneCommand::ToggleInlineAssist),
            _ => None,
        },
        _ => None,
    }
}
