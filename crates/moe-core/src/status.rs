//! Transient UI status: the auto-save indicator and toast messages.
//!
//! Both are driven by `Instant`s supplied by the host's event loop instead of owning timers.
//! Call [`SaveIndicator::poll`] / [`Toast::is_expired`] when the loop ticks.

use std::time::{Duration, Instant};

/// Quiet period after the last edit before the indicator flips back to "saved".
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(800);

/// How long success and error toasts stay visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// What the save indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// No edit in the last debounce window.
    #[default]
    Saved,
    /// An edit happened recently.
    Saving,
}

/// Debounced saving/saved indicator.
///
/// Every [`touch`](SaveIndicator::touch) restarts the debounce window.
#[derive(Debug, Clone)]
pub struct SaveIndicator {
    state: SaveState,
    deadline: Option<Instant>,
    debounce: Duration,
}

impl Default for SaveIndicator {
    fn default() -> Self {
        Self::new(SAVE_DEBOUNCE)
    }
}

impl SaveIndicator {
    /// Create an indicator with the given debounce window.
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: SaveState::Saved,
            deadline: None,
            debounce,
        }
    }

    /// Record an edit at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.state = SaveState::Saving;
        self.deadline = Some(now + self.debounce);
    }

    /// Advance to `now` and return the state to display.
    pub fn poll(&mut self, now: Instant) -> SaveState {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.state = SaveState::Saved;
                self.deadline = None;
            }
        }
        self.state
    }

    /// The state as of the last touch/poll.
    pub fn state(&self) -> SaveState {
        self.state
    }
}

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Work in progress; stays until replaced.
    Loading,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

/// A short status message shown at the bottom of a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message text.
    pub message: String,
    /// Visual flavor.
    pub kind: ToastKind,
    expires_at: Option<Instant>,
}

impl Toast {
    /// Create a toast shown at `now`. Loading toasts never expire on their own.
    pub fn new(message: impl Into<String>, kind: ToastKind, now: Instant) -> Self {
        let expires_at = match kind {
            ToastKind::Loading => None,
            ToastKind::Success | ToastKind::Error => Some(now + TOAST_DURATION),
        };
        Self {
            message: message.into(),
            kind,
            expires_at,
        }
    }

    /// Whether the toast should be hidden at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_indicator_debounces() {
        let t0 = Instant::now();
        let mut indicator = SaveIndicator::default();
        assert_eq!(indicator.poll(t0), SaveState::Saved);

        indicator.touch(t0);
        assert_eq!(indicator.poll(t0 + Duration::from_millis(500)), SaveState::Saving);

        // A second edit restarts the window.
        indicator.touch(t0 + Duration::from_millis(500));
        assert_eq!(indicator.poll(t0 + Duration::from_millis(900)), SaveState::Saving);
        assert_eq!(indicator.poll(t0 + Duration::from_millis(1300)), SaveState::Saved);
    }

    #[test]
    fn test_toast_expiry() {
        let t0 = Instant::now();
        let ok = Toast::new("done", ToastKind::Success, t0);
        assert!(!ok.is_expired(t0 + Duration::from_millis(2999)));
        assert!(ok.is_expired(t0 + TOAST_DURATION));

        let loading = Toast::new("thinking", ToastKind::Loading, t0);
        assert!(!loading.is_expired(t0 + Duration::from_secs(3600)));
    }
}
