//! Scroll synchronization between the raw text view and the rendered preview.
//!
//! Two kinds of sync happen on every scroll event:
//!
//! - **Pinned**: the line-number gutter and the diff overlay always take the text view's exact
//!   scroll offset.
//! - **Proportional**: with sync enabled in split mode, the opposite view is moved to the same
//!   fraction of its scrollable range.
//!
//! Programmatic scrolling of the opposite view fires its own scroll event. An origin lock with a
//! short cooldown stops that echo from scrolling the first view back.

use std::time::{Duration, Instant};

/// How long the side that started a sync keeps the lock after its last scroll event.
pub const SCROLL_SYNC_COOLDOWN: Duration = Duration::from_millis(50);

/// A scrollable view taking part in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSide {
    /// The raw Markdown text view.
    Editor,
    /// The rendered preview.
    Preview,
}

/// Scroll geometry of one view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical offset.
    pub scroll_top: f64,
    /// Total content height.
    pub scroll_height: f64,
    /// Visible height.
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Create metrics from raw values.
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Largest reachable `scroll_top`.
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Fraction of the scrollable range already scrolled, or `None` if the view cannot scroll.
    pub fn ratio(&self) -> Option<f64> {
        let ratio = self.scroll_top / self.max_scroll();
        ratio.is_finite().then_some(ratio)
    }
}

/// Offsets the frontend should apply after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollUpdate {
    /// New offset for the line-number gutter.
    pub gutter_top: Option<f64>,
    /// New offset for the diff overlay.
    pub overlay_top: Option<f64>,
    /// New offset for the opposite view.
    pub mirror_top: Option<f64>,
}

/// Scroll sync state for one editor pane.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    enabled: bool,
    lock: Option<ScrollSide>,
    lock_until: Option<Instant>,
    cooldown: Duration,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSync {
    /// Proportional sync starts disabled.
    pub fn new() -> Self {
        Self::with_cooldown(SCROLL_SYNC_COOLDOWN)
    }

    /// Create a synchronizer with a custom echo cooldown.
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            enabled: false,
            lock: None,
            lock_until: None,
            cooldown,
        }
    }

    /// Whether proportional sync is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn proportional sync on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.lock = None;
            self.lock_until = None;
        }
    }

    /// The side currently holding the origin lock at `now`.
    pub fn locked_by(&self, now: Instant) -> Option<ScrollSide> {
        match (self.lock, self.lock_until) {
            (Some(side), Some(until)) if now < until => Some(side),
            _ => None,
        }
    }

    /// Handle a scroll event from `side`.
    ///
    /// `target` is the opposite view's geometry, if it is mounted; `split` says whether both
    /// views are visible side by side.
    pub fn on_scroll(
        &mut self,
        side: ScrollSide,
        source: ScrollMetrics,
        target: Option<ScrollMetrics>,
        split: bool,
        now: Instant,
    ) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();
        if side == ScrollSide::Editor {
            update.gutter_top = Some(source.scroll_top);
            update.overlay_top = Some(source.scroll_top);
        }

        let Some(target) = target else {
            return update;
        };
        if !self.enabled || !split {
            return update;
        }

        match self.locked_by(now) {
            Some(holder) if holder != side => {
                tracing::trace!(?side, ?holder, "ignoring echoed scroll event");
                return update;
            }
            _ => {}
        }

        self.lock = Some(side);
        if let Some(ratio) = source.ratio() {
            update.mirror_top = Some(ratio * target.max_scroll());
        }
        self.lock_until = Some(now + self.cooldown);

        update
    }
}
