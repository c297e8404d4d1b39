/// Visibility state of the hero confirmation overlay.
///
/// `Opening` is the transient busy state between the confirm click and the
/// overlay closing: the confirm button is disabled there so the destination
/// cannot be opened twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Open,
    Opening,
}

impl OverlayState {
    pub fn hero_activated(self) -> Self {
        match self {
            OverlayState::Hidden => OverlayState::Open,
            other => other,
        }
    }

    /// Cancel button or a click outside the dialog.
    pub fn cancelled(self) -> Self {
        OverlayState::Hidden
    }

    pub fn confirmed(self) -> Self {
        match self {
            OverlayState::Open => OverlayState::Opening,
            other => other,
        }
    }

    /// The close delay after a confirmed open has elapsed.
    pub fn close_timer_elapsed(self) -> Self {
        OverlayState::Hidden
    }

    /// Page restored from the back/forward cache: whatever was on screen
    /// before the user navigated away is stale and must be cleared.
    pub fn page_restored(self) -> Self {
        OverlayState::Hidden
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, OverlayState::Hidden)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, OverlayState::Opening)
    }
}
