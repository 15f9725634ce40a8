//! Welcome popup timeline.
//!
//! The popup is shown after [`POPUP_SHOW_DELAY_MS`] and hidden again at
//! [`POPUP_AUTO_HIDE_DELAY_MS`]. A manual close disarms the auto-hide; the
//! caller owns the timers and must cancel the pending one when told to.
//!
//! [`POPUP_SHOW_DELAY_MS`]: crate::constants::POPUP_SHOW_DELAY_MS
//! [`POPUP_AUTO_HIDE_DELAY_MS`]: crate::constants::POPUP_AUTO_HIDE_DELAY_MS

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupPhase {
    #[default]
    Pending,
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupTimeline {
    phase: PopupPhase,
    auto_hide_armed: bool,
}

impl Default for PopupTimeline {
    fn default() -> Self {
        Self {
            phase: PopupPhase::Pending,
            auto_hide_armed: true,
        }
    }
}

impl PopupTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn auto_hide_armed(&self) -> bool {
        self.auto_hide_armed
    }

    /// Show timer fired. Returns whether the popup should become visible.
    pub fn show(&mut self) -> bool {
        if self.phase != PopupPhase::Pending {
            return false;
        }
        self.phase = PopupPhase::Visible;
        true
    }

    /// Auto-hide timer fired. Returns whether the popup should be hidden.
    pub fn auto_hide(&mut self) -> bool {
        if !self.auto_hide_armed {
            return false;
        }
        self.auto_hide_armed = false;
        self.phase = PopupPhase::Hidden;
        true
    }

    /// Close button. Returns `true` if the auto-hide timer was still pending
    /// and has to be cleared by the caller.
    pub fn close(&mut self) -> bool {
        let cancel = self.auto_hide_armed;
        self.auto_hide_armed = false;
        self.phase = PopupPhase::Hidden;
        cancel
    }
}
