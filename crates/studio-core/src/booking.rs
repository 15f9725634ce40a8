//! Booking bar and summary modal state machine.
//!
//! `BookingFlow` owns the selection store; checkbox handlers, the modal and
//! the message formatter all go through it, so there is exactly one writer.

use crate::catalog::Catalog;
use crate::selection::{SelectionStore, ServiceSelection};
use crate::summary::{format_message, handoff_url, BookingSummary, HandoffConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Idle,
    HasSelections,
    ModalOpen,
}

/// What the persistent booking bar should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarState {
    pub visible: bool,
    pub count: usize,
}

/// Confirmed booking ready to be opened in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub message: String,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct BookingFlow {
    store: SelectionStore,
    phase: BookingPhase,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    #[inline]
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Background scrolling is locked while the modal is open.
    #[inline]
    pub fn scroll_locked(&self) -> bool {
        self.phase == BookingPhase::ModalOpen
    }

    pub fn bar(&self) -> BarState {
        let count = self.store.count();
        BarState {
            visible: count > 0,
            count,
        }
    }

    fn settle(&mut self) {
        self.phase = if self.store.is_empty() {
            BookingPhase::Idle
        } else {
            BookingPhase::HasSelections
        };
    }

    /// A service checkbox changed. The store and bar are fully updated before
    /// this returns.
    pub fn on_checkbox(&mut self, selection: &ServiceSelection, checked: bool) -> BarState {
        self.store.apply(selection, checked);
        if self.phase != BookingPhase::ModalOpen {
            self.settle();
        }
        self.bar()
    }

    /// "Book now": open the modal and return the summary to render. An empty
    /// selection yields an empty summary.
    pub fn open_modal(&mut self) -> BookingSummary {
        self.phase = BookingPhase::ModalOpen;
        log::debug!("[booking] modal open, {} selected", self.store.count());
        BookingSummary::from_store(&self.store)
    }

    /// "Book now" when the page may lack the modal. Without a modal there is
    /// nothing to close it again, so the phase and scroll lock stay untouched.
    pub fn try_open_modal(&mut self, modal_present: bool) -> Option<BookingSummary> {
        if !modal_present {
            log::debug!("[booking] no modal on page, book-now ignored");
            return None;
        }
        Some(self.open_modal())
    }

    /// "Edit": close the modal and expand the panels that hold selections.
    /// Returns the ids of panels that were opened. No-op outside the modal.
    pub fn edit(&mut self, catalog: &mut Catalog) -> Vec<String> {
        if self.phase != BookingPhase::ModalOpen {
            return Vec::new();
        }
        self.settle();
        catalog.expand_for_edit(&self.store)
    }

    /// "Confirm": format the message, build the hand-off link and close the
    /// modal. `None` outside the modal.
    pub fn confirm(&mut self, config: &HandoffConfig) -> Option<Handoff> {
        if self.phase != BookingPhase::ModalOpen {
            return None;
        }
        let message = format_message(&BookingSummary::from_store(&self.store));
        let url = handoff_url(config, &message);
        self.settle();
        Some(Handoff { message, url })
    }

    /// Click outside the modal: close with no other effect. Returns whether
    /// the modal was open.
    pub fn dismiss(&mut self) -> bool {
        if self.phase != BookingPhase::ModalOpen {
            return false;
        }
        self.settle();
        true
    }
}
