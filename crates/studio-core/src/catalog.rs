//! Category panels and their open/closed state.
//!
//! Panels are discovered once from the page markup and live for the page's
//! lifetime. Any number of panels may be open at the same time. Lookups by an
//! unknown category id are silent no-ops so stale links never break the page.

use crate::query::category_param;
use crate::selection::SelectionStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub category_id: String,
    pub category_label: String,
    pub is_open: bool,
    /// Whether a catalog card for this category exists on the page.
    pub has_card: bool,
}

/// Result of an open request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelChange {
    Opened,
    AlreadyOpen,
    Missing,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    panels: Vec<Panel>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel. A second registration for the same id replaces the
    /// label and card flag but keeps the open state.
    pub fn add_panel(&mut self, category_id: &str, category_label: &str, has_card: bool) {
        if let Some(p) = self.get_mut(category_id) {
            p.category_label = category_label.to_string();
            p.has_card = has_card;
            return;
        }
        self.panels.push(Panel {
            category_id: category_id.to_string(),
            category_label: category_label.to_string(),
            is_open: false,
            has_card,
        });
    }

    pub fn get(&self, category_id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.category_id == category_id)
    }

    fn get_mut(&mut self, category_id: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.category_id == category_id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn is_open(&self, category_id: &str) -> bool {
        self.get(category_id).is_some_and(|p| p.is_open)
    }

    pub fn open_ids(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| p.is_open)
            .map(|p| p.category_id.as_str())
            .collect()
    }

    /// Flip a panel. Returns the new open state, or `None` if no panel exists
    /// for `category_id`.
    pub fn toggle_panel(&mut self, category_id: &str) -> Option<bool> {
        let p = self.get_mut(category_id)?;
        p.is_open = !p.is_open;
        log::debug!("[catalog] toggle {category_id} -> open={}", p.is_open);
        Some(p.is_open)
    }

    pub fn open_panel(&mut self, category_id: &str) -> PanelChange {
        match self.get_mut(category_id) {
            None => PanelChange::Missing,
            Some(p) if p.is_open => PanelChange::AlreadyOpen,
            Some(p) => {
                p.is_open = true;
                PanelChange::Opened
            }
        }
    }

    /// Resolve `?category=<id>` from a `location.search` string and open the
    /// matching panel. A panel is only activated when its catalog card is
    /// also present; anything else is ignored.
    pub fn open_for_deep_link(&mut self, search: &str) -> Option<&Panel> {
        let id = category_param(search)?;
        let has_card = self.get(&id)?.has_card;
        if !has_card {
            log::debug!("[catalog] deep link `{id}` has no card, ignored");
            return None;
        }
        self.open_panel(&id);
        self.get(&id)
    }

    /// Open every panel that holds at least one selected service. Returns the
    /// ids that went from closed to open.
    pub fn expand_for_edit(&mut self, store: &SelectionStore) -> Vec<String> {
        store
            .category_ids()
            .into_iter()
            .filter(|id| self.open_panel(id) == PanelChange::Opened)
            .collect()
    }
}
