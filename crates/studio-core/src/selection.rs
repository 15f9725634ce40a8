//! Selection store: the authoritative set of services the visitor has ticked.
//!
//! Entries are keyed by service name, so a name can never be present twice.
//! Each entry remembers when it was added; ordered views (summary grouping,
//! edit auto-expand) sort by that sequence number instead of relying on the
//! hash map's iteration order.

use crate::constants::category_id_from_panel;
use crate::error::BindError;
use fnv::{FnvHashMap, FnvHashSet};

/// One checked service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceSelection {
    pub name: String,
    /// Display label of the category, used for grouping.
    pub category: String,
    /// Stable category key, matches the panel anchor.
    pub category_id: String,
}

impl ServiceSelection {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            category_id: category_id.into(),
        }
    }

    /// Build a selection from what a checkbox and its enclosing panel carry in
    /// the markup: the checkbox value, the panel element id and the panel's
    /// category label.
    pub fn from_markup(
        value: &str,
        panel_element_id: Option<&str>,
        category_label: Option<&str>,
    ) -> Result<Self, BindError> {
        let element_id = panel_element_id.ok_or_else(|| BindError::CheckboxOutsidePanel {
            service: value.to_string(),
        })?;
        let category_id =
            category_id_from_panel(element_id).ok_or_else(|| BindError::MalformedPanelId {
                element_id: element_id.to_string(),
            })?;
        let label = category_label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| BindError::MissingLabel {
                category_id: category_id.to_string(),
            })?;
        if value.trim().is_empty() {
            return Err(BindError::EmptyServiceName {
                category_id: category_id.to_string(),
            });
        }
        Ok(Self::new(value, label, category_id))
    }
}

#[derive(Clone, Debug)]
struct Entry {
    category: String,
    category_id: String,
    seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    entries: FnvHashMap<String, Entry>,
    next_seq: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a service. Selecting a name that is already present keeps the
    /// existing entry and returns `false`.
    pub fn select(&mut self, name: &str, category: &str, category_id: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            name.to_string(),
            Entry {
                category: category.to_string(),
                category_id: category_id.to_string(),
                seq,
            },
        );
        log::debug!("[selection] + {name} ({category_id}) count={}", self.count());
        true
    }

    /// Remove the entry for `name`. Returns `false` when nothing was selected
    /// under that name.
    pub fn deselect(&mut self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();
        if removed {
            log::debug!("[selection] - {name} count={}", self.count());
        }
        removed
    }

    /// Checkbox-change entry point: a checked box selects, an unchecked box
    /// deselects.
    pub fn apply(&mut self, selection: &ServiceSelection, checked: bool) -> bool {
        if checked {
            self.select(&selection.name, &selection.category, &selection.category_id)
        } else {
            self.deselect(&selection.name)
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Selections in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = ServiceSelection> + '_ {
        let mut ordered: Vec<(&String, &Entry)> = self.entries.iter().collect();
        ordered.sort_by_key(|(_, e)| e.seq);
        ordered.into_iter().map(|(name, e)| ServiceSelection {
            name: name.clone(),
            category: e.category.clone(),
            category_id: e.category_id.clone(),
        })
    }

    /// Distinct category ids that have at least one selection, first-seen order.
    pub fn category_ids(&self) -> Vec<String> {
        let mut seen = FnvHashSet::default();
        let mut ids: Vec<String> = Vec::new();
        for sel in self.iter() {
            if seen.insert(sel.category_id.clone()) {
                ids.push(sel.category_id);
            }
        }
        ids
    }
}
