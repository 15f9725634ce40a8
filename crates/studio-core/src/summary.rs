//! Booking summary: the selection grouped by category, plus the two renderings
//! derived from it (on-screen lines and the outbound chat message).

use crate::constants::{HANDOFF_BASE_URL, HANDOFF_NUMBER, MESSAGE_CLOSING, MESSAGE_GREETING};
use crate::selection::SelectionStore;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use smallvec::SmallVec;

/// Characters `encodeURIComponent` escapes: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub label: String,
    pub services: SmallVec<[String; 4]>,
}

/// Read-only view of the selection, recomputed whenever it is needed.
///
/// Groups appear in the order their category was first selected; services
/// keep their selection order within a group. Grouping is by display label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub groups: Vec<CategoryGroup>,
}

/// One row of the on-screen summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryLine {
    Header(String),
    Item(String),
}

impl BookingSummary {
    pub fn from_store(store: &SelectionStore) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for sel in store.iter() {
            match groups.iter_mut().find(|g| g.label == sel.category) {
                Some(g) => g.services.push(sel.name),
                None => groups.push(CategoryGroup {
                    label: sel.category,
                    services: SmallVec::from_elem(sel.name, 1),
                }),
            }
        }
        Self { groups }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn service_count(&self) -> usize {
        self.groups.iter().map(|g| g.services.len()).sum()
    }

    /// Header followed by its items, per category.
    pub fn lines(&self) -> Vec<SummaryLine> {
        let mut out = Vec::with_capacity(self.groups.len() + self.service_count());
        for g in &self.groups {
            out.push(SummaryLine::Header(g.label.clone()));
            out.extend(g.services.iter().cloned().map(SummaryLine::Item));
        }
        out
    }
}

/// Plain-text chat message for a summary.
pub fn format_message(summary: &BookingSummary) -> String {
    let mut msg = String::with_capacity(256);
    msg.push_str(MESSAGE_GREETING);
    msg.push_str("\n\n");
    for g in &summary.groups {
        msg.push('*');
        msg.push_str(&g.label);
        msg.push_str("*\n");
        for svc in &g.services {
            msg.push_str("- ");
            msg.push_str(svc);
            msg.push('\n');
        }
        msg.push('\n');
    }
    msg.push_str(MESSAGE_CLOSING);
    msg
}

/// Where the confirmed booking is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandoffConfig {
    pub base_url: String,
    pub number: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            base_url: HANDOFF_BASE_URL.to_string(),
            number: HANDOFF_NUMBER.to_string(),
        }
    }
}

/// `<base>/<number>?text=<percent-encoded message>`
pub fn handoff_url(config: &HandoffConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config.base_url.trim_end_matches('/'),
        config.number,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}
