use crate::constants::{
    card_selector, ACTIVE_CLASS, CARD_CATEGORY_ATTR, CARD_SELECTOR, DEEP_LINK_SCROLL_DELAY_MS,
    PANEL_LABEL_ATTR, PANEL_SELECTOR, TOGGLE_SCROLL_DELAY_MS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use studio_core::{category_id_from_panel, panel_element_id, BindError, Catalog};
use web_sys as web;

/// Build the catalog from the panels present in the page.
pub fn scan(document: &web::Document) -> Catalog {
    let mut catalog = Catalog::new();
    for panel in dom::query_all(document, PANEL_SELECTOR) {
        match read_panel(&panel) {
            Ok((id, label)) => {
                let has_card = dom::query_one(document, &card_selector(&id)).is_some();
                catalog.add_panel(&id, &label, has_card);
            }
            Err(e) => log::warn!("[catalog] skipping panel: {}", e),
        }
    }
    log::info!("[catalog] {} panels", catalog.len());
    catalog
}

fn read_panel(panel: &web::Element) -> Result<(String, String), BindError> {
    let element_id = panel.id();
    let id = category_id_from_panel(&element_id)
        .ok_or_else(|| BindError::MalformedPanelId {
            element_id: element_id.clone(),
        })?
        .to_string();
    let label = panel
        .get_attribute(PANEL_LABEL_ATTR)
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| BindError::MissingLabel {
            category_id: id.clone(),
        })?;
    Ok((id, label))
}

/// Mirror a panel's open state onto its panel and card elements.
pub fn apply_panel_state(document: &web::Document, category_id: &str, open: bool) {
    if let Some(panel) = document.get_element_by_id(&panel_element_id(category_id)) {
        dom::set_class(&panel, ACTIVE_CLASS, open);
    }
    if let Some(card) = dom::query_one(document, &card_selector(category_id)) {
        dom::set_class(&card, ACTIVE_CLASS, open);
    }
}

fn scroll_panel_later(category_id: &str, delay_ms: i32, block: web::ScrollLogicalPosition) {
    let element_id = panel_element_id(category_id);
    dom::set_timeout(delay_ms, move || {
        let panel = dom::window_document().and_then(|d| d.get_element_by_id(&element_id));
        if let Some(panel) = panel {
            dom::scroll_into_view(&panel, block);
        }
    });
}

/// Card clicks toggle their category panel independently of the others.
pub fn wire_cards(document: &web::Document, catalog: &Rc<RefCell<Catalog>>) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let Some(id) = card.get_attribute(CARD_CATEGORY_ATTR) else {
            log::warn!("[catalog] card without {}", CARD_CATEGORY_ATTR);
            continue;
        };
        let catalog = catalog.clone();
        dom::add_event_listener(&card, "click", move |_| {
            let toggled = catalog.borrow_mut().toggle_panel(&id);
            let Some(open) = toggled else {
                log::debug!("[catalog] no panel for `{}`", id);
                return;
            };
            if let Some(document) = dom::window_document() {
                apply_panel_state(&document, &id, open);
            }
            if open {
                scroll_panel_later(
                    &id,
                    TOGGLE_SCROLL_DELAY_MS,
                    web::ScrollLogicalPosition::Nearest,
                );
            }
        });
    }
}

/// Open the panel named by `?category=` on load, if it and its card exist.
pub fn open_from_location(document: &web::Document, catalog: &Rc<RefCell<Catalog>>) {
    let search = dom::location_search();
    let opened = catalog
        .borrow_mut()
        .open_for_deep_link(&search)
        .map(|p| p.category_id.clone());
    if let Some(id) = opened {
        log::info!("[catalog] deep link opens `{}`", id);
        apply_panel_state(document, &id, true);
        scroll_panel_later(&id, DEEP_LINK_SCROLL_DELAY_MS, web::ScrollLogicalPosition::Center);
    }
}
