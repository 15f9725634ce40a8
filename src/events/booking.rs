use crate::catalog;
use crate::constants::{
    BOOKING_BAR_ID, BOOKING_MODAL_ID, BOOK_NOW_ID, CHECKBOX_SELECTOR, CONFIRM_ID, EDIT_ID,
    HANDOFF_TARGET, PANEL_LABEL_ATTR, PANEL_SELECTOR, SELECTED_COUNT_ID, VISIBLE_CLASS,
};
use crate::dom;
use crate::modal;
use std::cell::RefCell;
use std::rc::Rc;
use studio_core::{BarState, BindError, BookingFlow, Catalog, HandoffConfig, ServiceSelection};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct BookingWiring {
    pub flow: Rc<RefCell<BookingFlow>>,
    pub catalog: Rc<RefCell<Catalog>>,
    pub handoff: Rc<HandoffConfig>,
}

pub fn wire_booking_handlers(document: &web::Document, w: BookingWiring) {
    wire_checkboxes(document, &w);
    wire_book_now(document, &w);
    wire_edit(document, &w);
    wire_confirm(document, &w);
    wire_outside_click(document, &w);
}

fn update_booking_bar(document: &web::Document, bar: BarState) {
    if let Some(el) = document.get_element_by_id(SELECTED_COUNT_ID) {
        el.set_text_content(Some(&bar.count.to_string()));
    }
    if let Some(el) = document.get_element_by_id(BOOKING_BAR_ID) {
        dom::set_class(&el, VISIBLE_CLASS, bar.visible);
    }
}

/// Read the service a checkbox stands for from the checkbox and its panel.
fn selection_for(input: &web::HtmlInputElement) -> Result<ServiceSelection, BindError> {
    let panel = input.closest(PANEL_SELECTOR).ok().flatten();
    let panel_id = panel.as_ref().map(|p| p.id());
    let label = panel.as_ref().and_then(|p| p.get_attribute(PANEL_LABEL_ATTR));
    ServiceSelection::from_markup(&input.value(), panel_id.as_deref(), label.as_deref())
}

fn wire_checkboxes(document: &web::Document, w: &BookingWiring) {
    let mut wired = 0usize;
    for el in dom::query_all(document, CHECKBOX_SELECTOR) {
        let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
            log::warn!("[booking] {} is not an input", CHECKBOX_SELECTOR);
            continue;
        };
        let flow = w.flow.clone();
        let input_for_listener = input.clone();
        dom::add_event_listener(&input_for_listener, "change", move |_| {
            let selection = match selection_for(&input) {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("[booking] ignoring checkbox: {}", e);
                    return;
                }
            };
            let bar = flow.borrow_mut().on_checkbox(&selection, input.checked());
            if let Some(document) = dom::window_document() {
                update_booking_bar(&document, bar);
            }
        });
        wired += 1;
    }
    log::info!("[booking] {} service checkboxes", wired);
}

fn wire_book_now(document: &web::Document, w: &BookingWiring) {
    let flow = w.flow.clone();
    dom::add_click_listener(document, BOOK_NOW_ID, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let present = modal::is_present(&document);
        let Some(summary) = flow.borrow_mut().try_open_modal(present) else {
            return;
        };
        modal::populate(&document, &summary);
        modal::show(&document);
    });
}

fn wire_edit(document: &web::Document, w: &BookingWiring) {
    let flow = w.flow.clone();
    let catalog = w.catalog.clone();
    dom::add_click_listener(document, EDIT_ID, move || {
        let opened = flow.borrow_mut().edit(&mut catalog.borrow_mut());
        let Some(document) = dom::window_document() else {
            return;
        };
        modal::hide(&document);
        for id in &opened {
            catalog::apply_panel_state(&document, id, true);
        }
        log::info!("[booking] edit, expanded {:?}", opened);
    });
}

fn wire_confirm(document: &web::Document, w: &BookingWiring) {
    let flow = w.flow.clone();
    let handoff = w.handoff.clone();
    dom::add_click_listener(document, CONFIRM_ID, move || {
        let Some(booking) = flow.borrow_mut().confirm(&handoff) else {
            return;
        };
        if let Some(window) = web::window() {
            if let Err(e) = window.open_with_url_and_target(&booking.url, HANDOFF_TARGET) {
                log::error!("[booking] could not open hand-off link: {:?}", e);
            }
        }
        if let Some(document) = dom::window_document() {
            modal::hide(&document);
        }
    });
}

/// A click on the modal backdrop itself (not its content) closes it.
fn wire_outside_click(document: &web::Document, w: &BookingWiring) {
    let Some(modal_el) = document.get_element_by_id(BOOKING_MODAL_ID) else {
        log::debug!("[booking] #{} not found", BOOKING_MODAL_ID);
        return;
    };
    let flow = w.flow.clone();
    let backdrop = modal_el.clone();
    dom::add_event_listener(&modal_el, "click", move |ev| {
        let on_backdrop = ev
            .target()
            .is_some_and(|t| js_sys::Object::is(&t, &backdrop));
        if on_backdrop && flow.borrow_mut().dismiss() {
            if let Some(document) = dom::window_document() {
                modal::hide(&document);
            }
        }
    });
}
