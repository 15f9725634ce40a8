use crate::constants::{ACTIVE_CLASS, HIDING_CLASS, POPUP_CLOSE_SELECTOR, POPUP_ID};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use studio_core::{PopupTimeline, POPUP_AUTO_HIDE_DELAY_MS, POPUP_SHOW_DELAY_MS};
use web_sys as web;

fn hide_popup(popup: &web::Element) {
    dom::set_class(popup, ACTIVE_CLASS, false);
    dom::set_class(popup, HIDING_CLASS, true);
}

/// Show the welcome popup after a delay and hide it again unless the visitor
/// closes it first.
pub fn wire_welcome_popup(document: &web::Document) {
    let Some(popup) = document.get_element_by_id(POPUP_ID) else {
        return;
    };
    let timeline = Rc::new(RefCell::new(PopupTimeline::new()));

    {
        let timeline = timeline.clone();
        let popup = popup.clone();
        dom::set_timeout(POPUP_SHOW_DELAY_MS, move || {
            if timeline.borrow_mut().show() {
                dom::set_class(&popup, ACTIVE_CLASS, true);
            }
        });
    }

    let auto_hide_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    {
        let timeline = timeline.clone();
        let popup = popup.clone();
        let handle = dom::set_timeout(POPUP_AUTO_HIDE_DELAY_MS, move || {
            if timeline.borrow_mut().auto_hide() {
                hide_popup(&popup);
                log::debug!("[popup] auto-hidden");
            }
        });
        auto_hide_handle.set(handle);
    }

    let Ok(Some(close_btn)) = popup.query_selector(POPUP_CLOSE_SELECTOR) else {
        return;
    };
    dom::add_event_listener(&close_btn, "click", move |ev| {
        ev.prevent_default();
        if timeline.borrow_mut().close() {
            if let Some(h) = auto_hide_handle.take() {
                dom::clear_timeout(h);
            }
        }
        hide_popup(&popup);
    });
}
