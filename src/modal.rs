use crate::constants::{
    ACTIVE_CLASS, BOOKING_MODAL_ID, SUMMARY_CHECK_CLASS, SUMMARY_CHECK_STYLE,
    SUMMARY_HEADER_STYLE, SUMMARY_ITEM_CLASS, SUMMARY_LIST_ID,
};
use crate::dom;
use studio_core::{BookingSummary, SummaryLine};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn is_present(document: &web::Document) -> bool {
    document.get_element_by_id(BOOKING_MODAL_ID).is_some()
}

/// Show the modal and lock page scrolling. Without a modal element nothing
/// changes, so the page never ends up locked with no way out.
#[inline]
pub fn show(document: &web::Document) -> bool {
    let Some(el) = document.get_element_by_id(BOOKING_MODAL_ID) else {
        return false;
    };
    dom::set_class(&el, ACTIVE_CLASS, true);
    dom::lock_body_scroll(document, true);
    true
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(BOOKING_MODAL_ID) {
        dom::set_class(&el, ACTIVE_CLASS, false);
    }
    dom::lock_body_scroll(document, false);
}

/// Replace the modal's summary list with `summary`. Service names go in as
/// text, never as markup.
pub fn populate(document: &web::Document, summary: &BookingSummary) {
    let Some(list) = document.get_element_by_id(SUMMARY_LIST_ID) else {
        log::warn!("[modal] #{} missing", SUMMARY_LIST_ID);
        return;
    };
    list.set_inner_html("");
    for line in summary.lines() {
        let row = match line {
            SummaryLine::Header(label) => header_row(document, &label),
            SummaryLine::Item(name) => item_row(document, &name),
        };
        match row {
            Ok(el) => {
                _ = list.append_child(&el);
            }
            Err(e) => log::error!("[modal] row creation failed: {:?}", e),
        }
    }
}

fn header_row(document: &web::Document, label: &str) -> Result<web::Element, JsValue> {
    let h = document.create_element("h4")?;
    h.set_attribute("style", SUMMARY_HEADER_STYLE)?;
    h.set_text_content(Some(label));
    Ok(h)
}

fn item_row(document: &web::Document, name: &str) -> Result<web::Element, JsValue> {
    let div = document.create_element("div")?;
    div.set_class_name(SUMMARY_ITEM_CLASS);
    let span = document.create_element("span")?;
    span.set_text_content(Some(name));
    let icon = document.create_element("i")?;
    icon.set_class_name(SUMMARY_CHECK_CLASS);
    icon.set_attribute("style", SUMMARY_CHECK_STYLE)?;
    div.append_child(&span)?;
    div.append_child(&document.create_text_node(" "))?;
    div.append_child(&icon)?;
    Ok(div)
}
