/// Page markup contract and UI timing.
///
/// The ids, selectors and class names below are the attributes the widget
/// reads from the page; the page owns them.
// Catalog markup
pub const CARD_SELECTOR: &str = ".service-interactive-card";
pub const PANEL_SELECTOR: &str = ".sub-services-panel";
pub const CHECKBOX_SELECTOR: &str = ".service-checkbox";
pub const CARD_CATEGORY_ATTR: &str = "data-category";
pub const PANEL_LABEL_ATTR: &str = "data-category-label";

// Booking bar and modal
pub const BOOKING_BAR_ID: &str = "booking-bar";
pub const SELECTED_COUNT_ID: &str = "selected-count";
pub const BOOK_NOW_ID: &str = "btn-book-now";
pub const BOOKING_MODAL_ID: &str = "booking-modal";
pub const SUMMARY_LIST_ID: &str = "modal-summary-list";
pub const CONFIRM_ID: &str = "btn-confirm-booking";
pub const EDIT_ID: &str = "btn-edit-booking";

// Welcome popup
pub const POPUP_ID: &str = "welcomePopup";
pub const POPUP_CLOSE_SELECTOR: &str = ".popup-close";

// State classes
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDING_CLASS: &str = "hiding";
pub const SUMMARY_ITEM_CLASS: &str = "summary-item";

// Summary styling
pub const SUMMARY_HEADER_STYLE: &str = "color:#C9A961;margin-top:1rem;margin-bottom:0.5rem";
pub const SUMMARY_CHECK_CLASS: &str = "fas fa-check";
pub const SUMMARY_CHECK_STYLE: &str = "color:#C9A961";

// Delays before scrolling an opened panel into view (ms)
pub const TOGGLE_SCROLL_DELAY_MS: i32 = 100;
pub const DEEP_LINK_SCROLL_DELAY_MS: i32 = 300;

// Browsing context for the outbound chat link
pub const HANDOFF_TARGET: &str = "_blank";

/// Selector for the catalog card of one category.
#[inline]
pub fn card_selector(category_id: &str) -> String {
    format!("{CARD_SELECTOR}[{CARD_CATEGORY_ATTR}=\"{category_id}\"]")
}
