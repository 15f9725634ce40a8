// Shared booking constants used by the web frontend and host tests.

// Outbound chat hand-off
pub const HANDOFF_BASE_URL: &str = "https://wa.me";
pub const HANDOFF_NUMBER: &str = "918287852599";

// Message framing
pub const MESSAGE_GREETING: &str =
    "Hello Team Jyoti Photo Studio! I am interested in booking the following premium services:";
pub const MESSAGE_CLOSING: &str = "Please confirm availability and pricing.";

// Markup conventions
pub const PANEL_ID_PREFIX: &str = "panel-"; // panel element id = prefix + category id
pub const CATEGORY_QUERY_KEY: &str = "category";

// Welcome popup timeline (ms since load)
pub const POPUP_SHOW_DELAY_MS: i32 = 3_500;
pub const POPUP_AUTO_HIDE_DELAY_MS: i32 = 7_500;

/// Element id of the panel for a category id.
#[inline]
pub fn panel_element_id(category_id: &str) -> String {
    format!("{PANEL_ID_PREFIX}{category_id}")
}

/// Category id encoded in a panel element id, if it follows the `panel-` convention.
#[inline]
pub fn category_id_from_panel(element_id: &str) -> Option<&str> {
    element_id
        .strip_prefix(PANEL_ID_PREFIX)
        .filter(|id| !id.is_empty())
}
