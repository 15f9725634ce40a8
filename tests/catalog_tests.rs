// Host-side tests for panel toggling and deep links.

use studio_core::{category_param, Catalog, PanelChange};

fn catalog() -> Catalog {
    let mut c = Catalog::new();
    c.add_panel("photo", "Photography", true);
    c.add_panel("video", "Video", true);
    c
}

#[test]
fn panels_toggle_independently() {
    let mut c = catalog();
    assert_eq!(c.toggle_panel("photo"), Some(true));
    assert_eq!(c.toggle_panel("video"), Some(true));
    assert_eq!(c.open_ids(), ["photo", "video"]);
    assert_eq!(c.toggle_panel("photo"), Some(false));
    assert_eq!(c.open_ids(), ["video"]);
}

#[test]
fn unknown_panel_is_noop() {
    let mut c = catalog();
    assert_eq!(c.toggle_panel("drone"), None);
    assert_eq!(c.open_panel("drone"), PanelChange::Missing);
    assert!(c.open_ids().is_empty());
}

#[test]
fn open_is_idempotent() {
    let mut c = catalog();
    assert_eq!(c.open_panel("photo"), PanelChange::Opened);
    assert_eq!(c.open_panel("photo"), PanelChange::AlreadyOpen);
    assert!(c.is_open("photo"));
    assert_eq!(c.toggle_panel("photo"), Some(false));
    assert!(!c.is_open("photo"));
}

#[test]
fn labels_by_id() {
    let c = catalog();
    assert_eq!(c.get("video").map(|p| p.category_label.as_str()), Some("Video"));
    assert!(c.get("albums").is_none());
}

#[test]
fn re_registering_keeps_open_state() {
    let mut c = catalog();
    c.open_panel("photo");
    c.add_panel("photo", "Photo & Film", true);
    assert_eq!(c.len(), 2);
    assert!(c.is_open("photo"));
    assert_eq!(c.get("photo").unwrap().category_label, "Photo & Film");
}

#[test]
fn deep_link_opens_matching_panel() {
    let mut c = catalog();
    let opened = c.open_for_deep_link("?category=video").map(|p| p.category_id.clone());
    assert_eq!(opened.as_deref(), Some("video"));
    assert!(c.is_open("video"));
    assert!(!c.is_open("photo"));
}

#[test]
fn deep_link_ignores_unknown_or_missing() {
    let mut c = catalog();
    assert!(c.open_for_deep_link("?category=weddings").is_none());
    assert!(c.open_for_deep_link("").is_none());
    assert!(c.open_for_deep_link("?category=").is_none());
    assert!(c.open_for_deep_link("?other=video").is_none());
    assert!(c.open_ids().is_empty());
}

#[test]
fn deep_link_requires_card() {
    let mut c = Catalog::new();
    c.add_panel("video", "Video", false);
    assert!(c.open_for_deep_link("?category=video").is_none());
    assert!(!c.is_open("video"));
}

#[test]
fn category_param_parsing() {
    assert_eq!(category_param("?category=video&x=1").as_deref(), Some("video"));
    assert_eq!(category_param("x=1&category=photo").as_deref(), Some("photo"));
    assert_eq!(category_param("?category=pre%20wedding").as_deref(), Some("pre wedding"));
    assert_eq!(category_param("?category=pre+wedding").as_deref(), Some("pre wedding"));
    assert_eq!(category_param("?category=a&category=b").as_deref(), Some("a"));
    assert_eq!(category_param("?category"), None);
    assert_eq!(category_param("?"), None);
}
