// Host-side tests for summary grouping and the outbound message.

use studio_core::{
    format_message, handoff_url, BookingSummary, HandoffConfig, SelectionStore, SummaryLine,
    MESSAGE_CLOSING, MESSAGE_GREETING,
};

fn scenario_store() -> SelectionStore {
    let mut store = SelectionStore::new();
    store.select("Wedding Shoot", "Photography", "photo");
    store.select("Drone Coverage", "Photography", "photo");
    store.select("Live Streaming", "Video", "video");
    store
}

#[test]
fn groups_by_label_in_first_seen_order() {
    let mut store = SelectionStore::new();
    store.select("Live Streaming", "Video", "video");
    store.select("Wedding Shoot", "Photography", "photo");
    store.select("Highlights Reel", "Video", "video");

    let summary = BookingSummary::from_store(&store);
    let labels: Vec<&str> = summary.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["Video", "Photography"]);
    assert_eq!(summary.groups[0].services.as_slice(), ["Live Streaming", "Highlights Reel"]);
    assert_eq!(summary.service_count(), 3);
}

#[test]
fn scenario_message_text() {
    let msg = format_message(&BookingSummary::from_store(&scenario_store()));
    let expected = format!(
        "{MESSAGE_GREETING}\n\n*Photography*\n- Wedding Shoot\n- Drone Coverage\n\n*Video*\n- Live Streaming\n\nPlease confirm availability and pricing."
    );
    assert_eq!(msg, expected);
}

#[test]
fn scenario_handoff_url() {
    let msg = format_message(&BookingSummary::from_store(&scenario_store()));
    let url = handoff_url(&HandoffConfig::default(), &msg);
    let encoded = url
        .strip_prefix("https://wa.me/918287852599?text=")
        .expect("hand-off prefix");
    assert!(!encoded.contains(' '));
    assert!(!encoded.contains('\n'));
    assert_eq!(urlencoding::decode(encoded).unwrap(), msg);
}

#[test]
fn handoff_url_matches_encode_uri_component() {
    let msg = format_message(&BookingSummary::from_store(&scenario_store()));
    let url = handoff_url(&HandoffConfig::default(), &msg);
    assert_eq!(
        url,
        "https://wa.me/918287852599?text=Hello%20Team%20Jyoti%20Photo%20Studio!%20I%20am%20\
         interested%20in%20booking%20the%20following%20premium%20services%3A%0A%0A\
         *Photography*%0A-%20Wedding%20Shoot%0A-%20Drone%20Coverage%0A%0A\
         *Video*%0A-%20Live%20Streaming%0A%0A\
         Please%20confirm%20availability%20and%20pricing."
    );
}

#[test]
fn handoff_url_keeps_uri_component_marks() {
    let url = handoff_url(&HandoffConfig::default(), "a-b_c.d!e~f*g'h(i)j k/l?m&n=o#p");
    assert_eq!(
        url,
        "https://wa.me/918287852599?text=a-b_c.d!e~f*g'h(i)j%20k%2Fl%3Fm%26n%3Do%23p"
    );
}

#[test]
fn lines_and_message_agree() {
    let summary = BookingSummary::from_store(&scenario_store());
    let msg = format_message(&summary);

    let mut from_lines = String::new();
    for line in summary.lines() {
        match line {
            SummaryLine::Header(label) => from_lines.push_str(&format!("*{label}*\n")),
            SummaryLine::Item(name) => from_lines.push_str(&format!("- {name}\n")),
        }
    }
    let body: String = msg
        .strip_prefix(MESSAGE_GREETING)
        .and_then(|m| m.strip_suffix(MESSAGE_CLOSING))
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| format!("{l}\n"))
        .collect();
    assert_eq!(body, from_lines);
}

#[test]
fn empty_store_has_no_blocks() {
    let summary = BookingSummary::from_store(&SelectionStore::new());
    assert!(summary.is_empty());
    assert!(summary.lines().is_empty());
    assert_eq!(
        format_message(&summary),
        format!("{MESSAGE_GREETING}\n\n{MESSAGE_CLOSING}")
    );
}

#[test]
fn deselect_removes_line_keeps_header() {
    let mut store = scenario_store();
    store.deselect("Wedding Shoot");
    assert_eq!(store.count(), 2);

    let lines = BookingSummary::from_store(&store).lines();
    assert_eq!(
        lines,
        vec![
            SummaryLine::Header("Photography".into()),
            SummaryLine::Item("Drone Coverage".into()),
            SummaryLine::Header("Video".into()),
            SummaryLine::Item("Live Streaming".into()),
        ]
    );
}

#[test]
fn handoff_url_respects_config() {
    let config = HandoffConfig {
        base_url: "https://chat.example/".into(),
        number: "100".into(),
    };
    assert_eq!(handoff_url(&config, "a b"), "https://chat.example/100?text=a%20b");
}
