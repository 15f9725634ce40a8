// Host-side tests for the welcome popup timeline.

use studio_core::{PopupPhase, PopupTimeline, POPUP_AUTO_HIDE_DELAY_MS, POPUP_SHOW_DELAY_MS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn auto_hide_comes_after_show() {
    assert!(POPUP_SHOW_DELAY_MS > 0);
    assert!(POPUP_AUTO_HIDE_DELAY_MS > POPUP_SHOW_DELAY_MS);
}

#[test]
fn shows_then_auto_hides() {
    let mut t = PopupTimeline::new();
    assert_eq!(t.phase(), PopupPhase::Pending);
    assert!(t.show());
    assert_eq!(t.phase(), PopupPhase::Visible);
    assert!(t.auto_hide());
    assert_eq!(t.phase(), PopupPhase::Hidden);
    assert!(!t.auto_hide_armed());
}

#[test]
fn manual_close_cancels_auto_hide() {
    let mut t = PopupTimeline::new();
    t.show();
    assert!(t.close());
    assert_eq!(t.phase(), PopupPhase::Hidden);
    // a late timer firing changes nothing
    assert!(!t.auto_hide());
    // second close has no timer left to cancel
    assert!(!t.close());
}

#[test]
fn close_before_show_suppresses_show() {
    let mut t = PopupTimeline::new();
    assert!(t.close());
    assert!(!t.show());
    assert_eq!(t.phase(), PopupPhase::Hidden);
}
