use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec;

use multilist::{MultiListOptions, SegmentOptions};

fn tall_list() -> MultiListOptions {
    MultiListOptions::new(vec![SegmentOptions::new(100).with_item_size(50)])
}

#[test]
fn tween_drives_scroll_offset_to_the_target() {
    let mut c = Controller::new(tall_list());
    c.on_viewport_extent(300);

    let target = c.scroll_to(1000, ScrollToOptions::animated(100), 0);
    assert_eq!(target, 1000);
    assert!(c.is_animating());

    let mut last = 0u64;
    for now_ms in [0u64, 10, 25, 50, 80, 100, 120] {
        if let Some(offset) = c.tick(now_ms) {
            assert!(offset >= last);
            last = offset;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.multilist().scroll_offset(), 1000);
}

#[test]
fn animated_and_immediate_commit_the_same_offset() {
    let mut a = Controller::new(tall_list());
    a.on_viewport_extent(300);
    a.scroll_to(1000, ScrollToOptions::animated(250), 0);
    // An immediate command supersedes the in-flight animation.
    a.scroll_to(1000, ScrollToOptions::immediate(), 0);
    assert!(!a.is_animating());

    let mut b = Controller::new(tall_list());
    b.on_viewport_extent(300);
    b.scroll_to(1000, ScrollToOptions::immediate(), 0);

    assert_eq!(a.multilist().scroll_offset(), 1000);
    assert_eq!(b.multilist().scroll_offset(), 1000);
}

#[test]
fn scroll_to_clamps_to_the_scrollable_extent() {
    let mut c = Controller::new(tall_list());
    c.on_viewport_extent(300);
    let committed = c.scroll_to(1_000_000, ScrollToOptions::immediate(), 0);
    assert_eq!(committed, c.multilist().max_scroll_offset());
    assert_eq!(c.multilist().scroll_offset(), committed);
}

#[test]
fn scroll_to_before_measure_defers() {
    let mut c = Controller::new(tall_list());
    c.scroll_to(1000, ScrollToOptions::animated(100), 0);
    assert!(!c.is_animating());
    assert_eq!(c.multilist().scroll_offset(), 0);

    c.on_viewport_extent(300);
    assert_eq!(c.multilist().scroll_offset(), 1000);
}

#[test]
fn user_scroll_cancels_the_tween() {
    let mut c = Controller::new(tall_list());
    c.on_viewport_extent(300);
    c.scroll_to(1000, ScrollToOptions::animated(100), 0);
    assert!(c.is_animating());

    c.on_scroll(200, 10);
    assert!(!c.is_animating());
    assert_eq!(c.multilist().scroll_offset(), 200);
    assert_eq!(c.tick(20), None);
}

#[test]
fn retarget_redirects_an_active_tween() {
    let mut c = Controller::new(tall_list());
    c.on_viewport_extent(300);
    c.scroll_to(1000, ScrollToOptions::animated(100), 0);
    c.tick(50);

    let target = c.scroll_to(2000, ScrollToOptions::animated(100), 50);
    assert_eq!(target, 2000);
    c.tick(150);
    assert!(!c.is_animating());
    assert_eq!(c.multilist().scroll_offset(), 2000);
}

#[test]
fn animated_scroll_feeds_fetch_dispatch() {
    let fetches: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let hook = {
        let fetches = Arc::clone(&fetches);
        move || {
            fetches.fetch_add(1, Ordering::Relaxed);
        }
    };
    let mut c = Controller::new(MultiListOptions::new(vec![
        SegmentOptions::new(100)
            .with_item_size(50)
            .with_on_fetch_more(hook),
    ]));
    c.on_viewport_extent(300);

    c.scroll_to(1000, ScrollToOptions::animated(100), 0);
    for now_ms in [0u64, 25, 50, 75, 100] {
        c.tick(now_ms);
    }
    // Tween ticks are ordinary scroll events: throttled, but dispatched.
    assert!(fetches.load(Ordering::Relaxed) >= 1);
}

#[test]
fn anchor_preserves_position_across_upstream_growth() {
    let mut c = Controller::new(
        MultiListOptions::new(vec![
            SegmentOptions::new(10).with_item_size(50),
            SegmentOptions::new(10).with_item_size(50),
        ])
        .with_fetch_on_scroll(false),
    );
    c.on_viewport_extent(100);
    c.on_scroll(550, 0);

    let anchor = capture_first_visible_anchor(c.multilist()).unwrap();
    assert_eq!(anchor.segment, 1);
    assert_eq!(anchor.index, 1);
    assert_eq!(anchor.offset_in_viewport, 0);

    // Four items land in segment 0; everything below shifts by 200.
    c.multilist_mut().set_data_length(0, 14);
    assert!(apply_anchor(c.multilist_mut(), &anchor));
    assert_eq!(c.multilist().scroll_offset(), 750);
    assert_eq!(
        c.multilist().visible_range(1).unwrap().start_index,
        anchor.index
    );
}

#[test]
fn anchor_fails_when_the_item_is_gone() {
    let mut c = Controller::new(MultiListOptions::new(vec![
        SegmentOptions::new(10).with_item_size(50),
    ]));
    c.on_viewport_extent(100);
    c.on_scroll(300, 0);

    let anchor = capture_first_visible_anchor(c.multilist()).unwrap();
    c.multilist_mut().set_data_length(0, 2);
    assert!(!apply_anchor(c.multilist_mut(), &anchor));
}

#[test]
fn handle_is_a_narrow_best_effort_command() {
    let shared = SharedController::new(tall_list());
    shared.with(|c| c.on_viewport_extent(300));

    let handle = shared.handle();
    assert!(handle.is_attached());
    handle.scroll_to(500, ScrollToOptions::immediate(), 0);
    assert_eq!(
        shared.with(|c| c.multilist().scroll_offset()),
        Some(500)
    );

    drop(shared);
    assert!(!handle.is_attached());
    // Detached: silently does nothing.
    handle.scroll_to(900, ScrollToOptions::immediate(), 1);
}
