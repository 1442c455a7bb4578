// Example: animated scroll_to driven from a frame loop, plus a detached
// imperative handle.
use multilist::{MultiListOptions, SegmentOptions};
use multilist_adapter::{Controller, Easing, ScrollToOptions, SharedController};

fn main() {
    let mut c = Controller::new(MultiListOptions::new(vec![
        SegmentOptions::new(50).with_item_size(40),
        SegmentOptions::new(200).with_item_size(40),
    ]));
    c.on_viewport_extent(400);

    let target = c.scroll_to(
        5000,
        ScrollToOptions::animated(240).with_easing(Easing::EaseOutCubic),
        0,
    );
    println!("target={target}");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(offset) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!(
                    "t={now_ms} offset={offset} active={}",
                    c.multilist().active_segment()
                );
            }
        }
    }
    println!("done: offset={}", c.multilist().scroll_offset());

    // External callers get a narrow command surface, not the whole state.
    let shared = SharedController::from_controller(c);
    let handle = shared.handle();
    handle.scroll_to(0, ScrollToOptions::immediate(), now_ms);
    println!(
        "after handle: offset={:?}",
        shared.with(|c| c.multilist().scroll_offset())
    );
}
