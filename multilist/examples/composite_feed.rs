// Example: three segments (pinned posts, feed, suggestions) in one viewport,
// with scroll-driven fetch dispatch following the active segment.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use multilist::{MultiList, MultiListOptions, SegmentOptions};

fn main() {
    let feed_fetches = Arc::new(AtomicUsize::new(0));
    let fetch_counter = {
        let feed_fetches = Arc::clone(&feed_fetches);
        move || {
            feed_fetches.fetch_add(1, Ordering::Relaxed);
        }
    };

    let mut ml = MultiList::new(MultiListOptions::new(vec![
        SegmentOptions::new(3).with_item_size(80),
        SegmentOptions::new(40)
            .with_item_size(120)
            .with_gap(16)
            .with_on_fetch_more(fetch_counter),
        SegmentOptions::new(10).with_item_size(60),
    ]));

    // Nothing renders until the host measures the container.
    ml.measure(600);
    println!("total_extent={}", ml.total_extent());

    let mut items = Vec::new();
    let mut now_ms = 0u64;
    for offset in (0..=4000u64).step_by(200) {
        ml.on_scroll(offset, now_ms);
        now_ms += 40;
    }
    ml.collect_items(&mut items);

    println!("offset={} active_segment={}", ml.scroll_offset(), ml.active_segment());
    println!("materialized={} first={:?}", items.len(), items.first());
    println!("feed_fetches={}", feed_fetches.load(Ordering::Relaxed));
}
