use multilist::MultiList;

/// A scroll anchor identifying an item and its distance from the viewport
/// top, used to preserve visual position across data-length changes (e.g.
/// an earlier segment growing after a fetch completes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentAnchor {
    pub segment: usize,
    pub index: usize,
    /// Distance from the anchor item's start to the viewport's scroll
    /// offset.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the first visible item across all segments.
///
/// Returns `None` when nothing is visible (unmeasured viewport, empty
/// segments, or an offset past all content).
pub fn capture_first_visible_anchor(ml: &MultiList) -> Option<SegmentAnchor> {
    for segment in 0..ml.segment_count() {
        let Some(visible) = ml.visible_range(segment) else {
            continue;
        };
        if visible.is_empty() {
            continue;
        }
        let index = visible.start_index;
        let start = ml.item_start(segment, index)?;
        return Some(SegmentAnchor {
            segment,
            index,
            offset_in_viewport: ml.scroll_offset().saturating_sub(start),
        });
    }
    None
}

/// Re-applies a previously captured anchor by adjusting the scroll offset to
/// wherever the anchored item sits now.
///
/// Returns `true` when the anchor was applied (the item still exists).
pub fn apply_anchor(ml: &mut MultiList, anchor: &SegmentAnchor) -> bool {
    let Some(start) = ml.item_start(anchor.segment, anchor.index) else {
        return false;
    };
    let target = start.saturating_add(anchor.offset_in_viewport);
    ml.scroll_to(ml.clamp_scroll_offset(target));
    true
}
