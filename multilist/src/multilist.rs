use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::dispatch::{EdgeAction, edge_action};
use crate::options::MultiListOptions;
use crate::throttle::Throttle;
use crate::window::WindowParams;
use crate::{
    DispatchState, FrameState, ScrollDirection, ScrollState, SegmentEdge, SegmentWindow,
    ViewportState, WindowItem, WindowRange,
};

/// Per-segment edge memory, so each crossing fires exactly once.
#[derive(Clone, Copy, Debug, Default)]
struct EdgeState {
    at_bottom: bool,
    left: bool,
}

/// The composite scroll coordinator.
///
/// Owns the shared scroll offset, the viewport measurement, the segment
/// descriptors, and the active-segment pointer. It is intentionally
/// UI-agnostic: a host adapter feeds it scroll events and the measured
/// viewport extent, then queries back the per-segment windows (or the flat
/// materialized item list) to render.
///
/// Two-phase lifecycle: construct first, then [`MultiList::measure`] once the
/// real viewport extent is known. Until measurement lands, every window query
/// is empty, so no content is laid out against a stale or unknown extent.
#[derive(Clone, Debug)]
pub struct MultiList {
    options: MultiListOptions,
    viewport_extent: u32,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    active_segment: usize,
    pending_scroll: Option<u64>,
    throttle: Throttle,
    edges: Vec<EdgeState>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl MultiList {
    pub fn new(options: MultiListOptions) -> Self {
        let viewport_extent = options.initial_extent.unwrap_or(0);
        let scroll_offset = options.initial_offset;
        let throttle = Throttle::new(options.scroll_interval_ms);
        let edges = vec![EdgeState::default(); options.segments.len()];
        mldebug!(
            segments = options.segments.len(),
            fetch_on_scroll = options.fetch_on_scroll,
            fetch_on_bottom = options.fetch_on_bottom,
            "MultiList::new"
        );
        Self {
            viewport_extent,
            scroll_offset,
            scroll_direction: None,
            active_segment: 0,
            pending_scroll: None,
            throttle,
            edges,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &MultiListOptions {
        &self.options
    }

    pub fn segment_count(&self) -> usize {
        self.options.segments.len()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    /// Whether the viewport extent has been committed yet.
    pub fn measured(&self) -> bool {
        self.viewport_extent > 0
    }

    /// The segment currently targeted by scroll-driven fetch dispatch.
    pub fn active_segment(&self) -> usize {
        self.active_segment
    }

    pub fn data_length(&self, segment: usize) -> Option<usize> {
        self.options.segments.get(segment).map(|s| s.data_length)
    }

    // ---- notification ----

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // ---- lifecycle ----

    /// Commits the measured viewport extent.
    ///
    /// Idempotent for a repeated equal measurement. The first measurement
    /// with a non-zero extent also applies any `scroll_to` target that was
    /// deferred while unmeasured.
    pub fn measure(&mut self, extent: u32) {
        mldebug!(extent, "measure");
        self.batch_update(|ml| {
            if ml.viewport_extent != extent {
                ml.viewport_extent = extent;
                ml.notify();
            }
            if ml.viewport_extent > 0 {
                if let Some(target) = ml.pending_scroll.take() {
                    ml.commit_offset(target);
                    ml.sweep_edges(true);
                }
            }
        });
    }

    /// Handles a scroll event reported by the container.
    ///
    /// The offset is committed unconditionally (the container enforces its
    /// own physical limits; this engine does not clamp the visual path).
    /// Edge signals and throttled fetch dispatch run afterwards; `on_change`
    /// fires at most once for the whole event.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        mltrace!(offset, now_ms, "on_scroll");
        self.batch_update(|ml| {
            ml.commit_offset(offset);
            ml.sweep_edges(true);
            ml.dispatch_on_scroll(now_ms);
        });
    }

    /// Moves the scroll position to `offset` (best-effort imperative API).
    ///
    /// Before [`MultiList::measure`] lands the target is deferred silently
    /// and applied with the first real measurement. Animation is an adapter
    /// concern; see the `multilist-adapter` crate.
    pub fn scroll_to(&mut self, offset: u64) {
        if !self.measured() {
            self.pending_scroll = Some(offset);
            return;
        }
        self.batch_update(|ml| {
            ml.commit_offset(offset);
            ml.sweep_edges(true);
        });
    }

    /// Commits `index` (clamped to the last segment) as the new active
    /// segment. Monotonic ratchet: the stored value never decreases, so once
    /// the fetch focus has moved past a segment it does not move back even
    /// if the user scrolls up.
    pub fn set_active_segment(&mut self, index: usize) {
        let Some(last) = self.options.segments.len().checked_sub(1) else {
            return;
        };
        let next = index.min(last);
        if next <= self.active_segment {
            return;
        }
        mldebug!(active = next, "set_active_segment");
        self.active_segment = next;
        self.notify();
    }

    fn commit_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    // ---- edge signals & fetch dispatch ----

    /// Recomputes every segment's bottom/leave condition, firing rising
    /// edges when `fire` is set (restores prime the flags silently).
    fn sweep_edges(&mut self, fire: bool) {
        if self.viewport_extent == 0 {
            return;
        }
        let mut fired: Vec<(usize, SegmentEdge)> = Vec::new();
        let mut lead = 0u64;
        for (i, seg) in self.options.segments.iter().enumerate() {
            let extent = seg.extent();
            let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
            let visible = self.options.engine.visible(&params);

            let bottom_now = seg.data_length > 0
                && !visible.is_empty()
                && visible.end_index == seg.data_length;
            let left_now =
                seg.data_length > 0 && self.scroll_offset.saturating_sub(lead) >= extent;

            let edge = &mut self.edges[i];
            if bottom_now && !edge.at_bottom {
                fired.push((i, SegmentEdge::Bottom));
            }
            if left_now && !edge.left {
                fired.push((i, SegmentEdge::Leave));
            }
            edge.at_bottom = bottom_now;
            edge.left = left_now;

            lead = lead.saturating_add(extent);
        }
        if !fire {
            return;
        }
        for (segment, edge) in fired {
            mltrace!(segment, ?edge, "edge signal");
            match edge_action(self.options.fetch_on_bottom, segment, edge) {
                EdgeAction::Fetch(s) => {
                    // Bottom-of-segment is a discrete event; it bypasses the
                    // scroll throttle.
                    if let Some(cb) = self.options.segments[s].on_fetch_more.clone() {
                        cb();
                    }
                }
                EdgeAction::Advance(next) => self.set_active_segment(next),
                EdgeAction::Ignore => {}
            }
        }
    }

    /// Scroll-driven dispatch: at most one fetch per throttle interval, aimed
    /// at the active segment. An active segment without a hook is a silent
    /// no-op (the throttle window is consumed either way, as a wrapped
    /// zero-argument callback would).
    fn dispatch_on_scroll(&mut self, now_ms: u64) {
        if !self.options.fetch_on_scroll || self.options.segments.is_empty() {
            return;
        }
        if !self.throttle.fire(now_ms) {
            return;
        }
        let active = self.active_segment.min(self.options.segments.len() - 1);
        if let Some(cb) = self.options.segments[active].on_fetch_more.clone() {
            mltrace!(active, now_ms, "scroll fetch dispatch");
            cb();
        }
    }

    // ---- data growth ----

    /// Updates a segment's known item count (the fetch-completion path).
    ///
    /// Out-of-range segments are ignored. Growth re-arms the segment's
    /// bottom edge so the next crossing fires again. Window ranges are
    /// re-derived lazily on the next scroll or query.
    pub fn set_data_length(&mut self, segment: usize, data_length: usize) {
        let Some(seg) = self.options.segments.get_mut(segment) else {
            return;
        };
        if seg.data_length == data_length {
            return;
        }
        let grew = data_length > seg.data_length;
        mldebug!(segment, data_length, grew, "set_data_length");
        seg.data_length = data_length;
        if grew {
            if let Some(edge) = self.edges.get_mut(segment) {
                edge.at_bottom = false;
            }
        }
        self.notify();
    }

    // ---- geometry & windows ----

    fn params_at(&self, data_length: usize, item_size: u32, gap: u32, lead: u64) -> WindowParams {
        WindowParams {
            outer_extent: self.viewport_extent,
            scroll_offset: self.scroll_offset,
            lead,
            data_length,
            item_size,
            gap,
            boundary: self.options.boundary,
        }
    }

    /// Cumulative extent of every segment before `segment`.
    pub fn segment_lead(&self, segment: usize) -> Option<u64> {
        if segment >= self.options.segments.len() {
            return None;
        }
        let mut lead = 0u64;
        for seg in &self.options.segments[..segment] {
            lead = lead.saturating_add(seg.extent());
        }
        Some(lead)
    }

    /// Total extent of all segments in the shared coordinate space.
    pub fn total_extent(&self) -> u64 {
        self.options
            .segments
            .iter()
            .fold(0u64, |acc, seg| acc.saturating_add(seg.extent()))
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_extent()
            .saturating_sub(self.viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The render instruction for one segment at the current scroll position.
    ///
    /// The range is empty until [`MultiList::measure`] commits an extent.
    pub fn segment_window(&self, segment: usize) -> Option<SegmentWindow> {
        let seg = self.options.segments.get(segment)?;
        let lead = self.segment_lead(segment)?;
        let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
        Some(SegmentWindow {
            segment,
            lead,
            local_offset: self.scroll_offset.saturating_sub(lead),
            range: self.options.engine.window(&params),
        })
    }

    /// The visible range of one segment, without boundary padding.
    pub fn visible_range(&self, segment: usize) -> Option<WindowRange> {
        let seg = self.options.segments.get(segment)?;
        let lead = self.segment_lead(segment)?;
        let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
        Some(self.options.engine.visible(&params))
    }

    /// Global start offset of one item, when it exists.
    pub fn item_start(&self, segment: usize, index: usize) -> Option<u64> {
        let seg = self.options.segments.get(segment)?;
        if index >= seg.data_length {
            return None;
        }
        let lead = self.segment_lead(segment)?;
        let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
        Some(self.options.engine.item_start(&params, index))
    }

    /// Iterates the render instruction of every segment, in display order.
    pub fn for_each_window(&self, mut f: impl FnMut(SegmentWindow)) {
        let mut lead = 0u64;
        for (i, seg) in self.options.segments.iter().enumerate() {
            let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
            f(SegmentWindow {
                segment: i,
                lead,
                local_offset: self.scroll_offset.saturating_sub(lead),
                range: self.options.engine.window(&params),
            });
            lead = lead.saturating_add(seg.extent());
        }
    }

    /// Iterates every materialized item across all segments, with global
    /// start offsets, without allocating.
    pub fn for_each_item(&self, mut f: impl FnMut(WindowItem)) {
        let mut lead = 0u64;
        for (i, seg) in self.options.segments.iter().enumerate() {
            let params = self.params_at(seg.data_length, seg.item_size, seg.gap, lead);
            let range = self.options.engine.window(&params);
            for index in range.start_index..range.end_index {
                f(WindowItem {
                    segment: i,
                    index,
                    start: self.options.engine.item_start(&params, index),
                    size: seg.item_size,
                });
            }
            lead = lead.saturating_add(seg.extent());
        }
    }

    /// Collects materialized items into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`MultiList::for_each_item`]; adapters that
    /// care about allocations should reuse a scratch buffer.
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_item(|item| out.push(item));
    }

    // ---- option updates ----

    pub fn set_options(&mut self, options: MultiListOptions) {
        let prev_segments = self.options.segments.len();
        self.options = options;
        let count = self.options.segments.len();
        if count != prev_segments {
            self.edges.resize(count, EdgeState::default());
            if let Some(last) = count.checked_sub(1) {
                // Shrinking may leave the pointer out of range; the clamp
                // invariant outranks the ratchet here.
                self.active_segment = self.active_segment.min(last);
            } else {
                self.active_segment = 0;
            }
        }
        self.throttle.set_interval_ms(self.options.scroll_interval_ms);
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`MultiList::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut MultiListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_boundary(&mut self, boundary: usize) {
        self.options.boundary = boundary;
        self.notify();
    }

    pub fn set_fetch_on_scroll(&mut self, fetch_on_scroll: bool) {
        self.options.fetch_on_scroll = fetch_on_scroll;
        self.notify();
    }

    pub fn set_fetch_on_bottom(&mut self, fetch_on_bottom: bool) {
        self.options.fetch_on_bottom = fetch_on_bottom;
        self.notify();
    }

    pub fn set_scroll_interval_ms(&mut self, interval_ms: u64) {
        self.options.scroll_interval_ms = interval_ms;
        self.throttle.set_interval_ms(interval_ms);
        self.notify();
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&MultiList) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    // ---- snapshots ----

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            extent: self.viewport_extent,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
        }
    }

    pub fn dispatch_state(&self) -> DispatchState {
        DispatchState {
            active_segment: self.active_segment,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
            dispatch: self.dispatch_state(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// A restore is a new life: the active-segment clamp applies but the
    /// ratchet does not, edge flags are primed to current conditions without
    /// firing, and the fetch throttle is reset.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.batch_update(|ml| {
            if ml.viewport_extent != frame.viewport.extent {
                ml.viewport_extent = frame.viewport.extent;
                ml.notify();
            }
            ml.commit_offset(frame.scroll.offset);
            if let Some(last) = ml.options.segments.len().checked_sub(1) {
                ml.active_segment = frame.dispatch.active_segment.min(last);
            } else {
                ml.active_segment = 0;
            }
            ml.throttle.reset();
            ml.sweep_edges(false);
            ml.notify();
        });
    }
}
