use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::multilist::MultiList;
use crate::segment::SegmentOptions;
use crate::window::{UniformWindow, WindowEngine};

/// A callback fired when the engine's state changes (scroll, measure,
/// active-segment advance, option updates). Fired at most once per batched
/// update.
pub type OnChangeCallback = Arc<dyn Fn(&MultiList) + Send + Sync>;

/// A segment's incremental-fetch hook. Takes no arguments and returns
/// nothing; the engine fires it and forgets it.
pub type FetchMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::MultiList`].
///
/// Cheap to clone: closures and the window engine are stored in `Arc`s so
/// adapters can tweak a few fields and call `MultiList::set_options` without
/// reallocating.
pub struct MultiListOptions {
    /// Segments in display order. Never reordered over the instance's life.
    pub segments: Vec<SegmentOptions>,

    /// Enables scroll-driven fetch dispatch for the active segment.
    pub fetch_on_scroll: bool,

    /// Selects the edge strategy: when `true`, a segment bottoming out
    /// invokes its own fetch hook directly (unthrottled); when `false`,
    /// bottom/leave edges advance the active segment instead.
    pub fetch_on_bottom: bool,

    /// Throttle interval for scroll-driven dispatch, in milliseconds.
    pub scroll_interval_ms: u64,

    /// Extra items materialized beyond the strictly-visible range on each
    /// side, to mask blank frames during fast scroll.
    pub boundary: usize,

    /// Viewport extent when already known at construction. When `None`, the
    /// engine renders nothing until [`crate::MultiList::measure`] commits a
    /// real measurement.
    pub initial_extent: Option<u32>,

    /// Initial scroll offset.
    pub initial_offset: u64,

    /// Optional callback fired when the engine's state changes.
    pub on_change: Option<OnChangeCallback>,

    /// The per-segment windowing primitive. Defaults to [`UniformWindow`].
    pub engine: Arc<dyn WindowEngine>,
}

impl MultiListOptions {
    pub fn new(segments: Vec<SegmentOptions>) -> Self {
        Self {
            segments,
            fetch_on_scroll: true,
            fetch_on_bottom: false,
            scroll_interval_ms: 200,
            boundary: 0,
            initial_extent: None,
            initial_offset: 0,
            on_change: None,
            engine: Arc::new(UniformWindow),
        }
    }

    pub fn with_fetch_on_scroll(mut self, fetch_on_scroll: bool) -> Self {
        self.fetch_on_scroll = fetch_on_scroll;
        self
    }

    pub fn with_fetch_on_bottom(mut self, fetch_on_bottom: bool) -> Self {
        self.fetch_on_bottom = fetch_on_bottom;
        self
    }

    pub fn with_scroll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.scroll_interval_ms = interval_ms;
        self
    }

    pub fn with_boundary(mut self, boundary: usize) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_initial_extent(mut self, initial_extent: Option<u32>) -> Self {
        self.initial_extent = initial_extent;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&MultiList) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn with_engine(mut self, engine: impl WindowEngine + 'static) -> Self {
        self.engine = Arc::new(engine);
        self
    }
}

impl Clone for MultiListOptions {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            fetch_on_scroll: self.fetch_on_scroll,
            fetch_on_bottom: self.fetch_on_bottom,
            scroll_interval_ms: self.scroll_interval_ms,
            boundary: self.boundary,
            initial_extent: self.initial_extent,
            initial_offset: self.initial_offset,
            on_change: self.on_change.clone(),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl core::fmt::Debug for MultiListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MultiListOptions")
            .field("segments", &self.segments)
            .field("fetch_on_scroll", &self.fetch_on_scroll)
            .field("fetch_on_bottom", &self.fetch_on_bottom)
            .field("scroll_interval_ms", &self.scroll_interval_ms)
            .field("boundary", &self.boundary)
            .field("initial_extent", &self.initial_extent)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
