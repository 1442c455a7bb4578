use alloc::sync::Arc;

use crate::options::FetchMoreCallback;

/// Item extent used when a segment does not specify one.
pub const DEFAULT_ITEM_SIZE: u32 = 50;

/// Describes one segment: an independently-windowed logical list composited
/// into the shared viewport.
///
/// Everything here is fixed at mount except `data_length`, which grows as
/// incremental fetches complete (via [`crate::MultiList::set_data_length`]).
///
/// Prefix/suffix decorations rendered around the item band are a concern of
/// the host adapter; their extents are not part of the offset math here. A
/// segment's extent is exactly `gap + data_length * item_size`.
pub struct SegmentOptions {
    /// Number of items currently known.
    pub data_length: usize,
    /// Uniform per-item extent along the scroll axis.
    pub item_size: u32,
    /// Fixed extra extent inserted once before the item band.
    pub gap: u32,
    /// Requests additional items. Fire-and-forget: the engine never awaits
    /// completion, never dedupes, and may call this when no more data exists.
    /// Idempotence and in-flight guarding belong to the callback owner.
    pub on_fetch_more: Option<FetchMoreCallback>,
}

impl SegmentOptions {
    pub fn new(data_length: usize) -> Self {
        Self {
            data_length,
            item_size: DEFAULT_ITEM_SIZE,
            gap: 0,
            on_fetch_more: None,
        }
    }

    pub fn with_item_size(mut self, item_size: u32) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_on_fetch_more(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_fetch_more = Some(Arc::new(f));
        self
    }

    /// Total extent this segment occupies in the shared coordinate space.
    pub fn extent(&self) -> u64 {
        (self.gap as u64).saturating_add((self.data_length as u64).saturating_mul(self.item_size as u64))
    }
}

impl Clone for SegmentOptions {
    fn clone(&self) -> Self {
        Self {
            data_length: self.data_length,
            item_size: self.item_size,
            gap: self.gap,
            on_fetch_more: self.on_fetch_more.clone(),
        }
    }
}

impl core::fmt::Debug for SegmentOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentOptions")
            .field("data_length", &self.data_length)
            .field("item_size", &self.item_size)
            .field("gap", &self.gap)
            .field("on_fetch_more", &self.on_fetch_more.as_ref().map(|_| ".."))
            .finish()
    }
}
