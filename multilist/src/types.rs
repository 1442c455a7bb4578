#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous index range within one segment's data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Per-segment render instruction for the current scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentWindow {
    pub segment: usize,
    /// Cumulative extent of all segments before this one.
    pub lead: u64,
    /// Scroll offset translated into this segment's own coordinate space
    /// (zero while the segment starts at or below the viewport top).
    pub local_offset: u64,
    /// Materialized index range (visible plus boundary padding).
    pub range: WindowRange,
}

/// One materialized item with its global start offset in the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub segment: usize,
    pub index: usize,
    /// Start offset in the shared coordinate space (includes the segment's
    /// lead and its gap).
    pub start: u64,
    pub size: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}

/// An edge signal raised while scrolling through a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentEdge {
    /// The visible range's upper edge reached the segment's last item.
    Bottom,
    /// The viewport moved entirely past the segment.
    Leave,
}
