use crate::types::WindowRange;

/// Inputs for one segment's window computation.
///
/// `lead` is the cumulative extent of every segment before this one; it plays
/// the same role a scroll margin plays for a single list, translating the
/// shared `scroll_offset` into the segment's own coordinate space. The
/// coordinator queries segments one at a time with a running `lead` instead
/// of precomputing a global layout table, since segment extents change as
/// data lengths grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowParams {
    /// Measured extent of the shared viewport.
    pub outer_extent: u32,
    /// Shared scroll offset (global coordinate space).
    pub scroll_offset: u64,
    /// Cumulative extent preceding this segment.
    pub lead: u64,
    pub data_length: usize,
    pub item_size: u32,
    /// Fixed extent before the item band.
    pub gap: u32,
    /// Extra items materialized past the visible range on each side.
    pub boundary: usize,
}

impl WindowParams {
    /// Total extent of the segment.
    pub fn extent(&self) -> u64 {
        (self.gap as u64)
            .saturating_add((self.data_length as u64).saturating_mul(self.item_size as u64))
    }
}

/// The per-segment windowing primitive.
///
/// Given viewport geometry and the segment's shape, implementations decide
/// the minimal contiguous index range to materialize and where each item
/// sits. The default [`UniformWindow`] covers the uniform-item-size model;
/// hosts with different layout rules can supply their own.
pub trait WindowEngine: Send + Sync {
    /// The minimal index range intersecting the viewport band, without
    /// boundary padding. Empty when the viewport is unmeasured, the segment
    /// has no items, or the band misses the segment entirely.
    fn visible(&self, params: &WindowParams) -> WindowRange;

    /// The materialized range: [`Self::visible`] widened by `boundary` items
    /// on each side, clamped to the data.
    fn window(&self, params: &WindowParams) -> WindowRange {
        let visible = self.visible(params);
        if visible.is_empty() {
            return visible;
        }
        WindowRange {
            start_index: visible.start_index.saturating_sub(params.boundary),
            end_index: visible
                .end_index
                .saturating_add(params.boundary)
                .min(params.data_length),
        }
    }

    /// Global start offset of the item at `index`.
    fn item_start(&self, params: &WindowParams, index: usize) -> u64;
}

/// Uniform-size windowing: every item in the segment has the same extent, so
/// offset math is direct multiplication and division.
///
/// Prefix/suffix decorations the host may render around the item band are
/// not part of this math; an item starts at `lead + gap + index * item_size`
/// regardless of decorations.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformWindow;

impl UniformWindow {
    fn index_at(params: &WindowParams, local_offset: u64) -> usize {
        let gap = params.gap as u64;
        if local_offset < gap || params.item_size == 0 {
            return 0;
        }
        let i = (local_offset - gap) / params.item_size as u64;
        (i as usize).min(params.data_length.saturating_sub(1))
    }
}

impl WindowEngine for UniformWindow {
    fn visible(&self, params: &WindowParams) -> WindowRange {
        let count = params.data_length;
        if count == 0 || params.outer_extent == 0 || params.item_size == 0 {
            return WindowRange::EMPTY;
        }

        let view = params.outer_extent as u64;
        let extent = params.extent();

        let band_end = params.scroll_offset.saturating_add(view);
        if band_end <= params.lead {
            // Segment starts below the viewport.
            return WindowRange::EMPTY;
        }

        let local_start = params.scroll_offset.saturating_sub(params.lead);
        if local_start >= extent {
            // Viewport is entirely past the segment.
            return WindowRange::EMPTY;
        }

        // band_end > lead, so this is at least 1.
        let local_end = (band_end - params.lead).min(extent);

        let start_index = Self::index_at(params, local_start);
        let end_index = Self::index_at(params, local_end - 1) + 1;

        WindowRange {
            start_index,
            end_index: end_index.min(count),
        }
    }

    fn item_start(&self, params: &WindowParams, index: usize) -> u64 {
        params
            .lead
            .saturating_add(params.gap as u64)
            .saturating_add((index as u64).saturating_mul(params.item_size as u64))
    }
}
