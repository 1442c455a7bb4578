use crate::types::SegmentEdge;

/// What the coordinator does in response to a segment edge signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeAction {
    /// Invoke this segment's fetch hook directly, bypassing the scroll
    /// throttle (edge crossings are discrete, rare events).
    Fetch(usize),
    /// Advance the active-segment pointer to this index (ratcheted).
    Advance(usize),
    /// Signal not wired under the current strategy.
    Ignore,
}

/// Maps an edge signal to an action under one of the two fetch strategies.
///
/// With `fetch_on_bottom` enabled, a segment bottoming out fetches for
/// itself and leave signals are not wired (redundant). With it disabled,
/// both edges move the fetch focus forward to the next segment; the scroll
/// path then targets whichever segment is active.
pub fn edge_action(fetch_on_bottom: bool, segment: usize, edge: SegmentEdge) -> EdgeAction {
    if fetch_on_bottom {
        match edge {
            SegmentEdge::Bottom => EdgeAction::Fetch(segment),
            SegmentEdge::Leave => EdgeAction::Ignore,
        }
    } else {
        EdgeAction::Advance(segment + 1)
    }
}
