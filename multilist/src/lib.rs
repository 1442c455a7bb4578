//! A headless multi-segment virtualization engine.
//!
//! One shared scroll offset drives several independently-windowed segments
//! (logical lists) composited into a single viewport. The engine partitions
//! the global offset into per-segment visible windows, decides which items of
//! which segment are materialized at any position, tracks the active segment
//! used for incremental-fetch dispatch, and keeps the number of materialized
//! items proportional to the viewport rather than to total data size.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the measured viewport extent (windows are empty until it does)
//! - scroll offsets, with `now_ms` timestamps for fetch throttling
//! - rendering for the materialized items it queries back out
//!
//! For adapter-level utilities (animated scrolling, imperative handles,
//! anchoring), see the `multilist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dispatch;
mod multilist;
mod options;
mod segment;
mod state;
mod throttle;
mod types;
mod window;


pub use dispatch::{EdgeAction, edge_action};
pub use multilist::MultiList;
pub use options::{FetchMoreCallback, MultiListOptions, OnChangeCallback};
pub use segment::{DEFAULT_ITEM_SIZE, SegmentOptions};
pub use state::{DispatchState, FrameState, ScrollState, ViewportState};
pub use throttle::Throttle;
pub use types::{ScrollDirection, SegmentEdge, SegmentWindow, WindowItem, WindowRange};
pub use window::{UniformWindow, WindowEngine, WindowParams};
