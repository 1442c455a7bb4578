//! Adapter utilities for the `multilist` crate.
//!
//! The `multilist` crate is UI-agnostic and focuses on the core windowing and
//! dispatch state. This crate provides small, framework-neutral helpers
//! commonly needed by adapters:
//!
//! - A [`Controller`] wiring UI scroll/resize events and per-frame ticks
//! - Tween-based animated `scroll_to`
//! - A narrow imperative [`ScrollHandle`] for external callers (`std` only)
//! - Segment anchoring across data growth (prepend without visual jumps)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
#[cfg(feature = "std")]
mod handle;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{SegmentAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{Controller, ScrollToOptions};
#[cfg(feature = "std")]
pub use handle::{ScrollHandle, SharedController};
pub use tween::{Easing, ScrollTween};
