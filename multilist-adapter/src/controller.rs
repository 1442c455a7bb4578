use multilist::{MultiList, MultiListOptions};

use crate::tween::{Easing, ScrollTween};

/// Options for [`Controller::scroll_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub animated: bool,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollToOptions {
    pub fn immediate() -> Self {
        Self {
            animated: false,
            duration_ms: 0,
            easing: Easing::default(),
        }
    }

    pub fn animated(duration_ms: u64) -> Self {
        Self {
            animated: true,
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for ScrollToOptions {
    fn default() -> Self {
        Self::immediate()
    }
}

/// A framework-neutral controller wrapping a [`MultiList`].
///
/// Adapters drive it by calling:
/// - [`Controller::on_viewport_extent`] / [`Controller::on_scroll`] when UI
///   events occur
/// - [`Controller::tick`] each frame (for animated scrolling)
///
/// Animated scrolls are fed back through the engine as ordinary scroll
/// events, so edge signals and fetch dispatch behave the same whether the
/// user or a tween moves the viewport.
#[derive(Clone, Debug)]
pub struct Controller {
    ml: MultiList,
    tween: Option<ScrollTween>,
}

impl Controller {
    pub fn new(options: MultiListOptions) -> Self {
        Self {
            ml: MultiList::new(options),
            tween: None,
        }
    }

    pub fn from_multilist(ml: MultiList) -> Self {
        Self { ml, tween: None }
    }

    pub fn multilist(&self) -> &MultiList {
        &self.ml
    }

    pub fn multilist_mut(&mut self) -> &mut MultiList {
        &mut self.ml
    }

    pub fn into_multilist(self) -> MultiList {
        self.ml
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the UI reports a (re)measured viewport extent.
    pub fn on_viewport_extent(&mut self, extent: u32) {
        self.ml.measure(extent);
    }

    /// Call this when the UI reports a scroll offset change (wheel/drag).
    ///
    /// User input wins: this cancels any active tween.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.cancel_animation();
        self.ml.on_scroll(offset, now_ms);
    }

    /// Advances an active tween, feeding the sampled offset through the
    /// engine. Returns the committed offset while animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        self.ml.on_scroll(offset, now_ms);
        if tween.done(now_ms) {
            self.tween = None;
        }
        Some(self.ml.scroll_offset())
    }

    /// Moves the scroll position to `offset`, clamped to the scrollable
    /// extent; animated when requested. Returns the committed (or targeted)
    /// offset.
    ///
    /// Before the viewport is measured the raw target is deferred to the
    /// engine's pending-scroll path and applied when measurement lands.
    pub fn scroll_to(&mut self, offset: u64, options: ScrollToOptions, now_ms: u64) -> u64 {
        if !self.ml.measured() {
            self.tween = None;
            self.ml.scroll_to(offset);
            return offset;
        }
        let target = self.ml.clamp_scroll_offset(offset);
        if options.animated && options.duration_ms > 0 {
            match &mut self.tween {
                Some(tween) => tween.retarget(now_ms, target, options.duration_ms),
                None => {
                    self.tween = Some(ScrollTween::new(
                        self.ml.scroll_offset(),
                        target,
                        now_ms,
                        options.duration_ms,
                        options.easing,
                    ));
                }
            }
        } else {
            self.tween = None;
            self.ml.scroll_to(target);
        }
        target
    }
}
