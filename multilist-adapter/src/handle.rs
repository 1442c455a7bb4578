use std::sync::{Arc, Mutex, Weak};

use multilist::MultiListOptions;

use crate::controller::{Controller, ScrollToOptions};

/// Shared ownership of a [`Controller`] that can hand out narrow imperative
/// handles to external callers.
///
/// The handle exposes exactly one command (`scroll_to`); the full state stays
/// behind [`SharedController::with`].
pub struct SharedController {
    inner: Arc<Mutex<Controller>>,
}

impl SharedController {
    pub fn new(options: MultiListOptions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Controller::new(options))),
        }
    }

    pub fn from_controller(controller: Controller) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// A detachable scroll command handle.
    pub fn handle(&self) -> ScrollHandle {
        ScrollHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Runs `f` against the controller. Returns `None` if the lock is
    /// poisoned.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let mut guard = self.inner.lock().ok()?;
        Some(f(&mut guard))
    }
}

impl core::fmt::Debug for SharedController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedController").finish_non_exhaustive()
    }
}

/// The narrow imperative interface handed to external callers: scroll
/// control and nothing else.
///
/// Best-effort by contract: a handle whose controller is gone, or whose lock
/// is poisoned, silently does nothing.
#[derive(Clone)]
pub struct ScrollHandle {
    inner: Weak<Mutex<Controller>>,
}

impl ScrollHandle {
    pub fn scroll_to(&self, offset: u64, options: ScrollToOptions, now_ms: u64) {
        let Some(strong) = self.inner.upgrade() else {
            return;
        };
        let Ok(mut controller) = strong.lock() else {
            return;
        };
        controller.scroll_to(offset, options, now_ms);
    }

    /// Whether the controller behind this handle is still alive.
    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl core::fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
