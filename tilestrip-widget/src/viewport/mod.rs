//! Viewport hosts
//!
//! A [`ViewportHost`] is whatever owns the real container: it reports the
//! rendered width, notifies listeners when the viewport is resized, and runs
//! one-shot deferred measurements. The carousel controller only talks to the
//! host through this trait.

mod headless;
mod tokio_host;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub use headless::HeadlessViewport;
pub use tokio_host::TokioViewport;

/// Called with the new container width after every resize.
pub type ResizeListener = Rc<dyn Fn(f32)>;

/// Called once with the container width measured when the deferral fires.
pub type DeferredMeasure = Box<dyn FnOnce(f32)>;

/// Source of container measurements and resize notifications.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportHost {
    /// Current rendered width of the carousel container (px).
    fn measure(&self) -> f32;

    /// Register `listener` for resize notifications. The listener stays
    /// registered exactly as long as the returned subscription is alive.
    fn subscribe_resize(&self, listener: ResizeListener) -> ResizeSubscription;

    /// Measure the container after `delay` and hand the width to `callback`.
    /// A zero delay still defers to a later turn of the host's event loop.
    fn defer_measure(&self, delay: Duration, callback: DeferredMeasure);
}

/// RAII guard for a resize listener registration.
///
/// Dropping the guard (or calling [`ResizeSubscription::release`]) removes
/// the listener from its host.
#[must_use = "dropping the subscription immediately removes the listener"]
pub struct ResizeSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    /// Guard that runs `release` once when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release, for hosts that never fire resizes.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Whether dropping this guard still has a registration to remove.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}
