//! Manually driven viewport host

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::{DeferredMeasure, ResizeListener, ResizeSubscription, ViewportHost};

#[derive(Default)]
struct Inner {
    width: Cell<f32>,
    next_listener_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ResizeListener)>>,
    deferred: RefCell<Vec<(Duration, DeferredMeasure)>>,
}

/// Viewport host without an event loop of its own.
///
/// The embedder pushes widths with [`HeadlessViewport::resize`] and flushes
/// deferred measurements with [`HeadlessViewport::run_deferred`]. Clones
/// share the same viewport.
#[derive(Clone, Default)]
pub struct HeadlessViewport {
    inner: Rc<Inner>,
}

impl HeadlessViewport {
    pub fn new(width: f32) -> Self {
        let viewport = Self::default();
        viewport.inner.width.set(width);
        viewport
    }

    pub fn width(&self) -> f32 {
        self.inner.width.get()
    }

    /// Change the width and notify every registered listener.
    pub fn resize(&self, width: f32) {
        self.inner.width.set(width);
        // Snapshot so listeners may subscribe or unsubscribe while notified.
        let listeners: Vec<ResizeListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(width);
        }
    }

    /// Change the width without a resize event, like a scrollbar appearing
    /// while the host settles its layout.
    pub fn set_width_silently(&self, width: f32) {
        self.inner.width.set(width);
    }

    /// Run every pending deferred measurement against the current width.
    /// Returns how many ran.
    pub fn run_deferred(&self) -> usize {
        let pending = std::mem::take(&mut *self.inner.deferred.borrow_mut());
        let count = pending.len();
        for (_, callback) in pending {
            callback(self.width());
        }
        count
    }

    pub fn pending_deferred(&self) -> usize {
        self.inner.deferred.borrow().len()
    }

    /// Delays requested by the pending deferred measurements, oldest first.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.inner
            .deferred
            .borrow()
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ViewportHost for HeadlessViewport {
    fn measure(&self) -> f32 {
        self.width()
    }

    fn subscribe_resize(&self, listener: ResizeListener) -> ResizeSubscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));

        let inner: Weak<Inner> = Rc::downgrade(&self.inner);
        ResizeSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .borrow_mut()
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    fn defer_measure(&self, delay: Duration, callback: DeferredMeasure) {
        self.inner.deferred.borrow_mut().push((delay, callback));
    }
}

impl fmt::Debug for HeadlessViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessViewport")
            .field("width", &self.width())
            .field("listeners", &self.listener_count())
            .field("pending_deferred", &self.pending_deferred())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_receive_resizes_until_released() {
        let viewport = HeadlessViewport::new(800.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = viewport
            .subscribe_resize(Rc::new(move |w| sink.borrow_mut().push(w)));

        viewport.resize(900.0);
        assert_eq!(viewport.listener_count(), 1);

        drop(subscription);
        viewport.resize(1000.0);
        assert_eq!(viewport.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![900.0]);
    }

    #[test]
    fn deferred_measure_sees_settled_width() {
        let viewport = HeadlessViewport::new(1000.0);
        let measured = Rc::new(Cell::new(0.0));
        let out = measured.clone();
        viewport.defer_measure(
            Duration::ZERO,
            Box::new(move |w| out.set(w)),
        );

        viewport.set_width_silently(985.0);
        assert_eq!(viewport.pending_deferred(), 1);
        assert_eq!(viewport.run_deferred(), 1);
        assert_eq!(measured.get(), 985.0);
        assert_eq!(viewport.run_deferred(), 0);
    }

    #[test]
    fn release_after_host_dropped_is_harmless() {
        let viewport = HeadlessViewport::new(500.0);
        let subscription = viewport.subscribe_resize(Rc::new(|_| {}));
        drop(viewport);
        subscription.release();
    }
}
