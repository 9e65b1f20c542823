//! Viewport host driven by a tokio `LocalSet`
//!
//! Widths are published on a `watch` channel by whoever observes the real
//! window. Resize listening and deferred measurements run as local tasks, so
//! every method that spawns must be called from inside a `LocalSet`.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task;

use super::{DeferredMeasure, ResizeListener, ResizeSubscription, ViewportHost};

/// Viewport host fed by a `watch::Sender<f32>`.
#[derive(Debug, Clone)]
pub struct TokioViewport {
    width: watch::Receiver<f32>,
}

impl TokioViewport {
    /// Create a host and the sender that publishes container widths to it.
    pub fn channel(initial_width: f32) -> (watch::Sender<f32>, Self) {
        let (tx, rx) = watch::channel(initial_width);
        (tx, Self { width: rx })
    }

    pub fn from_receiver(width: watch::Receiver<f32>) -> Self {
        Self { width }
    }
}

impl ViewportHost for TokioViewport {
    fn measure(&self) -> f32 {
        *self.width.borrow()
    }

    fn subscribe_resize(&self, listener: ResizeListener) -> ResizeSubscription {
        let mut width = self.width.clone();
        // Only widths published after subscribing count as resizes.
        width.mark_unchanged();

        let handle = task::spawn_local(async move {
            while width.changed().await.is_ok() {
                let current = *width.borrow_and_update();
                listener(current);
            }
            log::debug!("viewport width sender closed, resize listener done");
        });
        ResizeSubscription::new(move || handle.abort())
    }

    fn defer_measure(&self, delay: Duration, callback: DeferredMeasure) {
        let width = self.width.clone();
        task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            let current = *width.borrow();
            callback(current);
        });
    }
}
