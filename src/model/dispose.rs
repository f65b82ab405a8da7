use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Cooperative cancellation token owned by a screen model.
///
/// Cloned into every task the model spawns. `cancel` flips the flag once
/// and wakes all waiters; tasks observe it at their next suspension point.
/// The token never un-cancels.
#[derive(Clone, Default)]
pub struct DisposeToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl DisposeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once the token is cancelled.
    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: cancel() between
        // the check and the await would otherwise find no subscribers and
        // the wakeup would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
