//! Trailing-edge debounce for search submissions.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Callback invoked when the quiet period elapses.
pub type FireFn = Arc<dyn Fn(String) + Send + Sync>;

/// Single-slot cancel-and-reschedule timer.
///
/// Every [`schedule`](Debouncer::schedule) call aborts any outstanding
/// timer and starts a fresh one, so within a burst only the final call
/// fires — with the arguments of that final call. The slot is owned by
/// the UI session that constructs it, not shared globally.
pub struct Debouncer {
    delay: Duration,
    runtime: tokio::runtime::Handle,
    pending: Option<JoinHandle<()>>,
    on_fire: FireFn,
}

impl Debouncer {
    pub fn new(delay: Duration, runtime: tokio::runtime::Handle, on_fire: FireFn) -> Self {
        Self {
            delay,
            runtime,
            pending: None,
            on_fire,
        }
    }

    /// Schedule `query` to fire after the quiet period.
    ///
    /// Cancels whatever was pending. A timer that has already fired is
    /// past aborting, so a burst that straddles the window boundary can
    /// legitimately fire twice — once per window.
    pub fn schedule(&mut self, query: String) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let delay = self.delay;
        let on_fire = Arc::clone(&self.on_fire);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(query);
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
