//! Trailing-edge debounce for async callers.
//!
//! Each call to [`Debouncer::call`] returns a future that resolves to the
//! value after the quiet period, unless another call arrives first. A newer
//! call cancels the pending one: its timer is dropped and its future resolves
//! to `None` right away. Work started after a future resolved is never
//! touched, only the scheduling is cancelled.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<oneshot::Sender<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, cancelling whatever was scheduled before.
    pub fn call<T>(&mut self, value: T) -> impl Future<Output = Option<T>> + Send + 'static
    where
        T: Send + 'static,
    {
        self.cancel();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.pending = Some(cancel_tx);
        let delay = self.delay;

        async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => Some(value),
                _ = cancel_rx => None,
            }
        }
    }

    /// Cancel the pending call, if any.
    fn cancel(&mut self) {
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::{sleep, Instant};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let start = Instant::now();

        let first = tokio::spawn(debouncer.call("first"));
        sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn(debouncer.call("second"));

        assert_eq!(first.await.unwrap(), None);
        assert_eq!(second.await.unwrap(), Some("second"));
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_call_resolves_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let start = Instant::now();

        let first = tokio::spawn(debouncer.call(1));
        tokio::task::yield_now().await;
        let _second = debouncer.call(2);

        assert_eq!(first.await.unwrap(), None);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_spaced_beyond_window_all_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        assert_eq!(debouncer.call("a").await, Some("a"));
        assert_eq!(debouncer.call("b").await, Some("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let pending = debouncer.call("a");
        debouncer.cancel();
        assert_eq!(pending.await, None);
    }
}
