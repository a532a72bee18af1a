use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces a burst of input changes into a single trigger: every
/// [`notify`](DebounceGate::notify) restarts the timer, and the `fire`
/// closure runs only once the inputs have been quiet for the whole period.
/// Trailing edge only; there is no immediate leading-edge invocation.
///
/// The closure must read its inputs when it runs, so the request is built
/// from the state at fire time rather than at notify time.
#[derive(Debug)]
pub struct DebounceGate {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebounceGate {
    pub fn new(quiet_period: Duration) -> DebounceGate {
        DebounceGate {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Restarts the quiet-period timer, discarding any not-yet-fired trigger.
    pub fn notify<F>(&mut self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            fire();
        }));
    }

    /// Drops the pending trigger, if any. After this returns no previously
    /// scheduled `fire` will run.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DebounceGate {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const QUIET: Duration = Duration::from_millis(80);

    #[tokio::test]
    async fn test_burst_fires_exactly_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut gate = DebounceGate::new(QUIET);

        for _ in 0..5 {
            let fired = Arc::clone(&fired);
            gate.notify(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(15)).await;
        }

        tokio::time::sleep(QUIET * 3).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fire_reads_state_at_fire_time() {
        let value = Arc::new(AtomicUsize::new(1));
        let observed = Arc::new(AtomicUsize::new(0));
        let mut gate = DebounceGate::new(QUIET);

        {
            let value = Arc::clone(&value);
            let observed = Arc::clone(&observed);
            gate.notify(move || {
                observed.store(value.load(Ordering::SeqCst), Ordering::SeqCst);
            });
        }

        // Mutation lands after notify but before the quiet period elapses.
        value.store(42, Ordering::SeqCst);

        tokio::time::sleep(QUIET * 3).await;
        assert_eq!(observed.load(Ordering::SeqCst), 42);
    }

    #[tokio::test]
    async fn test_cancel_prevents_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut gate = DebounceGate::new(QUIET);

        let counter = Arc::clone(&fired);
        gate.notify(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        gate.cancel();

        tokio::time::sleep(QUIET * 3).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_drop_prevents_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let mut gate = DebounceGate::new(QUIET);
            let counter = Arc::clone(&fired);
            gate.notify(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(QUIET * 3).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_separate_bursts_fire_separately() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut gate = DebounceGate::new(QUIET);

        for _ in 0..2 {
            let counter = Arc::clone(&fired);
            gate.notify(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(QUIET * 3).await;
        }

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
