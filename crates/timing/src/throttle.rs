//! Throttling
//!
//! A call runs immediately when nothing has run yet, or when at least the
//! configured delay has passed since the last run. Calls inside the window
//! are dropped, not queued.

use crate::Callback;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// Throttled callable
///
/// Cloning yields another handle sharing the same last-run time.
pub struct Throttler<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    delay: Duration,
    callback: Callback<A>,
    last_run: Mutex<Option<Instant>>,
}

impl<A> Throttler<A> {
    /// Create a throttler; no runtime is needed
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                delay,
                callback: Arc::new(callback),
                last_run: Mutex::new(None),
            }),
        }
    }

    /// Run the callback unless the window is still open. Returns true if it ran.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut last_run = self.inner.last_run.lock();
            if let Some(previous) = *last_run {
                let elapsed = now.saturating_duration_since(previous);
                if elapsed < self.inner.delay {
                    trace!("Throttle: dropped call ({:?} since last run)", elapsed);
                    return false;
                }
            }
            *last_run = Some(now);
        }

        (self.inner.callback)(args);
        true
    }

    /// Forget the last run so the next call executes immediately
    pub fn reset(&self) {
        *self.inner.last_run.lock() = None;
    }

    /// Time left before a call would run again (zero when open)
    pub fn remaining(&self) -> Duration {
        match *self.inner.last_run.lock() {
            Some(previous) => self
                .inner
                .delay
                .saturating_sub(Instant::now().saturating_duration_since(previous)),
            None => Duration::ZERO,
        }
    }

    /// Configured interval
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

impl<A> Clone for Throttler<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> std::fmt::Debug for Throttler<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttler")
            .field("delay", &self.inner.delay)
            .field("last_run", &*self.inner.last_run.lock())
            .finish()
    }
}
