//! Debouncing
//!
//! Each call cancels the pending one and reschedules the callback after the
//! configured delay, so a burst of calls runs the callback once, with the
//! arguments of the last call.

use crate::{Callback, Result, TimingError};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Debounced callable
///
/// Cloning yields another handle to the same timer. When the last handle is
/// dropped, a pending call is cancelled.
pub struct Debouncer<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    delay: Duration,
    callback: Callback<A>,
    runtime: Handle,
    state: Mutex<State<A>>,
}

struct State<A> {
    /// Arguments of the call waiting to fire
    args: Option<A>,
    /// Timer task for the pending call
    task: Option<JoinHandle<()>>,
    /// Bumped on every call/cancel/flush; a timer only fires for its own generation
    generation: u64,
}

impl<A> State<A> {
    /// Abort the pending timer and invalidate it
    fn clear_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer on the current tokio runtime
    pub fn new<F>(delay: Duration, callback: F) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| TimingError::NoRuntime)?;
        Ok(Self::with_handle(runtime, delay, callback))
    }

    /// Create a debouncer that schedules its timer on `runtime`
    pub fn with_handle<F>(runtime: Handle, delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                delay,
                callback: Arc::new(callback),
                runtime,
                state: Mutex::new(State {
                    args: None,
                    task: None,
                    generation: 0,
                }),
            }),
        }
    }

    /// Schedule the callback with `args`, replacing any pending call
    pub fn call(&self, args: A) {
        let mut state = self.inner.state.lock();
        if state.task.is_some() {
            trace!("Debounce: cancelling pending call");
        }
        state.clear_task();
        state.args = Some(args);

        let generation = state.generation;
        let weak = Arc::downgrade(&self.inner);
        let delay = self.inner.delay;

        state.task = Some(self.inner.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            fire(weak, generation);
        }));

        debug!("Debounce: scheduled call in {:?}", delay);
    }

    /// Drop the pending call, if any. Returns true if one was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.inner.state.lock();
        state.clear_task();
        let was_pending = state.args.take().is_some();
        if was_pending {
            debug!("Debounce: pending call cancelled");
        }
        was_pending
    }

    /// Run the pending call now instead of waiting. Returns true if one ran.
    pub fn flush(&self) -> bool {
        let args = {
            let mut state = self.inner.state.lock();
            state.clear_task();
            state.args.take()
        };

        match args {
            Some(args) => {
                debug!("Debounce: flushing pending call");
                (self.inner.callback)(args);
                true
            }
            None => false,
        }
    }

    /// Whether a call is waiting for its delay to elapse
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().args.is_some()
    }

    /// Configured quiet period
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

/// Timer expiry: run the callback if this timer is still the current one
fn fire<A>(weak: Weak<Inner<A>>, generation: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let args = {
        let mut state = inner.state.lock();
        if state.generation != generation {
            // Superseded while waking up
            return;
        }
        state.task = None;
        state.args.take()
    };

    if let Some(args) = args {
        debug!("Debounce: quiet period elapsed, running callback");
        (inner.callback)(args);
    }
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> Drop for Inner<A> {
    fn drop(&mut self) {
        if let Some(task) = self.state.get_mut().task.take() {
            trace!("Debounce: dropped with a pending call");
            task.abort();
        }
    }
}

impl<A> std::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.inner.delay)
            .finish_non_exhaustive()
    }
}
