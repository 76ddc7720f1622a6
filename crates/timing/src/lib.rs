//! Call-rate limiting for handy
//!
//! This crate provides:
//! - `Debouncer`: run only the last call of a burst, once the burst goes quiet
//! - `Throttler`: run at most one call per interval, dropping the rest
//!
//! Both wrap a callback and are cheap to clone; clones share one timer state.

pub mod debounce;
pub mod throttle;

use std::sync::Arc;

// Re-exports
pub use debounce::Debouncer;
pub use throttle::Throttler;

/// Shared callback type
pub(crate) type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Errors from timing wrappers
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    /// Debouncing schedules tasks and needs a tokio runtime
    #[error("No tokio runtime available: debounce must be created inside a runtime")]
    NoRuntime,
}

/// Result type for timing operations
pub type Result<T> = std::result::Result<T, TimingError>;
