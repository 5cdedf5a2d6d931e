//! Cooperative cancellation for long-running assignment runs.
//!
//! The engine never performs I/O and has no suspension points, so there is
//! nothing to `select!` against. Cancellation is instead a flag the caller
//! can flip from another thread; the engine polls it between rebalance
//! passes in the matcher and once per host during endpoint expansion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply-clonable handle used to request cancellation of an in-flight
/// [`crate::assign_with`] call from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns `true` if [`Self::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
