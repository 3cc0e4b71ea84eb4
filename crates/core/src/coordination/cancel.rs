// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for blocking waits
//!
//! Threads cannot be interrupted from the outside, so interruptible waits take
//! a [`CancellationToken`] instead. Cancelling the token wakes every wait that
//! is currently blocked under it and makes every later wait fail immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Hook a blocked wait registers so that `cancel()` can wake it.
pub(crate) trait Wake: Send + Sync {
    fn wake(&self);
}

/// Shared cancellation flag. Clones observe and trigger the same cancellation.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: AtomicBool,
    blocked: Mutex<Vec<Arc<dyn Wake>>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every wait blocked under this token, now and in the future.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);

        // Take the hooks before waking so the token lock is never held while
        // a primitive's lock is being acquired.
        let blocked = std::mem::take(
            &mut *self
                .inner
                .blocked
                .lock()
                .unwrap_or_else(|e| e.into_inner()),
        );
        tracing::trace!(waiters = blocked.len(), "cancellation requested");
        for hook in blocked {
            hook.wake();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Must be called before the waiter's first cancellation check.
    pub(crate) fn register(&self, hook: Arc<dyn Wake>) {
        self.inner
            .blocked
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(hook);
    }

    pub(crate) fn unregister(&self, hook: &Arc<dyn Wake>) {
        let mut blocked = self
            .inner
            .blocked
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        if let Some(pos) = blocked.iter().position(|h| Arc::ptr_eq(h, hook)) {
            blocked.swap_remove(pos);
        }
    }

    #[cfg(test)]
    pub(crate) fn registered(&self) -> usize {
        self.inner
            .blocked
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
