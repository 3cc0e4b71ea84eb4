// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot completion barrier
//!
//! Counts down from a fixed number of expected completions. Once the count
//! reaches zero it stays there and every current and future `wait()` returns.

use super::error::SyncError;
use std::sync::{Condvar, Mutex, MutexGuard};

const PRIMITIVE: &str = "barrier";

#[derive(Debug)]
pub struct CompletionBarrier {
    remaining: Mutex<u32>,
    opened: Condvar,
}

impl CompletionBarrier {
    /// A barrier that opens after `count` decrements. A count of zero is
    /// already open.
    pub fn new(count: u32) -> Self {
        Self {
            remaining: Mutex::new(count),
            opened: Condvar::new(),
        }
    }

    /// Record one completion. Extra decrements after zero are ignored.
    pub fn decrement(&self) -> Result<(), SyncError> {
        let mut remaining = self.lock()?;
        if *remaining == 0 {
            tracing::trace!("barrier already open, decrement ignored");
            return Ok(());
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.opened.notify_all();
        }
        Ok(())
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) -> Result<(), SyncError> {
        let remaining = self.lock()?;
        let _open = self
            .opened
            .wait_while(remaining, |remaining| *remaining > 0)
            .map_err(|_| SyncError::poisoned(PRIMITIVE))?;
        Ok(())
    }

    /// Snapshot of the completions still outstanding.
    pub fn remaining(&self) -> Result<u32, SyncError> {
        Ok(*self.lock()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, u32>, SyncError> {
        self.remaining
            .lock()
            .map_err(|_| SyncError::poisoned(PRIMITIVE))
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
