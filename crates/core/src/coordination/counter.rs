// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 64-bit counter guarded by a readers-writer lock
//!
//! Reads share the lock; every read-modify-write holds it exclusively, so a
//! get-and-mutate pair can never interleave with another mutation.

use super::error::SyncError;
use std::sync::RwLock;

const PRIMITIVE: &str = "counter";

/// Lock-protected signed counter. Arithmetic wraps on overflow.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: RwLock<i64>,
}

impl AtomicCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> Result<i64, SyncError> {
        self.value
            .read()
            .map(|value| *value)
            .map_err(|_| SyncError::poisoned(PRIMITIVE))
    }

    /// Returns the value after incrementing.
    pub fn increment_and_get(&self) -> Result<i64, SyncError> {
        self.update(1).map(|(_, new)| new)
    }

    /// Returns the value after decrementing.
    pub fn decrement_and_get(&self) -> Result<i64, SyncError> {
        self.update(-1).map(|(_, new)| new)
    }

    /// Returns the value before incrementing.
    pub fn get_and_increment(&self) -> Result<i64, SyncError> {
        self.update(1).map(|(old, _)| old)
    }

    /// Returns the value before decrementing.
    pub fn get_and_decrement(&self) -> Result<i64, SyncError> {
        self.update(-1).map(|(old, _)| old)
    }

    fn update(&self, delta: i64) -> Result<(i64, i64), SyncError> {
        let mut value = self
            .value
            .write()
            .map_err(|_| SyncError::poisoned(PRIMITIVE))?;
        let old = *value;
        *value = old.wrapping_add(delta);
        Ok((old, *value))
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
