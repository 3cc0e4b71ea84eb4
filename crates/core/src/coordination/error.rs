// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordination primitives

use thiserror::Error;

/// Errors returned by semaphores, counters and barriers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// An interruptible wait was cancelled through its token.
    /// The primitive is left exactly as it was before the call.
    #[error("operation cancelled while waiting")]
    Cancelled,
    /// The internal lock was poisoned by a panic while held.
    #[error("{primitive} lock poisoned")]
    Poisoned { primitive: &'static str },
}

impl SyncError {
    pub(crate) fn poisoned(primitive: &'static str) -> Self {
        SyncError::Poisoned { primitive }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SyncError::Cancelled)
    }
}
