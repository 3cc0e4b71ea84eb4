// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread coordination primitives built from locks and condition variables
//!
//! This module provides:
//! - **Semaphore** - Counting semaphore with optional FIFO fairness
//! - **CancellationToken** - Cancels interruptible semaphore waits
//! - **AtomicCounter** - Readers-writer locked 64-bit counter
//! - **CompletionBarrier** - One-shot countdown gate

pub mod barrier;
pub mod cancel;
pub mod counter;
pub mod error;
pub mod semaphore;

pub use barrier::CompletionBarrier;
pub use cancel::CancellationToken;
pub use counter::AtomicCounter;
pub use error::SyncError;
pub use semaphore::Semaphore;
