// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! baton-core: hand-rolled thread coordination
//!
//! This crate provides:
//! - Blocking primitives built from a mutex and a condition variable
//! - The reporting interface workers write their output through
//! - A ping-pong coordinator that forces two threads into strict alternation

pub mod coordination;
pub mod pingpong;
pub mod report;

pub use coordination::{AtomicCounter, CancellationToken, CompletionBarrier, Semaphore, SyncError};
pub use pingpong::{ConfigError, PingPong, PingPongConfig, PlayError, PlaySummary};
pub use report::Reporter;
