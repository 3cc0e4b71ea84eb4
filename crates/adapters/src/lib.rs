// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reporter implementations for the ping-pong coordinator

pub mod channel;
pub mod console;
pub mod traced;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use channel::{ChannelReporter, Output};
pub use console::ConsoleReporter;
pub use traced::TracedReporter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeReporter, ReportCall};
