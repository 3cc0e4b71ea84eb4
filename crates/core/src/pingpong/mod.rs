// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Strict two-thread alternation driven by a pair of semaphores

mod config;
mod coordinator;

pub use config::{ConfigError, PingPongConfig};
pub use coordinator::{PingPong, PlayError, PlaySummary};
