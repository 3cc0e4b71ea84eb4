// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake reporter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use baton_core::Reporter;
use std::sync::{Arc, Mutex};

/// Recorded reporter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCall {
    Report { message: String },
    LogError { tag: String, message: String },
}

/// Fake reporter that records every call. Clones share the recording.
#[derive(Clone, Default)]
pub struct FakeReporter {
    calls: Arc<Mutex<Vec<ReportCall>>>,
}

impl FakeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls in order
    pub fn calls(&self) -> Vec<ReportCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get the reported lines only
    pub fn lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ReportCall::Report { message } => Some(message),
                ReportCall::LogError { .. } => None,
            })
            .collect()
    }

    /// Get the logged errors only, as (tag, message)
    pub fn errors(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ReportCall::LogError { tag, message } => Some((tag, message)),
                ReportCall::Report { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: ReportCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl Reporter for FakeReporter {
    fn report(&self, message: &str) {
        self.record(ReportCall::Report {
            message: message.to_string(),
        });
    }

    fn log_error(&self, tag: &str, message: &str) {
        self.record(ReportCall::LogError {
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
