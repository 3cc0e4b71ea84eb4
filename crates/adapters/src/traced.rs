// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced reporter wrapper for consistent observability

use baton_core::Reporter;
use std::sync::atomic::{AtomicU64, Ordering};

/// Wrapper that adds tracing to any Reporter
#[derive(Debug)]
pub struct TracedReporter<R> {
    inner: R,
    reported: AtomicU64,
    errors: AtomicU64,
}

impl<R> TracedReporter<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            reported: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Lines passed through so far
    pub fn reported(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }

    /// Errors passed through so far
    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}

impl<R: Reporter> Reporter for TracedReporter<R> {
    fn report(&self, message: &str) {
        let seq = self.reported.fetch_add(1, Ordering::Relaxed) + 1;
        let thread = std::thread::current();
        let span = tracing::debug_span!("reporter.report", seq, thread = thread.name());
        let _guard = span.enter();

        tracing::trace!(line = message, "reporting");
        self.inner.report(message);
    }

    fn log_error(&self, tag: &str, message: &str) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        let span = tracing::info_span!("reporter.log_error", tag);
        let _guard = span.enter();

        tracing::error!(detail = message, "worker error");
        self.inner.log_error(tag, message);
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
