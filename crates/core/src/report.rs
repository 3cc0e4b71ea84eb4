// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting interface between the coordinator and whoever displays its output

use std::sync::Arc;

/// Sink for lines produced by worker threads.
///
/// Both methods may be called concurrently from any thread. An implementation
/// that must deliver output on a particular thread does the marshalling
/// itself; callers never do. Neither method may panic.
pub trait Reporter: Send + Sync {
    /// Deliver one line of output.
    fn report(&self, message: &str);

    /// Record a diagnostic.
    fn log_error(&self, tag: &str, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn log_error(&self, tag: &str, message: &str) {
        (**self).log_error(tag, message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn log_error(&self, tag: &str, message: &str) {
        (**self).log_error(tag, message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn log_error(&self, tag: &str, message: &str) {
        (**self).log_error(tag, message)
    }
}
