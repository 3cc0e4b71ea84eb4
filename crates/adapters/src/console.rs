// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter that writes lines to a terminal or any other writer

use baton_core::Reporter;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Writes each reported line to `W`; diagnostics go to `tracing`.
#[derive(Debug)]
pub struct ConsoleReporter<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn report(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", message).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write report line");
        }
    }

    fn log_error(&self, tag: &str, message: &str) {
        tracing::error!(tag, "{}", message);
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
