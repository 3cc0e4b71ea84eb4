// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter that marshals output to a single owning task
//!
//! Worker threads only enqueue; whoever holds the receiver decides where and
//! on which thread the output is rendered.

use baton_core::Reporter;
use tokio::sync::mpsc;

/// One reporter call, as seen by the receiving side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Line(String),
    Error { tag: String, message: String },
}

impl Output {
    /// Replay this call against another reporter, typically on the owning thread.
    pub fn deliver(self, target: &impl Reporter) {
        match self {
            Output::Line(message) => target.report(&message),
            Output::Error { tag, message } => target.log_error(&tag, &message),
        }
    }
}

/// Sending half of a reporter channel. Clones feed the same receiver.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<Output>,
}

impl ChannelReporter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Output>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, output: Output) {
        if let Err(e) = self.tx.send(output) {
            tracing::warn!(output = ?e.0, "output receiver closed, dropping");
        }
    }
}

impl Reporter for ChannelReporter {
    fn report(&self, message: &str) {
        self.send(Output::Line(message.to_string()));
    }

    fn log_error(&self, tag: &str, message: &str) {
        self.send(Output::Error {
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
