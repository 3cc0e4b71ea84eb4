// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors with context and suggestions.
//!
//! Each error explains what went wrong, why it might have happened and how to
//! fix it, so command failures read as instructions rather than stack traces.

use baton_core::ConfigError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures the commands report.
impl CliError {
    /// A ping-pong config file could not be loaded.
    pub fn config_unreadable(path: &Path, err: ConfigError) -> Self {
        let error = CliError::new(format!("Cannot use config file '{}'", path.display()))
            .with_context(err.to_string());
        let error = match &err {
            ConfigError::Io { .. } => error
                .with_suggestion("Check the path passed to --config")
                .with_suggestion("Omit --config to play with the built-in defaults"),
            ConfigError::Parse(_) => error
                .with_suggestion(
                    "Allowed keys: rounds, fair, ping_label, pong_label, start_message, finish_message",
                ),
            ConfigError::InvalidRounds => error.with_suggestion("Set rounds = 1 or more"),
        };
        error.with_source(err)
    }

    /// The effective settings ask for zero rounds.
    pub fn invalid_rounds() -> Self {
        CliError::new("rounds must be greater than zero")
            .with_context("Each worker needs at least one turn")
            .with_suggestion("Pass --rounds 1 or more")
    }

    /// A counting run was asked to use no threads.
    pub fn no_threads() -> Self {
        CliError::new("at least one counting thread is required")
            .with_suggestion("Pass --threads 1 or more")
    }
}
