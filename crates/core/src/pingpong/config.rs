// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ping-pong run configuration
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! rounds = 3
//! fair = false
//! ping_label = "Tick"
//! pong_label = "Tock"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a [`PingPongConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rounds must be greater than zero")]
    InvalidRounds,
}

/// Settings for one alternation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PingPongConfig {
    /// Turns taken by each worker
    pub rounds: u32,
    /// FIFO fairness for both semaphores
    pub fair: bool,
    /// Printed by the worker that moves first
    pub ping_label: String,
    /// Printed by the worker that answers
    pub pong_label: String,
    pub start_message: String,
    pub finish_message: String,
}

impl Default for PingPongConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            fair: true,
            ping_label: "Ping!".to_string(),
            pong_label: "Pong!".to_string(),
            start_message: "Ready...Set...Go!".to_string(),
            finish_message: "Done!".to_string(),
        }
    }
}

impl PingPongConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded ping-pong config");
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidRounds);
        }
        Ok(())
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_fair(mut self, fair: bool) -> Self {
        self.fair = fair;
        self
    }

    pub fn with_labels(mut self, ping: impl Into<String>, pong: impl Into<String>) -> Self {
        self.ping_label = ping.into();
        self.pong_label = pong.into();
        self
    }

    pub fn with_messages(mut self, start: impl Into<String>, finish: impl Into<String>) -> Self {
        self.start_message = start.into();
        self.finish_message = finish.into();
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
