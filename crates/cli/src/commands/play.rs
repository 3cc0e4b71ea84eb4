// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton play` - Two threads taking strict turns
//!
//! The workers report through a channel; this task owns stdout and prints each
//! line as it arrives, so no worker thread ever writes to the console.

use crate::error::CliError;
use anyhow::Result;
use baton_adapters::{ChannelReporter, ConsoleReporter, TracedReporter};
use baton_core::{PingPong, PingPongConfig};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Turns taken by each worker
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Hand the turn over in strict arrival order
    #[arg(long, conflicts_with = "unfair")]
    pub fair: bool,

    /// Let whichever waiter wakes first take the turn
    #[arg(long)]
    pub unfair: bool,

    /// Label printed by the worker that moves first
    #[arg(long)]
    pub ping: Option<String>,

    /// Label printed by the worker that answers
    #[arg(long)]
    pub pong: Option<String>,

    /// Line printed before the first turn
    #[arg(long)]
    pub start: Option<String>,

    /// Line printed after both workers finish
    #[arg(long)]
    pub finish: Option<String>,

    /// TOML file with settings; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print turn count and elapsed time to stderr when done
    #[arg(long)]
    pub summary: bool,
}

impl PlayArgs {
    /// Effective settings: file (or defaults), then flags.
    pub fn resolve(&self) -> Result<PingPongConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => PingPongConfig::load(path)
                .map_err(|e| CliError::config_unreadable(path, e))?,
            None => PingPongConfig::default(),
        };

        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if self.fair {
            config.fair = true;
        }
        if self.unfair {
            config.fair = false;
        }
        if let Some(ping) = &self.ping {
            config.ping_label = ping.clone();
        }
        if let Some(pong) = &self.pong {
            config.pong_label = pong.clone();
        }
        if let Some(start) = &self.start {
            config.start_message = start.clone();
        }
        if let Some(finish) = &self.finish {
            config.finish_message = finish.clone();
        }

        config.validate().map_err(|_| CliError::invalid_rounds())?;
        Ok(config)
    }
}

pub async fn play(args: PlayArgs) -> Result<()> {
    let config = args.resolve()?;
    tracing::debug!(?config, "resolved ping-pong settings");

    let (channel, mut rx) = ChannelReporter::new();
    let game = PingPong::new(config, TracedReporter::new(channel))?;

    // The reporter (and with it the sender) drops when the run ends, closing rx.
    let run = tokio::task::spawn_blocking(move || {
        let summary = game.play()?;
        Ok::<_, baton_core::PlayError>((summary, game.reporter().reported()))
    });

    let console = ConsoleReporter::stdout();
    while let Some(output) = rx.recv().await {
        output.deliver(&console);
    }

    let (summary, reported) = run.await??;
    if args.summary {
        eprintln!(
            "{} turns in {:.3}ms ({} lines)",
            summary.turns,
            summary.elapsed.as_secs_f64() * 1000.0,
            reported
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod tests;
