// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two workers passing a single turn back and forth
//!
//! The first worker's semaphore starts with one permit and the second's with
//! none. Each worker loops {acquire own, report, release partner}, so exactly
//! one permit circulates and the workers strictly alternate whatever order the
//! scheduler runs them in.

use super::config::{ConfigError, PingPongConfig};
use crate::coordination::{AtomicCounter, CompletionBarrier, Semaphore, SyncError};
use crate::report::Reporter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

const TAG: &str = "PingPong";

/// Errors that end a ping-pong run
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("coordination failed: {0}")]
    Sync(#[from] SyncError),
    #[error("failed to spawn worker {label:?}: {source}")]
    Spawn {
        label: String,
        #[source]
        source: std::io::Error,
    },
    #[error("worker {label:?} panicked")]
    WorkerPanicked { label: String },
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Turns taken by both workers together
    pub turns: u64,
    pub elapsed: Duration,
}

/// Ping-pong coordinator. Each call to [`PingPong::play`] is an independent run.
pub struct PingPong<R> {
    config: PingPongConfig,
    reporter: R,
}

/// State shared by both workers for one run
struct Run<'a, R> {
    reporter: &'a R,
    start_gate: &'a CompletionBarrier,
    finished: &'a CompletionBarrier,
    aborted: &'a AtomicBool,
    turns: &'a AtomicCounter,
}

struct Worker<'a> {
    label: &'a str,
    own: &'a Semaphore,
    partner: &'a Semaphore,
    rounds: u32,
}

/// Counts a worker out of the run however it exits.
///
/// A worker that unwinds may be holding the turn, so the guard aborts the run
/// and hands the turn to the partner, which then stops without acting.
struct Completion<'a> {
    finished: &'a CompletionBarrier,
    aborted: &'a AtomicBool,
    partner: &'a Semaphore,
}

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.aborted.store(true, Ordering::SeqCst);
            if let Err(e) = self.partner.release() {
                tracing::error!(error = %e, "failed to hand over turn after panic");
            }
        }
        if let Err(e) = self.finished.decrement() {
            tracing::error!(error = %e, "failed to record worker completion");
        }
    }
}

impl<R: Reporter> PingPong<R> {
    pub fn new(config: PingPongConfig, reporter: R) -> Result<Self, PlayError> {
        config.validate()?;
        Ok(Self { config, reporter })
    }

    pub fn config(&self) -> &PingPongConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Run both workers to completion, then report the finish message.
    pub fn play(&self) -> Result<PlaySummary, PlayError> {
        let config = &self.config;
        let started = Instant::now();

        let ping = Semaphore::new(1, config.fair);
        let pong = Semaphore::new(0, config.fair);
        let start_gate = CompletionBarrier::new(1);
        let finished = CompletionBarrier::new(2);
        let aborted = AtomicBool::new(false);
        let turns = AtomicCounter::new(0);

        let run = Run {
            reporter: &self.reporter,
            start_gate: &start_gate,
            finished: &finished,
            aborted: &aborted,
            turns: &turns,
        };
        let workers = [
            Worker {
                label: &config.ping_label,
                own: &ping,
                partner: &pong,
                rounds: config.rounds,
            },
            Worker {
                label: &config.pong_label,
                own: &pong,
                partner: &ping,
                rounds: config.rounds,
            },
        ];

        tracing::info!(rounds = config.rounds, fair = config.fair, "starting ping-pong");
        self.reporter.report(&config.start_message);

        thread::scope(|scope| -> Result<(), PlayError> {
            let mut handles = Vec::with_capacity(workers.len());
            for (index, worker) in workers.into_iter().enumerate() {
                let label = worker.label.to_string();
                let run = &run;
                let spawned = thread::Builder::new()
                    .name(format!("pingpong-{}", index))
                    .spawn_scoped(scope, move || worker.run(run));
                match spawned {
                    Ok(handle) => handles.push((label, handle)),
                    Err(source) => {
                        tracing::error!(label = %label, error = %source, "worker spawn failed");
                        aborted.store(true, Ordering::SeqCst);
                        start_gate.decrement()?;
                        return Err(PlayError::Spawn { label, source });
                    }
                }
            }

            start_gate.decrement()?;
            finished.wait()?;

            let mut failure = None;
            for (label, handle) in handles {
                match handle.join() {
                    Ok(Ok(rounds)) => tracing::debug!(label = %label, rounds, "worker finished"),
                    Ok(Err(e)) => {
                        failure.get_or_insert(PlayError::Sync(e));
                    }
                    Err(_) => {
                        self.reporter
                            .log_error(TAG, &format!("worker {} panicked", label));
                        failure.get_or_insert(PlayError::WorkerPanicked { label });
                    }
                }
            }
            failure.map_or(Ok(()), Err)
        })?;

        self.reporter.report(&config.finish_message);

        let summary = PlaySummary {
            turns: u64::try_from(turns.get()?).unwrap_or_default(),
            elapsed: started.elapsed(),
        };
        tracing::info!(
            turns = summary.turns,
            elapsed = ?summary.elapsed,
            "ping-pong finished"
        );
        Ok(summary)
    }
}

impl Worker<'_> {
    fn run<R: Reporter>(self, run: &Run<'_, R>) -> Result<u32, SyncError> {
        let _completion = Completion {
            finished: run.finished,
            aborted: run.aborted,
            partner: self.partner,
        };

        let result = self.take_turns(run);
        if let Err(e) = &result {
            run.reporter
                .log_error(TAG, &format!("{} stopped: {}", self.label, e));
        }
        result
    }

    fn take_turns<R: Reporter>(&self, run: &Run<'_, R>) -> Result<u32, SyncError> {
        run.start_gate.wait()?;
        if run.aborted.load(Ordering::SeqCst) {
            tracing::warn!(label = self.label, "run aborted before start");
            return Ok(0);
        }

        for round in 1..=self.rounds {
            self.own.acquire_uninterruptibly()?;
            if run.aborted.load(Ordering::SeqCst) {
                tracing::warn!(label = self.label, round, "partner abandoned the run");
                self.partner.release()?;
                return Ok(round - 1);
            }
            let turn = run.turns.increment_and_get()?;
            tracing::debug!(label = self.label, round, turn, "taking turn");
            run.reporter.report(&format!("{}({})", self.label, round));
            self.partner.release()?;
        }
        Ok(self.rounds)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
