// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton count` - Contended increments on a shared counter

use crate::error::CliError;
use anyhow::{anyhow, bail, Result};
use baton_core::{AtomicCounter, CompletionBarrier};
use clap::Args;
use std::thread;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Number of incrementing threads
    #[arg(short, long, default_value_t = 4)]
    pub threads: u32,

    /// Increments performed by each thread
    #[arg(short, long, default_value_t = 1000)]
    pub increments: u32,
}

/// Final and expected counter values of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub value: i64,
    pub expected: i64,
}

pub async fn count(args: CountArgs) -> Result<()> {
    if args.threads == 0 {
        return Err(CliError::no_threads().into());
    }

    let (threads, increments) = (args.threads, args.increments);
    let tally = tokio::task::spawn_blocking(move || tally(threads, increments)).await??;
    println!("counter: {} (expected {})", tally.value, tally.expected);

    if tally.value != tally.expected {
        bail!("lost {} increments", tally.expected - tally.value);
    }
    Ok(())
}

/// Run `threads` workers that each increment one counter `increments` times.
pub fn tally(threads: u32, increments: u32) -> Result<Tally> {
    let counter = AtomicCounter::new(0);
    let done = CompletionBarrier::new(threads);

    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(threads as usize);
        for index in 0..threads {
            let (counter, done) = (&counter, &done);
            let handle = thread::Builder::new()
                .name(format!("count-{}", index))
                .spawn_scoped(scope, move || {
                    let result = (0..increments)
                        .try_for_each(|_| counter.increment_and_get().map(drop));
                    let counted = done.decrement();
                    result.and(counted)
                });
            match handle {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Count out the threads that never started so joins below can finish.
                    for _ in index..threads {
                        done.decrement()?;
                    }
                    return Err(anyhow!("failed to spawn counting thread: {}", e));
                }
            }
        }

        done.wait()?;
        tracing::debug!(threads, increments, "counting threads finished");

        for handle in handles {
            handle
                .join()
                .map_err(|_| anyhow!("counting thread panicked"))??;
        }
        Ok(())
    })?;

    Ok(Tally {
        value: counter.get()?,
        expected: i64::from(threads) * i64::from(increments),
    })
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
