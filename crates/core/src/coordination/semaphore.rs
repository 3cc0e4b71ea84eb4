// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting semaphore built from a mutex and a condition variable
//!
//! A single lock guards the permit count and the queue of blocked acquirers.
//! Every wakeup re-checks availability under the lock before a permit is
//! taken, so spurious wakeups and racing waiters never double-grant a permit.
//!
//! In fair mode each blocked acquirer holds a ticket and only the ticket at the
//! head of the queue may take a permit, which gives strict FIFO grants. In
//! non-fair mode a caller that finds a free permit takes it immediately, even
//! if others are queued.

use super::cancel::{CancellationToken, Wake};
use super::error::SyncError;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

const PRIMITIVE: &str = "semaphore";

/// Counting semaphore with blocking, interruptible and non-blocking acquire
#[derive(Debug)]
pub struct Semaphore {
    shared: Arc<Shared>,
    fair: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    available: Condvar,
}

#[derive(Debug)]
struct State {
    permits: usize,
    /// Tickets of blocked acquirers, oldest first
    queue: VecDeque<u64>,
    next_ticket: u64,
}

impl State {
    fn enqueue(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.queue.push_back(ticket);
        ticket
    }

    fn dequeue(&mut self, ticket: u64) {
        if let Some(pos) = self.queue.iter().position(|t| *t == ticket) {
            self.queue.remove(pos);
        }
    }
}

impl Wake for Shared {
    fn wake(&self) {
        // Holding the lock orders this notify after the waiter's cancellation check.
        let _state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        self.available.notify_all();
    }
}

impl Semaphore {
    pub fn new(permits: usize, fair: bool) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    permits,
                    queue: VecDeque::new(),
                    next_ticket: 0,
                }),
                available: Condvar::new(),
            }),
            fair,
        }
    }

    pub fn is_fair(&self) -> bool {
        self.fair
    }

    /// Block until a permit is available and take it.
    ///
    /// Fails with [`SyncError::Cancelled`] if `cancel` is cancelled before or
    /// while waiting. A cancelled call leaves the permit count and the wait
    /// queue as if it had never been made.
    pub fn acquire(&self, cancel: &CancellationToken) -> Result<(), SyncError> {
        self.acquire_with(Some(cancel))
    }

    /// Block until a permit is available and take it. Cannot be cancelled.
    pub fn acquire_uninterruptibly(&self) -> Result<(), SyncError> {
        self.acquire_with(None)
    }

    /// Take a permit if one is free and, in fair mode, nobody is queued.
    pub fn try_acquire(&self) -> Result<bool, SyncError> {
        let mut state = self.lock()?;
        if self.may_barge(&state) {
            state.permits -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Return one permit and wake a blocked acquirer, if any.
    pub fn release(&self) -> Result<(), SyncError> {
        let mut state = self.lock()?;
        state.permits += 1;
        if !state.queue.is_empty() {
            self.notify();
        }
        Ok(())
    }

    /// Snapshot of the free permits; may be stale as soon as it returns.
    pub fn available_permits(&self) -> Result<usize, SyncError> {
        Ok(self.lock()?.permits)
    }

    /// Snapshot of the number of blocked acquirers.
    pub fn queued_waiters(&self) -> Result<usize, SyncError> {
        Ok(self.lock()?.queue.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, SyncError> {
        self.shared
            .state
            .lock()
            .map_err(|_| SyncError::poisoned(PRIMITIVE))
    }

    fn may_barge(&self, state: &State) -> bool {
        state.permits > 0 && (!self.fair || state.queue.is_empty())
    }

    fn may_proceed(&self, state: &State, ticket: u64) -> bool {
        state.permits > 0 && (!self.fair || state.queue.front() == Some(&ticket))
    }

    /// Only the queue head can proceed in fair mode, so everyone must re-check.
    fn notify(&self) {
        if self.fair {
            self.shared.available.notify_all();
        } else {
            self.shared.available.notify_one();
        }
    }

    fn acquire_with(&self, cancel: Option<&CancellationToken>) -> Result<(), SyncError> {
        let mut state = self.lock()?;

        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(SyncError::Cancelled);
        }
        if self.may_barge(&state) {
            state.permits -= 1;
            return Ok(());
        }

        let ticket = state.enqueue();
        let hook = cancel.map(|token| {
            let hook: Arc<dyn Wake> = self.shared.clone();
            token.register(Arc::clone(&hook));
            (token, hook)
        });
        tracing::trace!(
            ticket,
            fair = self.fair,
            queued = state.queue.len(),
            "waiting for permit"
        );

        let outcome = loop {
            if cancel.is_some_and(CancellationToken::is_cancelled) {
                break Err(SyncError::Cancelled);
            }
            if self.may_proceed(&state, ticket) {
                break Ok(());
            }
            state = match self.shared.available.wait(state) {
                Ok(guard) => guard,
                Err(poisoned) => {
                    poisoned.into_inner().dequeue(ticket);
                    if let Some((token, hook)) = &hook {
                        token.unregister(hook);
                    }
                    return Err(SyncError::poisoned(PRIMITIVE));
                }
            };
        };

        state.dequeue(ticket);
        if outcome.is_ok() {
            state.permits -= 1;
        }
        // Hand on any wakeup this waiter consumed but did not use.
        if state.permits > 0 && !state.queue.is_empty() {
            self.notify();
        }
        drop(state);

        if let Some((token, hook)) = &hook {
            token.unregister(hook);
        }
        match &outcome {
            Ok(()) => tracing::trace!(ticket, "permit granted"),
            Err(e) => tracing::trace!(ticket, error = %e, "wait abandoned"),
        }
        outcome
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;
