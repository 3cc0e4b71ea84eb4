// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton count` specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn default_count_loses_nothing() {
    baton()
        .args(&["count"])
        .passes()
        .stdout_eq("counter: 4000 (expected 4000)\n");
}

#[test]
fn custom_threads_and_increments() {
    baton()
        .into_command()
        .args(["count", "--threads", "16", "--increments", "250"])
        .assert()
        .success()
        .stdout(predicate::str::diff("counter: 4000 (expected 4000)\n"));
}

#[test]
fn zero_threads_fails() {
    baton()
        .into_command()
        .args(["count", "-t", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one counting thread"));
}
