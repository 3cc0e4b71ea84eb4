// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log output specs

use crate::prelude::*;

#[test]
fn debug_logs_go_to_stderr_only() {
    baton()
        .env(LOG_ENV, "baton_core=debug")
        .args(&["play", "--rounds", "2"])
        .passes()
        .stdout_eq(&transcript(2, "Ping!", "Pong!", "Ready...Set...Go!", "Done!"))
        .stderr_has("taking turn")
        .stderr_has("ping-pong finished");
}

#[test]
fn default_filter_is_quiet() {
    baton().args(&["count", "-t", "2", "-i", "10"]).passes().stderr_empty();
}
