// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton play` specs

use crate::prelude::*;

#[test]
fn default_game_prints_ten_alternating_rounds() {
    baton()
        .args(&["play"])
        .passes()
        .stdout_eq(&default_transcript())
        .stderr_empty();
}

#[test]
fn unfair_game_still_alternates() {
    baton()
        .args(&["play", "--unfair", "--rounds", "25"])
        .passes()
        .stdout_eq(&transcript(25, "Ping!", "Pong!", "Ready...Set...Go!", "Done!"));
}

#[test]
fn custom_labels_and_messages() {
    baton()
        .args(&[
            "play", "-r", "2", "--ping", "Tick", "--pong", "Tock", "--start", "Go", "--finish",
            "Stop",
        ])
        .passes()
        .stdout_eq("Go\nTick(1)\nTock(1)\nTick(2)\nTock(2)\nStop\n");
}

#[test]
fn zero_rounds_fails_with_suggestion() {
    baton()
        .args(&["play", "--rounds", "0"])
        .fails()
        .stdout_eq("")
        .stderr_has("error: rounds must be greater than zero")
        .stderr_has("--rounds 1 or more");
}

#[test]
fn fair_and_unfair_together_are_rejected() {
    baton()
        .args(&["play", "--fair", "--unfair"])
        .fails()
        .stderr_has("cannot be used with");
}

#[test]
fn summary_goes_to_stderr() {
    baton()
        .args(&["play", "--rounds", "3", "--summary"])
        .passes()
        .stdout_eq(&transcript(3, "Ping!", "Pong!", "Ready...Set...Go!", "Done!"))
        .stderr_has("6 turns in")
        .stderr_has("(8 lines)");
}
