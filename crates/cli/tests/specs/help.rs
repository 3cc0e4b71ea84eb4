// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    baton()
        .args(&["--help"])
        .passes()
        .stdout_has("play")
        .stdout_has("count")
        .stdout_has("completions");
}

#[test]
fn play_help_lists_flags() {
    baton()
        .args(&["play", "--help"])
        .passes()
        .stdout_has("--rounds")
        .stdout_has("--unfair")
        .stdout_has("--config");
}

#[test]
fn missing_subcommand_fails() {
    baton().fails().stderr_has("Usage");
}

#[test]
fn bash_completions_name_the_binary() {
    baton()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("baton");
}
