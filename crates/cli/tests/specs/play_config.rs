// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton play --config` specs

use crate::prelude::*;

#[test]
fn config_file_sets_the_game() {
    let temp = Project::empty();
    let config = temp.file(
        "game.toml",
        "rounds = 2\nping_label = \"Tick\"\npong_label = \"Tock\"\n",
    );

    baton()
        .args(&["play", "--config", &config])
        .passes()
        .stdout_eq("Ready...Set...Go!\nTick(1)\nTock(1)\nTick(2)\nTock(2)\nDone!\n");
}

#[test]
fn flags_override_config_file() {
    let temp = Project::empty();
    let config = temp.file("game.toml", "rounds = 5\nfinish_message = \"Fin\"\n");

    baton()
        .args(&["play", "-c", &config, "--rounds", "1"])
        .passes()
        .stdout_eq("Ready...Set...Go!\nPing!(1)\nPong!(1)\nFin\n");
}

#[test]
fn relative_config_path_resolves_from_working_dir() {
    let temp = Project::empty();
    temp.file("game.toml", "rounds = 1\n");

    baton()
        .current_dir(temp.path())
        .args(&["play", "--config", "game.toml"])
        .passes()
        .stdout_has("Ping!(1)");
}

#[test]
fn missing_config_file_fails() {
    let temp = Project::empty();
    let missing = temp.path().join("nope.toml");

    baton()
        .args(&["play", "--config", missing.to_str().unwrap()])
        .fails()
        .stderr_has("nope.toml")
        .stderr_has("suggestions:");
}

#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    let config = temp.file("game.toml", "turns = 3\n");

    baton()
        .args(&["play", "--config", &config])
        .fails()
        .stderr_has("Allowed keys");
}
