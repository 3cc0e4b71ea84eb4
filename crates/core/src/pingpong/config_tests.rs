// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;
use yare::parameterized;

#[test]
fn defaults_match_the_classic_game() {
    let config = PingPongConfig::default();
    assert_eq!(config.rounds, 10);
    assert!(config.fair);
    assert_eq!(config.ping_label, "Ping!");
    assert_eq!(config.pong_label, "Pong!");
    assert_eq!(config.start_message, "Ready...Set...Go!");
    assert_eq!(config.finish_message, "Done!");
    config.validate().unwrap();
}

#[test]
fn empty_toml_yields_defaults() {
    assert_eq!(
        PingPongConfig::from_toml_str("").unwrap(),
        PingPongConfig::default()
    );
}

#[test]
fn partial_toml_overrides_only_given_keys() {
    let config = PingPongConfig::from_toml_str(
        r#"
        rounds = 3
        fair = false
        ping_label = "Tick"
        "#,
    )
    .unwrap();

    assert_eq!(config.rounds, 3);
    assert!(!config.fair);
    assert_eq!(config.ping_label, "Tick");
    assert_eq!(config.pong_label, "Pong!");
}

#[parameterized(
    zero_rounds = { "rounds = 0" },
    negative_rounds = { "rounds = -1" },
    unknown_key = { "turns = 4" },
    wrong_type = { "fair = \"yes\"" },
)]
fn invalid_toml_is_rejected(text: &str) {
    assert!(PingPongConfig::from_toml_str(text).is_err());
}

#[test]
fn zero_rounds_reports_invalid_rounds() {
    let err = PingPongConfig::from_toml_str("rounds = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRounds));
    assert_eq!(err.to_string(), "rounds must be greater than zero");
}

#[test]
fn builders_replace_fields() {
    let config = PingPongConfig::default()
        .with_rounds(2)
        .with_fair(false)
        .with_labels("A", "B")
        .with_messages("go", "stop");

    assert_eq!(config.rounds, 2);
    assert!(!config.fair);
    assert_eq!((config.ping_label.as_str(), config.pong_label.as_str()), ("A", "B"));
    assert_eq!(
        (config.start_message.as_str(), config.finish_message.as_str()),
        ("go", "stop")
    );
}

#[test]
fn load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "rounds = 4\npong_label = \"Pang!\"").unwrap();

    let config = PingPongConfig::load(file.path()).unwrap();
    assert_eq!(config.rounds, 4);
    assert_eq!(config.pong_label, "Pang!");
}

#[test]
fn load_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = PingPongConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = PingPongConfig::default().with_labels("x", "y");
    let text = toml::to_string(&config).unwrap();
    assert_eq!(PingPongConfig::from_toml_str(&text).unwrap(), config);
}
