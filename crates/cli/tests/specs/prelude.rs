// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// Environment variable the binary reads its log filter from
pub const LOG_ENV: &str = "BATON_LOG";

/// Start a `baton` invocation with logging left at its default.
pub fn baton() -> Run {
    let mut cmd = Command::cargo_bin("baton").unwrap();
    cmd.env_remove(LOG_ENV);
    Run { cmd }
}

/// The transcript a run prints for the given rounds and labels.
pub fn transcript(rounds: u32, ping: &str, pong: &str, start: &str, finish: &str) -> String {
    let mut out = format!("{}\n", start);
    for round in 1..=rounds {
        out.push_str(&format!("{}({})\n{}({})\n", ping, round, pong, round));
    }
    out.push_str(finish);
    out.push('\n');
    out
}

/// The transcript of `baton play` with no settings changed.
pub fn default_transcript() -> String {
    transcript(10, "Ping!", "Pong!", "Ready...Set...Go!", "Done!")
}

pub struct Run {
    cmd: Command,
}

impl Run {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and require a zero exit code.
    pub fn passes(mut self) -> Ran {
        let output = self.cmd.output().unwrap();
        let ran = Ran { output };
        assert!(
            ran.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            ran.output.status,
            ran.stdout(),
            ran.stderr()
        );
        ran
    }

    /// Run and require a non-zero exit code.
    pub fn fails(mut self) -> Ran {
        let output = self.cmd.output().unwrap();
        let ran = Ran { output };
        assert!(
            !ran.output.status.success(),
            "expected failure\nstdout:\n{}",
            ran.stdout()
        );
        ran
    }

    pub fn into_command(self) -> Command {
        self.cmd
    }
}

pub struct Ran {
    output: Output,
}

impl Ran {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {:?}:\n{}", needle, stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {:?}:\n{}", needle, stderr);
        self
    }

    pub fn stderr_empty(self) -> Self {
        similar_asserts::assert_eq!(self.stderr(), "");
        self
    }
}

/// Scratch directory for config files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path as a string.
    pub fn file(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }
}
