// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for binary-level specs.
//!
//! A [`Session`] owns a scratch working directory and a scripted sequence of
//! input lines; running it spawns the real `reef` binary with that input on
//! stdin and captures everything it produced.

use std::path::Path;
use std::process::Output;

pub struct Session {
    dir: tempfile::TempDir,
    input: String,
}

impl Session {
    /// A fresh session in its own scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            input: String::new(),
        }
    }

    /// Queue one input line.
    pub fn line(mut self, line: &str) -> Self {
        self.input.push_str(line);
        self.input.push('\n');
        self
    }

    /// The scratch directory the shell starts in.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The scratch directory as the shell itself reports it.
    pub fn canonical_path(&self) -> std::path::PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    /// Read a file from the scratch directory.
    pub fn file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|err| panic!("cannot read {name}: {err}"))
    }

    /// Whether a file exists in the scratch directory.
    pub fn has_file(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Create a file in the scratch directory before the session runs.
    pub fn seed_file(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    /// Create a subdirectory in the scratch directory.
    pub fn seed_dir(&self, name: &str) {
        std::fs::create_dir_all(self.path().join(name)).unwrap();
    }

    /// Run the binary over the queued input and capture the outcome.
    pub fn run(&self) -> Run {
        let output = assert_cmd::Command::cargo_bin("reef")
            .unwrap()
            .current_dir(self.path())
            .write_stdin(self.input.clone())
            .output()
            .unwrap();
        Run { output }
    }

    /// Run the binary with `-c LINE` instead of stdin input.
    pub fn run_command(&self, line: &str) -> Run {
        let output = assert_cmd::Command::cargo_bin("reef")
            .unwrap()
            .current_dir(self.path())
            .args(["-c", line])
            .output()
            .unwrap();
        Run { output }
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    /// Assert the process exited with status 0.
    pub fn passes(self) -> Self {
        assert!(
            self.output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            self.output.status,
            self.stdout(),
            self.stderr(),
        );
        self
    }

    /// Assert stdout contains the given text.
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {:?}\nstdout: {}\nstderr: {}",
            needle,
            self.stdout(),
            self.stderr(),
        );
        self
    }

    /// Assert stderr contains the given text.
    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {:?}\nstdout: {}\nstderr: {}",
            needle,
            self.stdout(),
            self.stderr(),
        );
        self
    }
}
