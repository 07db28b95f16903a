// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution: built-in dispatch, PATH resolution, and child-process
//! supervision.

mod builtin;
mod error;
mod path;
mod redirect;
mod run;

pub use error::ExecError;

use std::path::{Path, PathBuf};

use crate::parse_error::ParseError;
use crate::parser::Parser;

/// What the driver should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Terminate the shell with the given status.
    Exit(i32),
}

/// Shell execution state.
///
/// Owns the working directory, which persists across lines and is the base
/// for relative path resolution. Everything else (PATH, HOME, the rest of
/// the environment) is read from the ambient process environment.
pub struct Shell {
    pub(crate) cwd: PathBuf,
}

impl Shell {
    /// Create a shell rooted at the current process working directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self { cwd: std::env::current_dir()? })
    }

    /// Create a shell rooted at an explicit working directory.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// The shell's working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Parse and run one input line.
    ///
    /// Blank lines are a no-op. Syntax errors are returned to the caller;
    /// every other failure (unknown command, redirection I/O error, built-in
    /// domain error) is reported on the command's stderr binding and the
    /// shell keeps going.
    pub async fn run_line(&mut self, line: &str) -> Result<Flow, ParseError> {
        match Parser::parse(line)? {
            Some(command) => Ok(run::run_command(self, &command).await),
            None => Ok(Flow::Continue),
        }
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
