// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use thiserror::Error;

/// Errors raised while preparing or running one command.
///
/// These are reported on the command's stderr binding; none of them
/// terminate the shell.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Redirection target could not be created or opened.
    #[error("cannot open '{path}' for {}: {source}", if *append { "appending" } else { "writing" })]
    Redirect {
        path: String,
        append: bool,
        source: std::io::Error,
    },

    /// A resolved external command failed to start.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}
