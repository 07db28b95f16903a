// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the command executor.

use super::*;

mod builtins;
mod dispatch;
mod redirections;

/// Run one line against the shell, panicking on syntax errors.
pub(crate) async fn run(shell: &mut Shell, line: &str) -> Flow {
    match shell.run_line(line).await {
        Ok(flow) => flow,
        Err(err) => panic!("line {:?} failed to parse: {}", line, err),
    }
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}

/// Read a redirection target back as a string.
pub(crate) fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("cannot read {}: {}", path.display(), err))
}
