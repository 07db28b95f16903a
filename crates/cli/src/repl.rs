// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read-eval-print loop.
//!
//! A bounded loop with exactly one in-flight command: prompt, read a full
//! line, hand it to the shell, repeat. End of input ends the loop with
//! status 0; only the `exit` built-in ends it with anything else.

use std::io::Write;

use anyhow::Result;
use reef_shell::{Flow, Shell};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the interactive loop until end of input or `exit`.
pub(crate) async fn run() -> Result<i32> {
    let mut shell = Shell::new()?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt()?;
        match lines.next_line().await? {
            None => {
                // End of input: finish the prompt line and leave cleanly
                println!();
                return Ok(0);
            }
            Some(line) => {
                if let Some(code) = eval(&mut shell, &line).await {
                    return Ok(code);
                }
            }
        }
    }
}

/// Run a single command line without the interactive loop.
pub(crate) async fn run_one(line: &str) -> Result<i32> {
    let mut shell = Shell::new()?;
    Ok(eval(&mut shell, line).await.unwrap_or(0))
}

/// Evaluate one line. Returns the shell's exit status once it should stop.
async fn eval(shell: &mut Shell, line: &str) -> Option<i32> {
    match shell.run_line(line).await {
        Ok(Flow::Continue) => None,
        Ok(Flow::Exit(code)) => Some(code),
        Err(err) => {
            tracing::debug!(error = %err, "rejected input line");
            eprintln!("Syntax error: {err}");
            None
        }
    }
}

/// Write the prompt and flush it before blocking on input.
fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(b"$ ")?;
    stdout.flush()?;
    Ok(())
}
