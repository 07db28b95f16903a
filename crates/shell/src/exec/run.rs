// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch: built-in selection, external lookup, and child-process
//! supervision.

use std::process::Stdio;

use crate::ast::SimpleCommand;

use super::builtin::Builtin;
use super::path::find_executable;
use super::redirect::{bind_redirections, Bindings, Sink};
use super::{Flow, Shell};

/// Run one parsed command with its redirections bound.
///
/// Unknown commands, redirection I/O failures, and built-in domain errors
/// are reported on the command's stderr binding; only the `exit` built-in
/// stops the loop.
pub(crate) async fn run_command(shell: &mut Shell, command: &SimpleCommand) -> Flow {
    let name = command.name.text();
    let args = command.arg_texts();

    let (mut io, bind_error) = bind_redirections(&command.redirections, &shell.cwd);
    if let Some(err) = bind_error {
        report(&mut io.stderr, &err.to_string());
        return Flow::Continue;
    }

    if let Some(builtin) = Builtin::lookup(&name) {
        tracing::debug!(cmd = %name, "dispatching builtin");
        return match builtin.run(shell, &args, &mut io) {
            Ok(flow) => flow,
            Err(err) => {
                tracing::warn!(cmd = %name, error = %err, "builtin output failed");
                Flow::Continue
            }
        };
    }

    if find_executable(&name, &shell.cwd).is_none() {
        report(&mut io.stderr, &format!("{name}: command not found"));
        return Flow::Continue;
    }

    run_external(shell, &name, &args, io).await
}

/// Spawn a resolved external command and wait for it.
///
/// The child inherits the shell's stdin, environment, and working
/// directory; stdout and stderr follow the redirection bindings. The exit
/// status is observed for tracing but not re-reported: the child's own
/// output already reached the user.
async fn run_external(shell: &Shell, name: &str, args: &[String], io: Bindings) -> Flow {
    let cmd_span = tracing::info_span!(
        "shell.cmd",
        cmd = %name,
        exit_code = tracing::field::Empty,
    );

    // Spawning by the typed name keeps it as the child's argv[0]; the OS
    // repeats the PATH resolution the lookup above already performed.
    let mut process = tokio::process::Command::new(name);
    process
        .args(args)
        .current_dir(&shell.cwd)
        .stdin(Stdio::inherit())
        .stdout(io.stdout.into_stdio())
        .stderr(io.stderr.into_stdio());

    let mut child = match process.spawn() {
        Ok(child) => child,
        Err(source) => {
            let err = super::error::ExecError::Spawn { command: name.to_string(), source };
            report(&mut Sink::Stderr, &err.to_string());
            return Flow::Continue;
        }
    };

    match child.wait().await {
        Ok(status) => {
            cmd_span.record("exit_code", exit_code(status));
        }
        Err(err) => {
            tracing::warn!(cmd = %name, error = %err, "wait for child failed");
        }
    }

    Flow::Continue
}

/// Write a single-line diagnostic to a stderr sink, best effort.
fn report(stderr: &mut Sink, message: &str) {
    if let Err(err) = stderr.write_line(message) {
        tracing::warn!(error = %err, "failed to report error");
    }
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|s| 128 + s)).unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
