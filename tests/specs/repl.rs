// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-eval-print loop specs: prompting, blank lines, exit, and recovery.

use crate::prelude::Session;

#[test]
fn prompt_precedes_every_read() {
    let run = Session::new().line("echo hi").run().passes();
    assert_eq!(run.stdout(), "$ hi\n$ \n");
}

#[test]
fn eof_ends_the_loop_with_status_zero() {
    let run = Session::new().run();
    assert_eq!(run.stdout(), "$ \n");
    assert_eq!(run.code(), 0);
}

#[test]
fn blank_lines_produce_only_fresh_prompts() {
    let run = Session::new().line("").line("   \t ").run().passes();
    assert_eq!(run.stdout(), "$ $ $ \n");
    assert_eq!(run.stderr(), "");
}

#[test]
fn exit_terminates_with_given_status() {
    let run = Session::new().line("exit 7").line("echo never").run();
    assert_eq!(run.code(), 7);
    assert!(!run.stdout().contains("never"));
}

#[test]
fn exit_without_operand_is_zero() {
    assert_eq!(Session::new().line("exit").run().code(), 0);
}

#[test]
fn syntax_error_is_reported_and_loop_continues() {
    Session::new()
        .line("echo 'oops")
        .line("echo recovered")
        .run()
        .passes()
        .stderr_has("Syntax error: unterminated single quote")
        .stdout_has("recovered");
}

#[test]
fn dangling_redirection_is_reported_and_loop_continues() {
    Session::new()
        .line("echo hi >")
        .line("echo recovered")
        .run()
        .passes()
        .stderr_has("Syntax error: redirection operator '>' has no target")
        .stdout_has("recovered");
}

#[test]
fn unknown_command_does_not_stop_the_loop() {
    Session::new()
        .line("no-such-command-xyz")
        .line("echo after")
        .run()
        .passes()
        .stderr_has("no-such-command-xyz: command not found")
        .stdout_has("after");
}

#[test]
fn command_flag_runs_one_line_without_prompting() {
    let session = Session::new();
    let run = session.run_command("echo hi").passes();
    assert_eq!(run.stdout(), "hi\n");
}

#[test]
fn command_flag_propagates_exit_status() {
    assert_eq!(Session::new().run_command("exit 3").code(), 3);
}
