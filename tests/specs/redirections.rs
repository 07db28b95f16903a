// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection specs at the binary level.

use crate::prelude::Session;

#[test]
fn truncate_discards_earlier_content() {
    let session = Session::new()
        .line("echo hi > out.txt")
        .line("pwd > out.txt");
    let expected = format!("{}\n", session.canonical_path().display());
    session.run().passes();
    assert_eq!(session.file("out.txt"), expected);
}

#[test]
fn append_accumulates_lines() {
    let session = Session::new()
        .line("echo one >> log.txt")
        .line("echo two >> log.txt");
    session.run().passes();
    assert_eq!(session.file("log.txt"), "one\ntwo\n");
}

#[test]
fn stderr_target_exists_even_when_nothing_is_written() {
    let session = Session::new().line("ls 2> err.txt");
    session.run().passes();
    assert_eq!(session.file("err.txt"), "");
}

#[test]
fn stderr_target_captures_command_not_found() {
    let session = Session::new().line("nosuchcmd123 2> err.txt");
    session.run().passes();
    assert_eq!(session.file("err.txt"), "nosuchcmd123: command not found\n");
}

#[test]
fn external_stdout_goes_to_the_target_not_the_screen() {
    let session = Session::new();
    session.seed_file("data.txt", "alpha\nbeta\n");
    let session = session.line("cat data.txt > copy.txt");
    let run = session.run().passes();
    assert_eq!(session.file("copy.txt"), "alpha\nbeta\n");
    assert!(!run.stdout().contains("alpha"));
}

#[test]
fn fd_spelled_operators_match_their_plain_forms() {
    let session = Session::new()
        .line("echo a 1> one.txt")
        .line("echo b 1>> one.txt");
    session.run().passes();
    assert_eq!(session.file("one.txt"), "a\nb\n");
}

#[test]
fn overridden_target_is_still_created_empty() {
    let session = Session::new().line("echo hi > first.txt > second.txt");
    session.run().passes();
    assert_eq!(session.file("second.txt"), "hi\n");
    assert_eq!(session.file("first.txt"), "");
}

#[test]
fn quoted_operator_is_printed_not_interpreted() {
    let session = Session::new().line("echo '>' x");
    session.run().passes().stdout_has("> x\n");
    assert!(!session.has_file(">"));
}

#[test]
fn missing_parent_directories_are_created() {
    let session = Session::new().line("echo deep > a/b/c.txt");
    session.run().passes();
    assert_eq!(session.file("a/b/c.txt"), "deep\n");
}
