// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection recognition on the assembled word stream.

use super::{argv, parse};
use crate::ast::{RedirectMode, Stream};

#[yare::parameterized(
    out_truncate = { "echo hi > out.txt", Stream::Out, RedirectMode::Truncate },
    out_truncate_fd = { "echo hi 1> out.txt", Stream::Out, RedirectMode::Truncate },
    out_append = { "echo hi >> out.txt", Stream::Out, RedirectMode::Append },
    out_append_fd = { "echo hi 1>> out.txt", Stream::Out, RedirectMode::Append },
    err_truncate = { "echo hi 2> out.txt", Stream::Err, RedirectMode::Truncate },
    err_append = { "echo hi 2>> out.txt", Stream::Err, RedirectMode::Append },
)]
fn operator_binds_stream_and_mode(input: &str, stream: Stream, mode: RedirectMode) {
    let cmd = parse(input);
    assert_eq!(argv(&cmd), ["echo", "hi"]);
    assert_eq!(cmd.redirections.len(), 1);
    let redirection = &cmd.redirections[0];
    assert_eq!(redirection.stream, stream);
    assert_eq!(redirection.mode, mode);
    assert_eq!(redirection.target.text(), "out.txt");
}

#[test]
fn operator_and_operand_are_removed_from_argv() {
    let cmd = parse("cat a.txt > out.txt b.txt");
    assert_eq!(argv(&cmd), ["cat", "a.txt", "b.txt"]);
    assert_eq!(cmd.redirections.len(), 1);
}

#[test]
fn both_streams_bind_independently() {
    let cmd = parse("cmd > out.log 2>> err.log");
    assert_eq!(argv(&cmd), ["cmd"]);
    assert_eq!(cmd.redirections.len(), 2);
    assert_eq!(cmd.redirections[0].stream, Stream::Out);
    assert_eq!(cmd.redirections[1].stream, Stream::Err);
    assert_eq!(cmd.redirections[1].mode, RedirectMode::Append);
}

#[test]
fn repeated_operators_stay_in_source_order() {
    // The executor opens each target and binds the last one
    let cmd = parse("echo hi > first.txt > second.txt");
    assert_eq!(cmd.redirections.len(), 2);
    assert_eq!(cmd.redirections[0].target.text(), "first.txt");
    assert_eq!(cmd.redirections[1].target.text(), "second.txt");
}

#[test]
fn quoted_operator_is_a_literal_argument() {
    let cmd = parse("echo '>' x");
    assert_eq!(argv(&cmd), ["echo", ">", "x"]);
    assert!(cmd.redirections.is_empty());
}

#[test]
fn double_quoted_operator_is_a_literal_argument() {
    let cmd = parse(r#"echo "2>" x"#);
    assert_eq!(argv(&cmd), ["echo", "2>", "x"]);
    assert!(cmd.redirections.is_empty());
}

#[test]
fn operator_attached_to_word_is_not_an_operator() {
    let cmd = parse("echo hi >out.txt");
    assert_eq!(argv(&cmd), ["echo", "hi", ">out.txt"]);
    assert!(cmd.redirections.is_empty());
}

#[test]
fn quoted_target_keeps_spaces() {
    let cmd = parse("echo hi > 'out file.txt'");
    assert_eq!(cmd.redirections[0].target.text(), "out file.txt");
}

#[test]
fn operator_spelling_consumes_next_word_even_if_operator_shaped() {
    let cmd = parse("echo > '>'");
    assert_eq!(argv(&cmd), ["echo"]);
    assert_eq!(cmd.redirections[0].target.text(), ">");
}
