// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word assembly: fragment gluing, empty tokens, and quote resolution.

use super::{argv, parse};
use crate::parser::Parser;

#[test]
fn blank_line_is_no_command() {
    assert_eq!(Parser::parse("").unwrap(), None);
    assert_eq!(Parser::parse("   \t ").unwrap(), None);
}

#[test]
fn simple_command_splits_into_argv() {
    let cmd = parse("echo hello world");
    assert_eq!(argv(&cmd), ["echo", "hello", "world"]);
    assert!(cmd.redirections.is_empty());
}

#[test]
fn adjacent_fragments_form_one_word() {
    let cmd = parse(r#"echo a'b'c"d""#);
    assert_eq!(argv(&cmd), ["echo", "abcd"]);
}

#[test]
fn whitespace_separates_quoted_fragments() {
    let cmd = parse("echo 'a' 'b'");
    assert_eq!(argv(&cmd), ["echo", "a", "b"]);
}

#[test]
fn empty_single_quotes_are_an_empty_argument() {
    let cmd = parse("echo ''");
    assert_eq!(argv(&cmd), ["echo", ""]);
}

#[test]
fn adjacent_empty_quotes_merge() {
    let cmd = parse("echo 'a''b'");
    assert_eq!(argv(&cmd), ["echo", "ab"]);
}

#[test]
fn quoted_whitespace_is_preserved() {
    let cmd = parse(r#"echo 'a  b'  "c\"d""#);
    assert_eq!(argv(&cmd), ["echo", "a  b", "c\"d"]);
}

#[test]
fn escaped_space_joins_one_argument() {
    let cmd = parse(r"echo hello\ world");
    assert_eq!(argv(&cmd), ["echo", "hello world"]);
}

#[test]
fn quoted_command_name_resolves() {
    let cmd = parse("'echo' hi");
    assert_eq!(argv(&cmd), ["echo", "hi"]);
}

#[test]
fn span_covers_whole_command() {
    let input = "echo hello";
    let cmd = parse(input);
    assert_eq!(cmd.span.slice(input), input);
}
