// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn text_returns_fragment_content() {
    assert_eq!(TokenKind::Word("ls".into()).text(), "ls");
    assert_eq!(TokenKind::SingleQuoted("a b".into()).text(), "a b");
    assert_eq!(TokenKind::DoubleQuoted("".into()).text(), "");
}

#[test]
fn quoted_flag_tracks_kind() {
    assert!(!TokenKind::Word(">".into()).is_quoted());
    assert!(TokenKind::SingleQuoted(">".into()).is_quoted());
    assert!(TokenKind::DoubleQuoted(">".into()).is_quoted());
}

#[test]
fn display_is_human_readable() {
    assert_eq!(TokenKind::Word("echo".into()).to_string(), "word 'echo'");
    assert_eq!(
        TokenKind::DoubleQuoted("hi".into()).to_string(),
        "quoted string 'hi'"
    );
}
