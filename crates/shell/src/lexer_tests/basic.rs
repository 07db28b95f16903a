// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic word splitting: whitespace handling and unquoted words.

use crate::lexer::Lexer;
use crate::token::TokenKind;

lex_tests! {
    // Empty and all-whitespace input produce no tokens
    empty_input: "" => [],
    spaces_only: "   " => [],
    tabs_only: "\t\t" => [],
    mixed_whitespace: " \t \t " => [],

    // Simple words
    single_word: "echo" => [TokenKind::Word("echo".into())],
    two_words: "echo hello" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
    ],
    three_words: "echo hello world" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
        TokenKind::Word("world".into()),
    ],

    // Runs of whitespace collapse; no empty tokens are emitted
    multiple_spaces_between: "a    b" => [
        TokenKind::Word("a".into()),
        TokenKind::Word("b".into()),
    ],
    tab_separated: "a\tb" => [
        TokenKind::Word("a".into()),
        TokenKind::Word("b".into()),
    ],
    leading_whitespace: "   echo" => [TokenKind::Word("echo".into())],
    trailing_whitespace: "echo   " => [TokenKind::Word("echo".into())],

    // Redirection spellings are ordinary characters to the splitter; they
    // become operators only as standalone words
    gt_inside_word: "a>b" => [TokenKind::Word("a>b".into())],
    gt_attached_to_path: ">out.txt" => [TokenKind::Word(">out.txt".into())],
    standalone_gt: "echo hi > out" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hi".into()),
        TokenKind::Word(">".into()),
        TokenKind::Word("out".into()),
    ],
    standalone_fd_gt: "ls 2> err" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("2>".into()),
        TokenKind::Word("err".into()),
    ],

    // Punctuation and paths stay in one word
    absolute_path: "/usr/bin/env" => [TokenKind::Word("/usr/bin/env".into())],
    dashed_flag: "ls -la" => [
        TokenKind::Word("ls".into()),
        TokenKind::Word("-la".into()),
    ],
    equals_in_word: "-DKEY=value" => [TokenKind::Word("-DKEY=value".into())],

    // Unicode words
    unicode_word: "héllo" => [TokenKind::Word("héllo".into())],
}

span_tests! {
    span_single_word: "echo" => [(0, 4)],
    span_two_words: "echo hello" => [(0, 4), (5, 10)],
    span_leading_spaces: "  ab" => [(2, 4)],
    span_tab_separated: "a\tb" => [(0, 1), (2, 3)],
}
