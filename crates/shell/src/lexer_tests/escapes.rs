// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backslash escape tests: the permissive unquoted rule and the restricted
//! double-quote rule.

use crate::lexer::Lexer;
use crate::token::TokenKind;

// =============================================================================
// Unquoted Escapes (backslash takes the next character verbatim)
// =============================================================================

lex_tests! {
    escape_space_joins_word: r"a\ b" => [TokenKind::Word("a b".into())],
    escape_tab: "a\\\tb" => [TokenKind::Word("a\tb".into())],
    escape_backslash: r"a\\b" => [TokenKind::Word(r"a\b".into())],
    escape_single_quote: r"\'" => [TokenKind::Word("'".into())],
    escape_double_quote: r#"\""# => [TokenKind::Word("\"".into())],
    escape_gt: r"\>" => [TokenKind::Word(">".into())],
    escape_ordinary_char: r"\n" => [TokenKind::Word("n".into())],
    escape_dollar: r"\$HOME" => [TokenKind::Word("$HOME".into())],

    // Escaped space does not separate words
    two_escaped_spaces: r"hello\ \ world" => [TokenKind::Word("hello  world".into())],

    // A lone trailing backslash stays literal
    trailing_backslash: r"abc\" => [TokenKind::Word(r"abc\".into())],
    only_backslash: r"\" => [TokenKind::Word(r"\".into())],

    // Escaped quote keeps lexing in the unquoted state
    escaped_quote_then_word: r"\'abc" => [TokenKind::Word("'abc".into())],
}

span_tests! {
    span_escaped_space: r"a\ b" => [(0, 4)],
    span_escape_then_word: r"\> x" => [(0, 2), (3, 4)],
}

// =============================================================================
// Double-Quote Escapes (restricted set, backslash otherwise preserved)
// =============================================================================

lex_tests! {
    dq_escape_double: r#""quote\"here""# => [TokenKind::DoubleQuoted("quote\"here".into())],
    dq_escape_backslash: r#""back\\slash""# => [TokenKind::DoubleQuoted(r"back\slash".into())],
    dq_escape_dollar: r#""\$HOME""# => [TokenKind::DoubleQuoted("$HOME".into())],
    dq_escape_backtick: r#""\`cmd\`""# => [TokenKind::DoubleQuoted("`cmd`".into())],

    // Any other character keeps the backslash
    dq_backslash_n_preserved: r#""line\nbreak""# => [TokenKind::DoubleQuoted(r"line\nbreak".into())],
    dq_backslash_t_preserved: r#""tab\there""# => [TokenKind::DoubleQuoted(r"tab\there".into())],
    dq_backslash_space_preserved: r#""a\ b""# => [TokenKind::DoubleQuoted(r"a\ b".into())],
    dq_backslash_quote_single: r#""\'""# => [TokenKind::DoubleQuoted(r"\'".into())],

    // Mixed escape sequences in one fragment
    dq_mixed_escapes: r#""a\"b\\c\nd""# => [TokenKind::DoubleQuoted("a\"b\\c\\nd".into())],
}
