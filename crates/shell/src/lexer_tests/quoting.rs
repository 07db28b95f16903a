// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote lexer tests: single quotes, double quotes, adjacency, and error
//! cases.

use crate::lexer::{Lexer, LexerError};
use crate::token::TokenKind;

// =============================================================================
// Single Quote Tests
// =============================================================================

lex_tests! {
    single_quote_basic: "'hello'" => [TokenKind::SingleQuoted("hello".into())],
    single_quote_with_spaces: "'hello world'" => [TokenKind::SingleQuoted("hello world".into())],
    single_quote_double_space: "'a  b'" => [TokenKind::SingleQuoted("a  b".into())],

    // Empty single quotes are a valid empty fragment
    single_quote_empty: "''" => [TokenKind::SingleQuoted("".into())],

    // Everything inside single quotes is literal
    single_quote_preserves_backslash: r"'back\slash'" => [TokenKind::SingleQuoted(r"back\slash".into())],
    single_quote_preserves_double_quote: r#"'has "double" quotes'"# => [TokenKind::SingleQuoted(r#"has "double" quotes"#.into())],
    single_quote_preserves_dollar: "'$HOME'" => [TokenKind::SingleQuoted("$HOME".into())],
    single_quote_preserves_gt: "'>'" => [TokenKind::SingleQuoted(">".into())],
    single_quote_preserves_tab: "'a\tb'" => [TokenKind::SingleQuoted("a\tb".into())],

    // Adjacent fragments lex separately; the parser joins them by span
    single_quote_after_word: "cmd'arg'" => [
        TokenKind::Word("cmd".into()),
        TokenKind::SingleQuoted("arg".into()),
    ],
    word_after_single_quote: "'arg'cmd" => [
        TokenKind::SingleQuoted("arg".into()),
        TokenKind::Word("cmd".into()),
    ],
    single_quote_between_words: "a'b'c" => [
        TokenKind::Word("a".into()),
        TokenKind::SingleQuoted("b".into()),
        TokenKind::Word("c".into()),
    ],
    multiple_single_quotes: "'a''b''c'" => [
        TokenKind::SingleQuoted("a".into()),
        TokenKind::SingleQuoted("b".into()),
        TokenKind::SingleQuoted("c".into()),
    ],

    // Unicode in single quotes
    single_quote_unicode: "'hello 世界'" => [TokenKind::SingleQuoted("hello 世界".into())],

    echo_single_quoted: "echo 'hello'" => [
        TokenKind::Word("echo".into()),
        TokenKind::SingleQuoted("hello".into()),
    ],
}

// =============================================================================
// Double Quote Tests
// =============================================================================

lex_tests! {
    double_quote_basic: r#""hello""# => [TokenKind::DoubleQuoted("hello".into())],
    double_quote_with_spaces: r#""hello world""# => [TokenKind::DoubleQuoted("hello world".into())],
    double_quote_empty: r#""""# => [TokenKind::DoubleQuoted("".into())],

    // Single quotes inside double quotes are literal
    double_quote_preserves_single: r#""it's""# => [TokenKind::DoubleQuoted("it's".into())],
    double_quote_preserves_gt: r#"">""# => [TokenKind::DoubleQuoted(">".into())],

    // Adjacent fragments
    double_quote_after_word: r#"cmd"arg""# => [
        TokenKind::Word("cmd".into()),
        TokenKind::DoubleQuoted("arg".into()),
    ],
    double_quote_between_words: r#"a"b"c"# => [
        TokenKind::Word("a".into()),
        TokenKind::DoubleQuoted("b".into()),
        TokenKind::Word("c".into()),
    ],
    multiple_double_quotes: r#""a""b""c""# => [
        TokenKind::DoubleQuoted("a".into()),
        TokenKind::DoubleQuoted("b".into()),
        TokenKind::DoubleQuoted("c".into()),
    ],

    // Mixed quote styles
    single_then_double: r#"'a'"b""# => [
        TokenKind::SingleQuoted("a".into()),
        TokenKind::DoubleQuoted("b".into()),
    ],
    alternating_quotes: r#"'a'"b"'c'"# => [
        TokenKind::SingleQuoted("a".into()),
        TokenKind::DoubleQuoted("b".into()),
        TokenKind::SingleQuoted("c".into()),
    ],

    echo_mixed_quotes: r#"echo 'single' "double""# => [
        TokenKind::Word("echo".into()),
        TokenKind::SingleQuoted("single".into()),
        TokenKind::DoubleQuoted("double".into()),
    ],
}

// =============================================================================
// Span Tests
// =============================================================================

span_tests! {
    span_single_quote: "'hello'" => [(0, 7)],
    span_double_quote: r#""hello""# => [(0, 7)],
    span_empty_single: "''" => [(0, 2)],
    span_empty_double: r#""""# => [(0, 2)],
    span_word_then_single: "cmd'arg'" => [(0, 3), (3, 8)],
    span_word_then_double: r#"cmd"arg""# => [(0, 3), (3, 8)],
    span_two_single_quotes: "'a' 'b'" => [(0, 3), (4, 7)],
    span_adjacent_quotes: "'a''b'" => [(0, 3), (3, 6)],
}

// =============================================================================
// Error Cases
// =============================================================================

lex_error_tests! {
    unterminated_single_immediate: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_with_content: "'hello" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_after_word: "cmd '" => LexerError::UnterminatedSingleQuote { .. },

    unterminated_double_immediate: "\"" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_with_content: "\"hello" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_after_word: "cmd \"" => LexerError::UnterminatedDoubleQuote { .. },

    // A trailing backslash inside double quotes leaves the quote open
    trailing_backslash_in_double: "\"hello\\" => LexerError::UnterminatedDoubleQuote { .. },
}

// =============================================================================
// Error Span Accuracy Tests
// =============================================================================

#[test]
fn error_span_unterminated_single_quote() {
    let err = Lexer::tokenize("'hello").unwrap_err();
    match err {
        LexerError::UnterminatedSingleQuote { span } => {
            assert_eq!(span.start, 0, "span should start at opening quote");
            assert_eq!(span.end, 6, "span should end at end of content");
        }
        other => panic!("expected UnterminatedSingleQuote, got {:?}", other),
    }
}

#[test]
fn error_span_unterminated_after_word() {
    let err = Lexer::tokenize("cmd 'arg").unwrap_err();
    match err {
        LexerError::UnterminatedSingleQuote { span } => {
            assert_eq!(span.start, 4, "span should start at opening quote");
            assert_eq!(span.end, 8, "span should end at end of content");
        }
        other => panic!("expected UnterminatedSingleQuote, got {:?}", other),
    }
}
