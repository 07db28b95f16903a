// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Span;

#[test]
fn messages_name_the_quote_style() {
    let err = LexerError::UnterminatedSingleQuote { span: Span::new(4, 8) };
    assert_eq!(err.to_string(), "unterminated single quote at position 4");

    let err = LexerError::UnterminatedDoubleQuote { span: Span::new(0, 3) };
    assert_eq!(err.to_string(), "unterminated double quote at position 0");
}

#[test]
fn span_accessor_matches_variant() {
    let err = LexerError::UnterminatedDoubleQuote { span: Span::new(2, 6) };
    assert_eq!(err.span(), Span::new(2, 6));
}

#[test]
fn context_renders_carets() {
    let input = "echo 'abc";
    let err = LexerError::UnterminatedSingleQuote { span: Span::new(5, 9) };
    let context = err.context(input, 20);
    assert!(context.contains("echo 'abc"));
    assert!(context.contains("^^^^"));
}
