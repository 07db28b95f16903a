// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Span;

fn bare(text: &str) -> Word {
    Word {
        parts: vec![WordPart::new(text, QuoteStyle::Unquoted)],
        span: Span::new(0, text.len()),
    }
}

fn quoted(text: &str, style: QuoteStyle) -> Word {
    Word {
        parts: vec![WordPart::new(text, style)],
        span: Span::new(0, text.len() + 2),
    }
}

#[test]
fn word_text_concatenates_parts() {
    let word = Word {
        parts: vec![
            WordPart::new("a", QuoteStyle::Unquoted),
            WordPart::new("b", QuoteStyle::Single),
            WordPart::new("cd", QuoteStyle::Double),
        ],
        span: Span::new(0, 9),
    };
    assert_eq!(word.text(), "abcd");
}

#[test]
fn operator_recognition_covers_all_six() {
    let cases = [
        (">", Stream::Out, RedirectMode::Truncate),
        ("1>", Stream::Out, RedirectMode::Truncate),
        (">>", Stream::Out, RedirectMode::Append),
        ("1>>", Stream::Out, RedirectMode::Append),
        ("2>", Stream::Err, RedirectMode::Truncate),
        ("2>>", Stream::Err, RedirectMode::Append),
    ];
    for (text, stream, mode) in cases {
        assert_eq!(
            bare(text).as_redirect_operator(),
            Some((stream, mode)),
            "operator: {text}"
        );
    }
}

#[test]
fn non_operators_are_not_recognized() {
    for text in [">out", "2", "3>", "->", ">>>", "echo", ""] {
        assert_eq!(bare(text).as_redirect_operator(), None, "text: {text}");
    }
}

#[test]
fn quoted_operator_is_an_argument() {
    assert_eq!(quoted(">", QuoteStyle::Single).as_redirect_operator(), None);
    assert_eq!(quoted(">>", QuoteStyle::Double).as_redirect_operator(), None);
}

#[test]
fn multi_part_word_is_not_an_operator() {
    // `>''` assembles to the text ">" but is not a bare word
    let word = Word {
        parts: vec![
            WordPart::new(">", QuoteStyle::Unquoted),
            WordPart::new("", QuoteStyle::Single),
        ],
        span: Span::new(0, 3),
    };
    assert_eq!(word.as_redirect_operator(), None);
}
