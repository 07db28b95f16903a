// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_and_len() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
}

#[test]
fn empty_span() {
    let span = Span::empty(4);
    assert_eq!(span.start, 4);
    assert_eq!(span.end, 4);
    assert!(span.is_empty());
}

#[test]
fn merge_covers_both() {
    let a = Span::new(2, 4);
    let b = Span::new(6, 9);
    assert_eq!(a.merge(b), Span::new(2, 9));
    assert_eq!(b.merge(a), Span::new(2, 9));
}

#[test]
fn slice_extracts_text() {
    let input = "echo hello";
    assert_eq!(Span::new(5, 10).slice(input), "hello");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(3, 99).slice("ab"), "");
}

#[test]
fn context_snippet_points_at_span() {
    let input = "echo 'oops";
    let snippet = context_snippet(input, Span::new(5, 10), 20);
    assert_eq!(snippet, "echo 'oops\n     ^^^^^");
}

#[test]
fn context_snippet_trims_long_input() {
    let input = "aaaaaaaaaaaaaaaaaaaaX";
    let snippet = context_snippet(input, Span::new(20, 21), 5);
    let first_line = snippet.lines().next().unwrap_or("");
    assert!(first_line.len() < input.len(), "snippet should be trimmed");
    assert!(first_line.contains('X'));
}
