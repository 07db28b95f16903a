// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for lexed input lines.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the input line.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    /// Extract the spanned text from the input line.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Generate a context snippet showing an error location in the input line.
///
/// Returns the relevant portion of input with carets pointing to the span:
///
/// ```text
/// echo 'oops
///      ^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    // Context boundaries must land on UTF-8 character boundaries
    let start = input[..span.start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);

    let end = input[span.start..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| span.start + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = span.start - start;
    let caret_len = (span.end - span.start).max(1);

    format!("{}\n{}{}", snippet, " ".repeat(caret_pos), "^".repeat(caret_len))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
