// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed command types: words assembled from fragments, redirections, and
//! the simple command that the executor runs.

use std::fmt;

use crate::token::Span;

/// Quoting style of a word fragment.
///
/// Preserved from lexing so the parser can tell a bare `>` (a redirection
/// operator) from a quoted `'>'` (an ordinary argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Unquoted fragment.
    #[default]
    Unquoted,
    /// Single-quoted fragment.
    Single,
    /// Double-quoted fragment.
    Double,
}

/// A fragment of a word with its quoting style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPart {
    /// The fragment text, with all quoting and escapes already resolved.
    pub value: String,
    /// How this fragment was quoted in the source.
    pub quoted: QuoteStyle,
}

impl WordPart {
    pub fn new(value: impl Into<String>, quoted: QuoteStyle) -> Self {
        Self { value: value.into(), quoted }
    }
}

/// One argument word, possibly glued together from adjacent fragments
/// (`a'b'c"d"` is a single word with three fragments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The fragments that make up this word, in source order.
    pub parts: Vec<WordPart>,
    /// Source span covering all fragments.
    pub span: Span,
}

impl Word {
    /// The full argument text of this word.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.value.as_str()).collect()
    }

    /// True when the word is a single unquoted fragment. Only bare words can
    /// act as redirection operators.
    pub fn is_bare(&self) -> bool {
        self.parts.len() == 1 && self.parts[0].quoted == QuoteStyle::Unquoted
    }

    /// Interpret this word as a redirection operator, if it is one.
    ///
    /// Operators are recognized by exact match on a bare word; any quoting
    /// makes the word an ordinary argument.
    pub fn as_redirect_operator(&self) -> Option<(Stream, RedirectMode)> {
        if !self.is_bare() {
            return None;
        }
        match self.parts[0].value.as_str() {
            ">" | "1>" => Some((Stream::Out, RedirectMode::Truncate)),
            ">>" | "1>>" => Some((Stream::Out, RedirectMode::Append)),
            "2>" => Some((Stream::Err, RedirectMode::Truncate)),
            "2>>" => Some((Stream::Err, RedirectMode::Append)),
            _ => None,
        }
    }
}

/// Writable stream a redirection applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Standard output (fd 1).
    Out,
    /// Standard error (fd 2).
    Err,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Out => write!(f, "stdout"),
            Stream::Err => write!(f, "stderr"),
        }
    }
}

/// How the redirection target file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// `>`: truncate existing content.
    Truncate,
    /// `>>`: append to existing content.
    Append,
}

/// An output redirection attached to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    /// The stream being redirected.
    pub stream: Stream,
    /// Open mode for the target file.
    pub mode: RedirectMode,
    /// Target path word.
    pub target: Word,
}

/// A parsed command: a name, its arguments, and its redirections.
///
/// Redirections are kept in source order; when several target the same
/// stream the executor opens each one and binds the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    /// The command name (first non-operator word).
    pub name: Word,
    /// Remaining argument words.
    pub args: Vec<Word>,
    /// Redirections in source order.
    pub redirections: Vec<Redirection>,
    /// Source span covering the entire command.
    pub span: Span,
}

impl SimpleCommand {
    /// Argument texts (not including the command name).
    pub fn arg_texts(&self) -> Vec<String> {
        self.args.iter().map(Word::text).collect()
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
