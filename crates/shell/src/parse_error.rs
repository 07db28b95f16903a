// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexerError;
use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Errors for one command line that failed to parse.
///
/// Use [`ParseError::context`] to generate a human-readable snippet showing
/// where the error occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("redirection operator '{operator}' has no target")]
    MissingRedirectTarget { operator: String, span: Span },

    #[error("redirection without a command at position {}", span.start)]
    EmptyCommand { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer(e) => e.span(),
            ParseError::MissingRedirectTarget { span, .. } => *span,
            ParseError::EmptyCommand { span } => *span,
        }
    }

    /// Generate a context snippet showing where the error occurred.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }
}
