// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command parser: assembles lexed fragments into words and separates
//! arguments from redirections.
//!
//! Redirection operators are recognized only on the assembled word stream,
//! by exact match against the six operator spellings. An operator inside a
//! quoted fragment never triggers a redirection.

use crate::ast::{QuoteStyle, Redirection, SimpleCommand, Word, WordPart};
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::token::{Span, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Parse one input line into a command.
    ///
    /// Returns `Ok(None)` for a blank or all-whitespace line: there is
    /// nothing to run and nothing to report.
    pub fn parse(input: &str) -> Result<Option<SimpleCommand>, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        if tokens.is_empty() {
            return Ok(None);
        }
        let mut parser = Parser { tokens, pos: 0 };
        parser.parse_command().map(Some)
    }

    fn parse_command(&mut self) -> Result<SimpleCommand, ParseError> {
        let words = self.collect_words();
        let start = words.first().map(|w| w.span).unwrap_or_else(|| Span::empty(0));
        let end = words.last().map(|w| w.span).unwrap_or(start);
        let span = start.merge(end);

        let mut argv: Vec<Word> = Vec::new();
        let mut redirections = Vec::new();

        let mut words = words.into_iter();
        while let Some(word) = words.next() {
            match word.as_redirect_operator() {
                Some((stream, mode)) => {
                    let target = words.next().ok_or_else(|| ParseError::MissingRedirectTarget {
                        operator: word.text(),
                        span: word.span,
                    })?;
                    redirections.push(Redirection { stream, mode, target });
                }
                None => argv.push(word),
            }
        }

        let mut argv = argv.into_iter();
        let Some(name) = argv.next() else {
            // Operators consumed every word: redirections with nothing to run
            return Err(ParseError::EmptyCommand { span });
        };

        Ok(SimpleCommand { name, args: argv.collect(), redirections, span })
    }

    /// Assemble fragment tokens into words.
    ///
    /// Fragments whose spans touch (no intervening whitespace) belong to the
    /// same word; quoting style is preserved per fragment.
    fn collect_words(&mut self) -> Vec<Word> {
        let mut words = Vec::new();
        while let Some(first) = self.advance() {
            let start = first.span.start;
            let mut end = first.span.end;
            let mut parts = vec![Self::token_part(&first)];

            while let Some(next) = self.peek() {
                if next.span.start != end {
                    break;
                }
                end = next.span.end;
                parts.push(Self::token_part(next));
                self.pos += 1;
            }

            words.push(Word { parts, span: Span::new(start, end) });
        }
        words
    }

    fn token_part(token: &Token) -> WordPart {
        match &token.kind {
            TokenKind::Word(s) => WordPart::new(s.clone(), QuoteStyle::Unquoted),
            TokenKind::SingleQuoted(s) => WordPart::new(s.clone(), QuoteStyle::Single),
            TokenKind::DoubleQuoted(s) => WordPart::new(s.clone(), QuoteStyle::Double),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
