// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted fragments).

use super::Lexer;
use crate::error::LexerError;
use crate::token::{Span, Token, TokenKind};

impl Lexer<'_> {
    /// Lex a single-quoted fragment. Content is preserved literally with no
    /// escape processing; the only way out is the matching quote.
    pub(super) fn lex_single_quote(&mut self, start: usize) -> Result<Token, LexerError> {
        self.chars.next(); // consume opening '
        let content_start = start + 1;
        let mut content_end = content_start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\'' {
                let content = self.input[content_start..content_end].to_string();
                self.chars.next(); // consume closing '
                return Ok(Token::new(
                    TokenKind::SingleQuoted(content),
                    Span::new(start, pos + 1),
                ));
            }
            content_end = pos + ch.len_utf8();
            self.chars.next();
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, content_end) })
    }

    /// Lex a double-quoted fragment.
    ///
    /// Only `\"`, `\\`, `\$`, a backslashed backtick, and a backslashed
    /// newline are escapes: the backslash is dropped and the character kept
    /// (the newline pair is dropped entirely). Before any other character the
    /// backslash has no special meaning and is preserved literally.
    pub(super) fn lex_double_quote(&mut self, start: usize) -> Result<Token, LexerError> {
        self.chars.next(); // consume opening "
        let mut content = String::new();
        let mut last_pos = start + 1;

        while let Some(&(pos, ch)) = self.chars.peek() {
            last_pos = pos + ch.len_utf8();
            match ch {
                '"' => {
                    self.chars.next();
                    return Ok(Token::new(
                        TokenKind::DoubleQuoted(content),
                        Span::new(start, pos + 1),
                    ));
                }
                '\\' => {
                    self.chars.next();
                    match self.peek_char() {
                        Some(esc @ ('"' | '\\' | '$' | '`')) => {
                            content.push(esc);
                            self.chars.next();
                        }
                        Some('\n') => {
                            self.chars.next();
                        }
                        Some(other) => {
                            content.push('\\');
                            content.push(other);
                            self.chars.next();
                        }
                        // Trailing backslash: the quote is unterminated anyway
                        None => break,
                    }
                }
                _ => {
                    content.push(ch);
                    self.chars.next();
                }
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, last_pos) })
    }
}
