// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error cases.

use crate::error::LexerError;
use crate::parse_error::ParseError;
use crate::parser::Parser;

#[test]
fn dangling_operator_is_a_syntax_error() {
    let err = Parser::parse("echo hi >").unwrap_err();
    match err {
        ParseError::MissingRedirectTarget { operator, .. } => assert_eq!(operator, ">"),
        other => panic!("expected MissingRedirectTarget, got {:?}", other),
    }
}

#[yare::parameterized(
    gt = { "echo >" },
    gt_gt = { "echo x >>" },
    fd_err = { "cmd 2>" },
    fd_err_append = { "cmd 2>>" },
)]
fn every_dangling_operator_spelling_errors(input: &str) {
    assert!(matches!(
        Parser::parse(input),
        Err(ParseError::MissingRedirectTarget { .. })
    ));
}

#[test]
fn redirection_without_command_errors() {
    assert!(matches!(
        Parser::parse("> out.txt"),
        Err(ParseError::EmptyCommand { .. })
    ));
}

#[test]
fn unterminated_quote_propagates_from_lexer() {
    assert!(matches!(
        Parser::parse("echo 'oops"),
        Err(ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. }))
    ));
    assert!(matches!(
        Parser::parse("echo \"oops"),
        Err(ParseError::Lexer(LexerError::UnterminatedDoubleQuote { .. }))
    ));
}

#[test]
fn error_display_names_the_operator() {
    let err = Parser::parse("cmd 2>>").unwrap_err();
    assert_eq!(err.to_string(), "redirection operator '2>>' has no target");
}
