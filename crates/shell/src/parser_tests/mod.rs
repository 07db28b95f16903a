// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests: word assembly, redirection recognition, and error cases.

mod errors;
mod redirections;
mod words;

use crate::ast::SimpleCommand;
use crate::parser::Parser;

/// Parse a line that must produce a command.
pub(crate) fn parse(input: &str) -> SimpleCommand {
    match Parser::parse(input) {
        Ok(Some(cmd)) => cmd,
        other => panic!("expected a command for {:?}, got {:?}", input, other),
    }
}

/// Collected argv texts: the command name followed by each argument.
pub(crate) fn argv(cmd: &SimpleCommand) -> Vec<String> {
    std::iter::once(cmd.name.text())
        .chain(cmd.args.iter().map(|w| w.text()))
        .collect()
}
