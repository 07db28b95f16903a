// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in commands: `echo`, `exit`, `type`, `pwd`, and `cd`.
//!
//! Built-ins run inside the shell process and write through the same stream
//! bindings as external commands, so their output honors redirections.

use std::io;
use std::path::PathBuf;

use super::path::find_executable;
use super::redirect::Bindings;
use super::{Flow, Shell};

/// The fixed built-in command table. Built-ins shadow external commands of
/// the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Echo,
    Exit,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    /// Look up a command name in the built-in table. Matching is an exact
    /// string comparison on the command name.
    pub(crate) fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "echo" => Some(Builtin::Echo),
            "exit" => Some(Builtin::Exit),
            "type" => Some(Builtin::Type),
            "pwd" => Some(Builtin::Pwd),
            "cd" => Some(Builtin::Cd),
            _ => None,
        }
    }

    /// Run the built-in with the already-split argument words.
    pub(crate) fn run(
        self,
        shell: &mut Shell,
        args: &[String],
        io: &mut Bindings,
    ) -> io::Result<Flow> {
        match self {
            Builtin::Echo => run_echo(args, io),
            Builtin::Exit => run_exit(args, io),
            Builtin::Type => run_type(shell, args, io),
            Builtin::Pwd => run_pwd(shell, io),
            Builtin::Cd => run_cd(shell, args, io),
        }
    }
}

/// `echo ARGS...`: the arguments joined by single spaces, one trailing
/// newline. Quoting was already resolved during word splitting.
fn run_echo(args: &[String], io: &mut Bindings) -> io::Result<Flow> {
    io.stdout.write_line(&args.join(" "))?;
    Ok(Flow::Continue)
}

/// `exit [N]`: terminate the shell with status N (0 when absent).
fn run_exit(args: &[String], io: &mut Bindings) -> io::Result<Flow> {
    match args.first() {
        None => Ok(Flow::Exit(0)),
        Some(arg) => match arg.parse::<i32>() {
            Ok(code) => Ok(Flow::Exit(code)),
            Err(_) => {
                io.stderr.write_line(&format!("exit: {arg}: numeric argument required"))?;
                Ok(Flow::Continue)
            }
        },
    }
}

/// `type NAME...`: report each name as a built-in, as a resolved
/// executable, or as not found.
fn run_type(shell: &Shell, args: &[String], io: &mut Bindings) -> io::Result<Flow> {
    for name in args {
        if Builtin::lookup(name).is_some() {
            io.stdout.write_line(&format!("{name} is a shell builtin"))?;
        } else if let Some(path) = find_executable(name, &shell.cwd) {
            io.stdout.write_line(&format!("{name} is {}", path.display()))?;
        } else {
            io.stderr.write_line(&format!("{name} not found"))?;
        }
    }
    Ok(Flow::Continue)
}

/// `pwd`: the absolute working directory.
fn run_pwd(shell: &Shell, io: &mut Bindings) -> io::Result<Flow> {
    io.stdout.write_line(&shell.cwd.display().to_string())?;
    Ok(Flow::Continue)
}

/// `cd [DIR]`: change the working directory.
///
/// With no argument or `~` the target is the home directory; a `~/` prefix
/// resolves against it. Only existing directories are accepted; on failure
/// the working directory is left unchanged.
fn run_cd(shell: &mut Shell, args: &[String], io: &mut Bindings) -> io::Result<Flow> {
    let arg = args.first().map(String::as_str);

    let target = match arg {
        None | Some("~") => match home_dir() {
            Some(home) => home,
            None => {
                io.stderr.write_line("cd: HOME not set")?;
                return Ok(Flow::Continue);
            }
        },
        Some(dir) => match dir.strip_prefix("~/") {
            Some(rest) => match home_dir() {
                Some(home) => home.join(rest),
                None => {
                    io.stderr.write_line("cd: HOME not set")?;
                    return Ok(Flow::Continue);
                }
            },
            None => shell.cwd.join(dir),
        },
    };

    // Canonicalize so `cd ..` and symlinked paths leave a clean absolute
    // cwd for `pwd` and for relative resolution on later lines.
    match std::fs::canonicalize(&target) {
        Ok(resolved) if resolved.is_dir() => {
            shell.cwd = resolved;
            Ok(Flow::Continue)
        }
        _ => {
            let shown = arg.map(String::from).unwrap_or_else(|| target.display().to_string());
            io.stderr.write_line(&format!("cd: {shown}: No such file or directory"))?;
            Ok(Flow::Continue)
        }
    }
}

/// Home directory from the ambient environment, with a platform fallback
/// for environments that do not export `HOME`.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from).or_else(dirs::home_dir)
}
