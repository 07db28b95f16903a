// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection setup: opening target files and binding output streams.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::Stdio;

use crate::ast::{RedirectMode, Redirection, Stream};

use super::error::ExecError;

/// Where one output stream of the current command goes.
pub(crate) enum Sink {
    /// Inherit the shell's stdout.
    Stdout,
    /// Inherit the shell's stderr.
    Stderr,
    /// Write to an opened redirection target.
    File(File),
}

impl Sink {
    /// Write one line of built-in output, with the trailing newline.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
                out.flush()
            }
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.write_all(b"\n")?;
                err.flush()
            }
            Sink::File(file) => {
                file.write_all(line.as_bytes())?;
                file.write_all(b"\n")
            }
        }
    }

    /// Convert into a child-process stdio handle.
    pub(crate) fn into_stdio(self) -> Stdio {
        match self {
            Sink::Stdout | Sink::Stderr => Stdio::inherit(),
            Sink::File(file) => Stdio::from(file),
        }
    }
}

/// Stream bindings for one command. Dropping the bindings closes any files
/// opened for redirection.
pub(crate) struct Bindings {
    pub(crate) stdout: Sink,
    pub(crate) stderr: Sink,
}

impl Bindings {
    fn inherit() -> Self {
        Self { stdout: Sink::Stdout, stderr: Sink::Stderr }
    }
}

/// Open redirection targets and compute the stream bindings.
///
/// Every target is opened, in source order, before the command runs: a
/// redirection that is later overridden still creates (or truncates) its
/// file, and a stderr target exists even if the command writes nothing.
/// When several redirections name the same stream the last open wins;
/// earlier handles are dropped, which closes them.
///
/// On an open failure the partial bindings built so far are returned with
/// the error, so the caller can report it on an already-bound stderr.
pub(crate) fn bind_redirections(
    redirections: &[Redirection],
    cwd: &Path,
) -> (Bindings, Option<ExecError>) {
    let mut bindings = Bindings::inherit();

    for redirection in redirections {
        let path = redirection.target.text();
        match open_target(&path, redirection.mode, cwd) {
            Ok(file) => match redirection.stream {
                Stream::Out => bindings.stdout = Sink::File(file),
                Stream::Err => bindings.stderr = Sink::File(file),
            },
            Err(err) => return (bindings, Some(err)),
        }
    }

    (bindings, None)
}

/// Open one redirection target, creating missing parent directories.
fn open_target(path: &str, mode: RedirectMode, cwd: &Path) -> Result<File, ExecError> {
    let append = mode == RedirectMode::Append;
    let resolved = if Path::new(path).is_absolute() {
        Path::new(path).to_path_buf()
    } else {
        cwd.join(path)
    };

    if let Some(parent) = resolved.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| ExecError::Redirect {
                path: path.to_string(),
                append,
                source,
            })?;
        }
    }

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(!append)
        .append(append)
        .open(&resolved)
        .map_err(|source| ExecError::Redirect { path: path.to_string(), append, source })
}
