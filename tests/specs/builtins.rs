// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command specs at the binary level.

use crate::prelude::Session;

#[test]
fn echo_joins_arguments_with_single_spaces() {
    Session::new()
        .line("echo hello world")
        .run()
        .passes()
        .stdout_has("hello world\n");
}

#[test]
fn echo_resolves_quoting_before_printing() {
    Session::new()
        .line(r#"echo 'a  b'  "c\"d""#)
        .run()
        .passes()
        .stdout_has("a  b c\"d\n");
}

#[test]
fn echo_concatenates_adjacent_fragments() {
    Session::new()
        .line(r#"echo a'b'c"d""#)
        .run()
        .passes()
        .stdout_has("abcd\n");
}

#[test]
fn type_distinguishes_builtins_externals_and_misses() {
    Session::new()
        .line("type echo")
        .line("type sh")
        .line("type nosuch")
        .run()
        .passes()
        .stdout_has("echo is a shell builtin\n")
        .stdout_has("sh is /")
        .stderr_has("nosuch not found\n");
}

#[test]
fn pwd_prints_the_absolute_working_directory() {
    let session = Session::new();
    let expected = format!("{}\n", session.canonical_path().display());
    session.line("pwd").run().passes().stdout_has(&expected);
}

#[test]
fn cd_persists_across_repl_iterations() {
    let session = Session::new();
    session.seed_dir("sub");
    let expected = format!("{}\n", session.canonical_path().join("sub").display());
    session
        .line("cd sub")
        .line("pwd")
        .run()
        .passes()
        .stdout_has(&expected);
}

#[test]
fn cd_to_missing_directory_reports_and_stays_put() {
    let session = Session::new();
    let expected = format!("{}\n", session.canonical_path().display());
    session
        .line("cd nowhere")
        .line("pwd")
        .run()
        .passes()
        .stderr_has("cd: nowhere: No such file or directory\n")
        .stdout_has(&expected);
}

#[test]
fn pwd_then_cd_roundtrip_keeps_the_directory() {
    let session = Session::new().line("pwd > out.txt");
    let expected = format!("{}\n", session.canonical_path().display());
    session.run().passes();
    let printed = session.file("out.txt");
    assert_eq!(printed, expected);

    // Feeding the printed path back into cd lands in the same place
    Session::new()
        .line(&format!("cd {}", printed.trim_end()))
        .line("pwd")
        .run()
        .passes()
        .stdout_has(&printed);
}
