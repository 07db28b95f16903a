// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command tests. Output is asserted through redirection targets so
//! nothing leaks to the test harness streams.

use super::{read, run, run_async};
use crate::exec::{Flow, Shell};

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_joins_args_with_single_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo hello world > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "hello world\n");
}

#[tokio::test]
async fn echo_without_args_prints_empty_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "\n");
}

#[tokio::test]
async fn echo_preserves_quoted_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, r#"echo 'a  b'  "c\"d" > out.txt"#).await;
    assert_eq!(read(&dir.path().join("out.txt")), "a  b c\"d\n");
}

#[tokio::test]
async fn echo_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo same >> log.txt").await;
    run(&mut shell, "echo same >> log.txt").await;
    assert_eq!(read(&dir.path().join("log.txt")), "same\nsame\n");
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn exit_without_args_is_status_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    assert_eq!(run(&mut shell, "exit").await, Flow::Exit(0));
}

#[yare::parameterized(
    positive = { "exit 7", 7 },
    zero = { "exit 0", 0 },
    negative = { "exit -3", -3 },
)]
fn exit_parses_signed_status(line: &str, expected: i32) {
    run_async(async {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::with_cwd(dir.path());
        assert_eq!(run(&mut shell, line).await, Flow::Exit(expected));
    });
}

#[tokio::test]
async fn exit_with_bad_operand_keeps_running() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    let flow = run(&mut shell, "exit banana 2> err.txt").await;
    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        read(&dir.path().join("err.txt")),
        "exit: banana: numeric argument required\n"
    );
}

#[tokio::test]
async fn exit_still_precreates_redirection_targets() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    assert_eq!(run(&mut shell, "exit 5 > out.txt").await, Flow::Exit(5));
    assert_eq!(read(&dir.path().join("out.txt")), "");
}

// ---------------------------------------------------------------------------
// type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn type_reports_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "type echo > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "echo is a shell builtin\n");
}

#[tokio::test]
async fn type_prefers_builtin_over_path_executable() {
    // `echo` exists on PATH almost everywhere; the builtin must shadow it
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "type echo cd pwd > out.txt").await;
    assert_eq!(
        read(&dir.path().join("out.txt")),
        "echo is a shell builtin\ncd is a shell builtin\npwd is a shell builtin\n"
    );
}

#[tokio::test]
async fn type_resolves_externals_to_absolute_paths() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "type sh > out.txt").await;
    let output = read(&dir.path().join("out.txt"));
    assert!(output.starts_with("sh is /"), "unexpected output: {output}");
    assert!(output.trim_end().ends_with("/sh"), "unexpected output: {output}");
}

#[tokio::test]
async fn type_reports_misses_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "type no-such-tool-xyz 2> err.txt").await;
    assert_eq!(read(&dir.path().join("err.txt")), "no-such-tool-xyz not found\n");
}

// ---------------------------------------------------------------------------
// pwd / cd
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pwd_prints_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "pwd > out.txt").await;
    assert_eq!(
        read(&dir.path().join("out.txt")),
        format!("{}\n", dir.path().display())
    );
}

#[tokio::test]
async fn cd_changes_directory_for_later_lines() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "cd sub").await;
    let expected = std::fs::canonicalize(dir.path().join("sub")).unwrap();
    assert_eq!(shell.cwd(), expected);

    // Relative targets now resolve against the new directory
    run(&mut shell, "echo here > marker.txt").await;
    assert_eq!(read(&expected.join("marker.txt")), "here\n");
}

#[tokio::test]
async fn cd_dotdot_normalizes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let root = std::fs::canonicalize(dir.path()).unwrap();
    let mut shell = Shell::with_cwd(&root);

    run(&mut shell, "cd sub").await;
    run(&mut shell, "cd ..").await;
    assert_eq!(shell.cwd(), root);
}

#[tokio::test]
async fn cd_missing_path_reports_and_keeps_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "cd nowhere 2> err.txt").await;
    assert_eq!(
        read(&dir.path().join("err.txt")),
        "cd: nowhere: No such file or directory\n"
    );
    assert_eq!(shell.cwd(), dir.path());
}

#[tokio::test]
async fn cd_rejects_plain_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("plain.txt"), "x").unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "cd plain.txt 2> err.txt").await;
    assert_eq!(
        read(&dir.path().join("err.txt")),
        "cd: plain.txt: No such file or directory\n"
    );
    assert_eq!(shell.cwd(), dir.path());
}

#[tokio::test]
async fn cd_tilde_goes_home() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let Ok(expected) = std::fs::canonicalize(&home) else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "cd ~").await;
    assert_eq!(shell.cwd(), expected);
}

#[tokio::test]
async fn pwd_then_cd_roundtrip_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let root = std::fs::canonicalize(dir.path()).unwrap();
    let mut shell = Shell::with_cwd(&root);

    run(&mut shell, "pwd > out.txt").await;
    let printed = read(&root.join("out.txt"));
    run(&mut shell, &format!("cd {}", printed.trim_end())).await;
    assert_eq!(shell.cwd(), root);
}
