// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for redirection target opening and stream binding.

use super::{read, run, run_async};
use crate::exec::Shell;

#[tokio::test]
async fn truncate_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo hi > out.txt").await;
    run(&mut shell, "echo bye > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "bye\n");
}

#[tokio::test]
async fn append_accumulates_across_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo one >> log.txt").await;
    run(&mut shell, "echo two >> log.txt").await;
    assert_eq!(read(&dir.path().join("log.txt")), "one\ntwo\n");
}

#[tokio::test]
async fn append_creates_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo first >> log.txt").await;
    assert_eq!(read(&dir.path().join("log.txt")), "first\n");
}

#[tokio::test]
async fn stderr_target_is_created_even_without_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo hi > out.txt 2> err.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "hi\n");
    assert_eq!(read(&dir.path().join("err.txt")), "");
}

#[tokio::test]
async fn last_target_wins_but_earlier_ones_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo hi > first.txt > second.txt").await;
    assert_eq!(read(&dir.path().join("second.txt")), "hi\n");
    assert_eq!(read(&dir.path().join("first.txt")), "");
}

#[yare::parameterized(
    truncate = { "echo x > sub/dir/out.txt" },
    append = { "echo x >> sub/dir/out.txt" },
)]
fn missing_parent_directories_are_created(line: &str) {
    run_async(async {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::with_cwd(dir.path());

        run(&mut shell, line).await;
        assert_eq!(read(&dir.path().join("sub/dir/out.txt")), "x\n");
    });
}

#[tokio::test]
async fn open_failure_reports_on_bound_stderr_and_aborts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blocker"), "").unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    // stderr binds first; opening a path under a plain file then fails
    run(&mut shell, "echo hi 2> err.txt > blocker/out.txt").await;
    let err = read(&dir.path().join("err.txt"));
    assert!(
        err.starts_with("cannot open 'blocker/out.txt' for writing:"),
        "unexpected diagnostic: {err}"
    );
    assert!(!dir.path().join("blocker/out.txt").exists());
}

#[tokio::test]
async fn quoted_target_with_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "echo hi > 'out file.txt'").await;
    assert_eq!(read(&dir.path().join("out file.txt")), "hi\n");
}

#[tokio::test]
async fn absolute_target_ignores_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("abs.txt");
    let elsewhere = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(elsewhere.path());

    run(&mut shell, &format!("echo hi > {}", target.display())).await;
    assert_eq!(read(&target), "hi\n");
}
