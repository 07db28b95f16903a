// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for command selection: built-in table, PATH lookup, and external
//! process supervision.

use super::{read, run};
use crate::exec::{Flow, Shell};

#[tokio::test]
async fn unknown_command_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    let flow = run(&mut shell, "no-such-tool-xyz 2> err.txt").await;
    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        read(&dir.path().join("err.txt")),
        "no-such-tool-xyz: command not found\n"
    );
}

#[tokio::test]
async fn not_found_diagnostic_honors_stderr_redirection() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "no-such-tool-xyz 2>> err.txt").await;
    run(&mut shell, "no-such-tool-xyz 2>> err.txt").await;
    assert_eq!(
        read(&dir.path().join("err.txt")),
        "no-such-tool-xyz: command not found\nno-such-tool-xyz: command not found\n"
    );
}

#[tokio::test]
async fn external_stdout_binds_to_redirection_target() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "sh -c 'echo from-sh' > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "from-sh\n");
}

#[tokio::test]
async fn external_stderr_binds_independently() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "sh -c 'echo oops >&2' > out.txt 2> err.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "");
    assert_eq!(read(&dir.path().join("err.txt")), "oops\n");
}

#[tokio::test]
async fn external_runs_in_the_shell_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "").unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    run(&mut shell, "ls > out.txt").await;
    assert!(read(&dir.path().join("out.txt")).contains("marker.txt"));
}

#[tokio::test]
async fn external_failure_does_not_stop_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::with_cwd(dir.path());

    let flow = run(&mut shell, "sh -c 'exit 9'").await;
    assert_eq!(flow, Flow::Continue);

    // The shell still dispatches the next command normally
    run(&mut shell, "echo still-here > out.txt").await;
    assert_eq!(read(&dir.path().join("out.txt")), "still-here\n");
}

#[cfg(unix)]
mod lookup {
    use std::os::unix::fs::PermissionsExt;

    use crate::exec::Shell;

    use super::super::{read, run};

    fn write_script(path: &std::path::Path, mode: u32) {
        std::fs::write(path, "#!/bin/sh\necho ran\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[tokio::test]
    async fn path_with_separator_resolves_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        write_script(&dir.path().join("bin/tool"), 0o755);
        let mut shell = Shell::with_cwd(dir.path());

        run(&mut shell, "bin/tool > out.txt").await;
        assert_eq!(read(&dir.path().join("out.txt")), "ran\n");
    }

    #[tokio::test]
    async fn non_executable_file_is_not_a_command() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        write_script(&dir.path().join("bin/tool"), 0o644);
        let mut shell = Shell::with_cwd(dir.path());

        run(&mut shell, "bin/tool 2> err.txt").await;
        assert_eq!(read(&dir.path().join("err.txt")), "bin/tool: command not found\n");
    }

    #[tokio::test]
    async fn absolute_path_runs_directly() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("tool");
        write_script(&tool, 0o755);
        let mut shell = Shell::with_cwd(dir.path());

        run(&mut shell, &format!("{} > out.txt", tool.display())).await;
        assert_eq!(read(&dir.path().join("out.txt")), "ran\n");
    }
}
