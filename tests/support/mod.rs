//! Test support utilities for gantry integration tests.
//!
//! Each test gets its own temporary working directory so no `.gantry.toml`
//! or ambient environment leaks in; child processes use `.current_dir()`
//! so tests can safely run in parallel.

#![allow(dead_code)]

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a gantry command isolated from the caller's cloud context.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gantry").expect("failed to find gantry binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("GANTRY_SUBSCRIPTION");
        cmd.env_remove("GANTRY_ENDPOINT");
        cmd.env_remove("GANTRY_TOKEN");
        cmd.env_remove("AZURE_ACCESS_TOKEN");
        cmd.env_remove("GANTRY_LOG");
        cmd
    }

    /// Run `gantry create --dry-run` for group `web` in `rg1` with extra args.
    pub fn create_dry_run(&self, extra: &[&str]) -> Output {
        self.cmd()
            .args(["create", "-n", "web", "-g", "rg1", "--dry-run"])
            .args(extra)
            .output()
            .expect("failed to run gantry create")
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}
