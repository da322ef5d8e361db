//! Tests for validation failures and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("gantry") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--verbose",
            "create",
            "-n",
            "web",
            "-g",
            "rg1",
            "--dry-run",
        ])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_gantry") || out.contains("complete"));
}

#[test]
fn test_secret_without_equals_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--secrets", "not-a-secret"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "key=value");
}

#[test]
fn test_mount_path_with_colon_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--azure-file-volume-mount-path", "C:/mnt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot contain ':'");
}

#[test]
fn test_gitrepo_dir_traversal_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--gitrepo-dir", "../etc"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot contain '..'");
}

#[test]
fn test_vnet_without_subnet_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--vnet", "vnet1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--vnet NAME --subnet NAME");
}

#[test]
fn test_vnet_with_subnet_succeeds() {
    let t = Test::new();

    let output = t.create_dry_run(&["--vnet", "vnet1", "--subnet", "default"]);
    assert_success(&output);
}

#[test]
fn test_scope_without_assign_identity_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--scope", "/subscriptions/0b1f6471"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--assign-identity");
}

#[test]
fn test_role_without_scope_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--assign-identity", "--role", "Reader"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "'--scope' is not provided");
}

#[test]
fn test_network_profile_with_dns_label_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&[
        "--network-profile",
        "np1",
        "--dns-name-label",
        "demo",
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--dns-name-label");
}

#[test]
fn test_network_profile_with_public_ip_fails() {
    let t = Test::new();

    let output = t.create_dry_run(&["--network-profile", "np1", "--ip-address", "public"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "IP address type");
}
