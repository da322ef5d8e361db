//! Tests for the create command's dry-run path.
//!
//! Everything here stays offline: role UUIDs and fully-qualified ids never
//! touch the authorization API, and `--dry-run` skips the final PUT.

use crate::support::*;

#[test]
fn test_dry_run_minimal() {
    let t = Test::new();

    let output = t.create_dry_run(&["--image", "nginx:latest"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("\"location\""));
    assert!(out.contains("eastus"));
    assert!(out.contains("nginx:latest"));
    assert!(out.contains("dry run"));
}

#[test]
fn test_dry_run_encodes_secrets() {
    let t = Test::new();

    let output = t.create_dry_run(&["--secrets", "API_KEY=hunter2", "DB=postgres://x"]);
    assert_success(&output);
    let out = stdout(&output);
    // base64("hunter2")
    assert!(out.contains("aHVudGVyMg=="));
    assert!(!out.contains("hunter2"), "secret value leaked unencoded");
}

#[test]
fn test_dry_run_uuid_role_resolves_offline() {
    let t = Test::new();

    let output = t.create_dry_run(&[
        "--subscription",
        "0b1f6471",
        "--assign-identity",
        "--scope",
        "/subscriptions/0b1f6471/resourceGroups/rg1",
        "--role",
        "acdd72a7-3385-48ef-bd42-f606fba81ae7",
    ]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("SystemAssigned"));
}

#[test]
fn test_network_profile_short_name_is_qualified() {
    let t = Test::new();

    let output = t.create_dry_run(&["--subscription", "0b1f6471", "--network-profile", "np1"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains(
        "/subscriptions/0b1f6471/resourceGroups/rg1/providers/Microsoft.Network/networkProfiles/np1"
    ));
}

#[test]
fn test_network_profile_requires_subscription() {
    let t = Test::new();

    // No flag, no env, no .gantry.toml: qualifying the short name must fail.
    let output = t.create_dry_run(&["--network-profile", "np1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config error");
}

#[test]
fn test_subscription_from_config_file() {
    let t = Test::new();

    std::fs::write(
        t.dir.path().join(".gantry.toml"),
        "[cloud]\nsubscription = \"cfg-sub\"\n",
    )
    .unwrap();

    let output = t.create_dry_run(&["--network-profile", "np1"]);
    assert_success(&output);
    assert!(stdout(&output).contains("/subscriptions/cfg-sub/"));
}

#[test]
fn test_short_running_image_warns_but_succeeds() {
    let t = Test::new();

    let output = t.create_dry_run(&["--image", "alpine:latest"]);
    assert_success(&output);
    let combined = format!("{}{}", stdout(&output), stderr(&output));
    assert!(combined.contains("long-running process"));
}

#[test]
fn test_custom_image_does_not_warn() {
    let t = Test::new();

    let output = t.create_dry_run(&["--image", "myregistry/custom:1"]);
    assert_success(&output);
    let combined = format!("{}{}", stdout(&output), stderr(&output));
    assert!(!combined.contains("long-running process"));
}
