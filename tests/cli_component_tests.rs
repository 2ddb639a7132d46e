//! End-to-end tests for `--list-components` and `--show-component`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the uxpmkit binary
fn uxpmkit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_uxpmkit")
}

#[test]
fn test_list_components_across_directories() {
    let root = skill_root();
    write_component_md(root.path(), "button", "# Primary Button\n\nBody.\n");
    write_component_json(
        root.path(),
        "dialog",
        r#"{"componentName": "Dialog", "displayName": "Modal Dialog"}"#,
    );
    write_legacy_component(root.path(), "tabs", r#"{"componentName": "tabs"}"#);

    let output = Command::new(uxpmkit_bin())
        .args(["--list-components", "--root", root.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("button"));
    assert!(stdout.contains("Dialog"));
    assert!(stdout.contains("tabs"));
    assert!(stdout.contains("3 component(s)"), "stdout: {stdout}");
}

#[test]
fn test_show_component_markdown_fields() {
    let root = skill_root();
    write_component_md(root.path(), "button", "## Primary Button\nBody.\n");

    let output = Command::new(uxpmkit_bin())
        .args([
            "--show-component",
            "button",
            "--root",
            root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should print valid JSON");
    assert_eq!(value["componentName"], "button");
    assert_eq!(value["displayName"], "Primary Button");
    assert_eq!(value["format"], "markdown");
}

#[test]
fn test_show_component_json_passthrough() {
    let root = skill_root();
    write_component_json(
        root.path(),
        "dialog",
        r#"{"componentName": "Dialog", "props": {"modal": true}}"#,
    );

    let output = Command::new(uxpmkit_bin())
        .args([
            "--show-component",
            "Dialog",
            "--root",
            root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should print valid JSON");
    assert_eq!(value["props"]["modal"], true);
}

#[test]
fn test_preferred_directory_wins_over_legacy() {
    let root = skill_root();
    write_component_md(root.path(), "button", "# New Button\n");
    write_legacy_component(
        root.path(),
        "button",
        r#"{"componentName": "button", "displayName": "Old Button"}"#,
    );

    let output = Command::new(uxpmkit_bin())
        .args([
            "--show-component",
            "button",
            "--root",
            root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["displayName"], "New Button");
}

#[test]
fn test_unparseable_component_files_are_skipped() {
    let root = skill_root();
    write_component_json(root.path(), "broken", "{not json");
    write_component_md(root.path(), "ok", "# Ok Component\n");

    let output = Command::new(uxpmkit_bin())
        .args(["--list-components", "--root", root.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok"));
    assert!(!stdout.contains("broken"));
}

#[test]
fn test_show_component_missing_exits_2() {
    let root = skill_root();

    let output = Command::new(uxpmkit_bin())
        .args([
            "--show-component",
            "ghost",
            "--root",
            root.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Component not found"));
}

#[test]
fn test_list_components_empty_directories() {
    let root = skill_root();

    let output = Command::new(uxpmkit_bin())
        .args(["--list-components", "--root", root.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No component specs"));
}
