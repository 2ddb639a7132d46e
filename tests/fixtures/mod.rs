//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// CSV header matching the expected import columns.
pub const CSV_HEADER: &str =
    "Product Type,Primary (Hex),Secondary (Hex),CTA (Hex),Background (Hex),Text (Hex),Border (Hex)";

/// The dark SaaS palette row used across import tests.
pub const SAAS_ROW: &str = "SaaS,#2563EB,#1E40AF,#F59E0B,#0B1220,#F8FAFC,#1E293B";

/// Creates a skill asset root with the standard directory layout.
pub fn skill_root() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for sub in ["themes", "components", "components-legacy", "data"] {
        fs::create_dir_all(dir.path().join(sub)).expect("Failed to create asset dir");
    }
    dir
}

/// Writes the theme store JSON under `<root>/themes/themes.json`.
pub fn write_store(root: &Path, json: &str) -> PathBuf {
    let path = root.join("themes").join("themes.json");
    fs::write(&path, json).expect("Failed to write theme store");
    path
}

/// Writes an empty `{"themes":{}}` store.
pub fn write_empty_store(root: &Path) -> PathBuf {
    write_store(root, r#"{"themes":{}}"#)
}

/// Writes a colors CSV at the default import location.
pub fn write_colors_csv(root: &Path, rows: &[&str]) -> PathBuf {
    let path = root.join("data").join("product-colors.csv");
    let mut content = String::from(CSV_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).expect("Failed to write colors CSV");
    path
}

/// Writes a markdown component spec into the preferred directory.
pub fn write_component_md(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join("components").join(format!("{name}.md"));
    fs::write(&path, content).expect("Failed to write component markdown");
    path
}

/// Writes a JSON component spec into the preferred directory.
pub fn write_component_json(root: &Path, file_stem: &str, content: &str) -> PathBuf {
    let path = root.join("components").join(format!("{file_stem}.json"));
    fs::write(&path, content).expect("Failed to write component JSON");
    path
}

/// Writes a `component-*.json` spec into the legacy directory.
pub fn write_legacy_component(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root
        .join("components-legacy")
        .join(format!("component-{name}.json"));
    fs::write(&path, content).expect("Failed to write legacy component JSON");
    path
}

/// Reads the theme store back as a JSON value.
pub fn read_store(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join("themes").join("themes.json"))
        .expect("Failed to read theme store");
    serde_json::from_str(&content).expect("Theme store should be valid JSON")
}
