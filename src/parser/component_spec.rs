//! Component spec file loading.
//!
//! Specs come from two places, in priority order: the preferred directory
//! (flat `.md`/`.json` files) and the legacy directory (`component-*.json`
//! only). The first file encountered for a given key wins; later
//! duplicates are silently dropped. Unreadable files, unparseable JSON,
//! and JSON whose root is not an object are all skipped, not errors.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::constants::{COMPONENTS_DIR, LEGACY_COMPONENTS_DIR, LEGACY_COMPONENT_PREFIX};
use crate::models::ComponentSpec;

/// Loads all component specs under `root`, first file per key wins.
///
/// Missing directories are treated as empty, not as errors.
///
/// # Errors
///
/// Returns an error only if a directory exists but cannot be listed.
pub fn load_component_specs(root: &Path) -> Result<BTreeMap<String, ComponentSpec>> {
    let mut specs = BTreeMap::new();
    collect_preferred(&root.join(COMPONENTS_DIR), &mut specs)?;
    collect_legacy(&root.join(LEGACY_COMPONENTS_DIR), &mut specs)?;
    Ok(specs)
}

/// Scans the preferred directory for flat `.md` and `.json` spec files.
fn collect_preferred(dir: &Path, specs: &mut BTreeMap<String, ComponentSpec>) -> Result<()> {
    for path in list_files_sorted(dir)? {
        let spec = match path.extension().and_then(|ext| ext.to_str()) {
            Some("md") => parse_markdown_spec(&path),
            Some("json") => parse_json_spec(&path),
            _ => None,
        };
        if let Some(spec) = spec {
            specs.entry(spec.key.clone()).or_insert(spec);
        }
    }
    Ok(())
}

/// Scans the legacy directory for `component-*.json` spec files.
fn collect_legacy(dir: &Path, specs: &mut BTreeMap<String, ComponentSpec>) -> Result<()> {
    for path in list_files_sorted(dir)? {
        let is_legacy_spec = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                name.starts_with(LEGACY_COMPONENT_PREFIX) && name.ends_with(".json")
            });
        if !is_legacy_spec {
            continue;
        }
        if let Some(spec) = parse_json_spec(&path) {
            specs.entry(spec.key.clone()).or_insert(spec);
        }
    }
    Ok(())
}

/// Lists regular files in `dir`, sorted by name for deterministic first-wins.
///
/// A missing directory yields an empty list.
fn list_files_sorted(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(dir)
        .context(format!("Failed to list component directory: {}", dir.display()))?;

    let mut files: Vec<_> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Builds a synthetic spec object from a markdown component description.
///
/// The display name is the first line with leading `#` characters stripped.
fn parse_markdown_spec(path: &Path) -> Option<ComponentSpec> {
    let content = fs::read_to_string(path).ok()?;
    let stem = path.file_stem()?.to_str()?.to_string();

    let first_line = content.lines().next().unwrap_or("");
    let display_name = first_line.trim_start_matches('#').trim().to_string();

    Some(ComponentSpec {
        key: stem.clone(),
        value: json!({
            "componentName": stem,
            "displayName": display_name,
            "format": "markdown",
        }),
        path: path.to_path_buf(),
    })
}

/// Parses a JSON spec file; non-object roots and parse failures are skipped.
fn parse_json_spec(path: &Path) -> Option<ComponentSpec> {
    let content = fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&content).ok()?;
    if !value.is_object() {
        return None;
    }

    let stem = path.file_stem()?.to_str()?.to_string();
    let key = match value.get("componentName").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => stem,
    };

    Some(ComponentSpec {
        key,
        value,
        path: path.to_path_buf(),
    })
}
