//! Component spec documents keyed by component name.

use serde_json::Value;
use std::path::PathBuf;

/// A single component description loaded from a markdown or JSON file.
///
/// Markdown files are wrapped in a synthetic JSON object carrying the
/// component name, display name, and a `format` marker; JSON files are
/// kept as parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    /// Lookup key: the `componentName` field, or the filename stem.
    pub key: String,
    /// The spec document as a JSON object.
    pub value: Value,
    /// Source file the spec came from.
    pub path: PathBuf,
}
