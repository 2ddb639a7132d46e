//! Theme store: named token collections persisted as a single JSON document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::ColorToken;

/// A named collection of color tokens plus a human-readable description.
///
/// The theme's name is the key under which it is stored in [`ThemeStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Human-readable provenance, citing the source palette.
    pub description: String,
    /// Token name to color value mapping.
    pub tokens: BTreeMap<String, ColorToken>,
}

/// The on-disk theme store: a JSON object with a top-level `themes` mapping.
///
/// The store is always read fully into memory, mutated by adding themes,
/// and rewritten as a whole file. Existing themes are never overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeStore {
    /// Theme name to theme mapping, kept sorted for stable output.
    #[serde(default)]
    pub themes: BTreeMap<String, Theme>,
}

impl ThemeStore {
    /// Loads the store from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read theme store: {}", path.display()))?;
        let store: Self = serde_json::from_str(&content)
            .context(format!("Malformed theme store JSON: {}", path.display()))?;
        Ok(store)
    }

    /// Saves the store as formatted JSON using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize theme store")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp theme store: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, path).context(format!(
            "Failed to replace theme store: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Whether a theme with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Looks up a theme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Adds a theme under the given name.
    pub fn insert(&mut self, name: String, theme: Theme) {
        self.themes.insert(name, theme);
    }

    /// Number of themes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the store holds no themes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
