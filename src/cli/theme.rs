//! Theme store inspection commands: list themes, show a theme or token.

use crate::cli::common::{CliError, CliResult};
use crate::constants::THEMES_FILE;
use crate::models::ThemeStore;
use std::path::{Path, PathBuf};

/// Arguments for the `--list-themes` command.
#[derive(Debug, Clone)]
pub struct ListThemesArgs {
    /// Root directory of the asset tree.
    pub root: PathBuf,
}

impl ListThemesArgs {
    /// Execute the command: print theme names with their token counts.
    pub fn execute(&self) -> CliResult<()> {
        let store = load_store(&self.root)?;

        if store.is_empty() {
            println!("No themes in store");
            return Ok(());
        }

        for (name, theme) in &store.themes {
            println!("{name}  ({} tokens)", theme.tokens.len());
        }
        println!();
        println!("{} theme(s)", store.len());

        Ok(())
    }
}

/// Arguments for the `--show-theme` command.
#[derive(Debug, Clone)]
pub struct ShowThemeArgs {
    /// Root directory of the asset tree.
    pub root: PathBuf,
    /// Theme name to display.
    pub name: String,
    /// Narrow the output to a single token.
    pub token: Option<String>,
}

impl ShowThemeArgs {
    /// Execute the command: print the theme (or one token) as JSON.
    pub fn execute(&self) -> CliResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::validation("Theme name must not be empty"));
        }

        let store = load_store(&self.root)?;
        let theme = store
            .get(name)
            .ok_or_else(|| CliError::not_found(format!("Theme not found: {name}")))?;

        if let Some(token_name) = &self.token {
            let token_name = token_name.trim();
            if token_name.is_empty() {
                return Err(CliError::validation("Token name must not be empty"));
            }
            let token = theme.tokens.get(token_name).ok_or_else(|| {
                CliError::not_found(format!("Token not found: {token_name} in theme {name}"))
            })?;
            println!(
                "{}",
                serde_json::to_string_pretty(token)
                    .map_err(|e| CliError::io(format!("Failed to serialize token: {e}")))?
            );
        } else {
            println!(
                "{}",
                serde_json::to_string_pretty(theme)
                    .map_err(|e| CliError::io(format!("Failed to serialize theme: {e}")))?
            );
        }

        Ok(())
    }
}

/// Loads the theme store under `root`, mapping failures to CLI errors.
///
/// A missing store file is not-found; unreadable or malformed content is
/// a fatal parse error.
pub fn load_store(root: &Path) -> CliResult<ThemeStore> {
    let path = root.join(THEMES_FILE);
    if !path.is_file() {
        return Err(CliError::not_found(format!(
            "Theme store not found: {}",
            path.display()
        )));
    }
    ThemeStore::load(&path).map_err(|e| CliError::parse(format!("{e:#}")))
}
