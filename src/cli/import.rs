//! Palette import command: merge CSV product palettes into the theme store.

use crate::cli::common::{CliError, CliResult};
use crate::constants::{DEFAULT_COLORS_CSV, THEMES_FILE};
use crate::services::theme_import::import_palettes;
use std::path::PathBuf;

/// Arguments for the `--import-colors` command.
#[derive(Debug, Clone)]
pub struct ImportColorsArgs {
    /// Root directory of the asset tree.
    pub root: PathBuf,
    /// CSV path override; defaults to the data directory under the root.
    pub colors_csv: Option<PathBuf>,
}

impl ImportColorsArgs {
    /// Execute the import and print the run summary.
    pub fn execute(&self) -> CliResult<()> {
        let csv_path = self
            .colors_csv
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_COLORS_CSV));
        let store_path = self.root.join(THEMES_FILE);

        // Both inputs must exist before any processing starts
        if !csv_path.is_file() {
            return Err(CliError::not_found(format!(
                "Colors CSV not found: {}",
                csv_path.display()
            )));
        }
        if !store_path.is_file() {
            return Err(CliError::not_found(format!(
                "Theme store not found: {}",
                store_path.display()
            )));
        }

        let summary = import_palettes(&csv_path, &store_path)
            .map_err(|e| CliError::io(format!("Import failed: {e:#}")))?;

        println!("Processed {} unique palette(s)", summary.unique_palettes);
        println!("Added {} theme(s)", summary.themes_added);
        for name in &summary.skipped {
            println!("Skipped existing theme: {name}");
        }
        println!("Theme store now holds {} theme(s)", summary.total_themes);

        Ok(())
    }
}
