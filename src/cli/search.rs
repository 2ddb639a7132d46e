//! Free-text search command over the asset tree.

use crate::cli::common::{CliError, CliResult};
use crate::services::search::{search_assets, SearchLimits};
use std::path::PathBuf;

/// Arguments for the free-text search command.
#[derive(Debug, Clone)]
pub struct SearchArgs {
    /// Query string, matched case-insensitively.
    pub query: String,
    /// Root directory of the asset tree.
    pub root: PathBuf,
    /// Maximum line hits reported per matched file.
    pub max_hits: usize,
    /// Stop after this many matched files.
    pub max_files: usize,
}

impl SearchArgs {
    /// Execute the search and print matches grouped by file.
    pub fn execute(&self) -> CliResult<()> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(CliError::validation("Search query must not be empty"));
        }
        if !self.root.is_dir() {
            return Err(CliError::not_found(format!(
                "Asset root not found: {}",
                self.root.display()
            )));
        }

        let limits = SearchLimits {
            max_hits_per_file: self.max_hits,
            max_files: self.max_files,
        };
        let results = search_assets(&self.root, query, limits);

        if results.matches.is_empty() {
            println!("No matches for \"{query}\"");
            return Ok(());
        }

        for file in &results.matches {
            println!("{}", file.path.display());
            if file.hits.is_empty() {
                // Path-only match: keep it visible in the hit listing
                println!("  0: <filename match>");
            }
            for hit in &file.hits {
                println!("  {}: {}", hit.line_number, hit.content);
            }
        }
        println!();
        if results.truncated {
            println!(
                "File limit reached ({}); further files were not scanned",
                self.max_files
            );
        }
        println!("{} matched file(s)", results.matches.len());

        Ok(())
    }
}
