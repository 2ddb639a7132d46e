//! Component spec commands: list keys, show a single spec.

use crate::cli::common::{CliError, CliResult};
use crate::parser::load_component_specs;
use std::path::PathBuf;

/// Arguments for the `--list-components` command.
#[derive(Debug, Clone)]
pub struct ListComponentsArgs {
    /// Root directory of the asset tree.
    pub root: PathBuf,
}

impl ListComponentsArgs {
    /// Execute the command: print component keys with their source files.
    pub fn execute(&self) -> CliResult<()> {
        let specs = load_component_specs(&self.root)
            .map_err(|e| CliError::io(format!("Failed to load component specs: {e}")))?;

        if specs.is_empty() {
            println!("No component specs found");
            return Ok(());
        }

        for (key, spec) in &specs {
            println!("{key}  ({})", spec.path.display());
        }
        println!();
        println!("{} component(s)", specs.len());

        Ok(())
    }
}

/// Arguments for the `--show-component` command.
#[derive(Debug, Clone)]
pub struct ShowComponentArgs {
    /// Root directory of the asset tree.
    pub root: PathBuf,
    /// Component key to display.
    pub name: String,
}

impl ShowComponentArgs {
    /// Execute the command: print the component spec as JSON.
    pub fn execute(&self) -> CliResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::validation("Component name must not be empty"));
        }

        let specs = load_component_specs(&self.root)
            .map_err(|e| CliError::io(format!("Failed to load component specs: {e}")))?;

        let spec = specs
            .get(name)
            .ok_or_else(|| CliError::not_found(format!("Component not found: {name}")))?;

        println!(
            "{}",
            serde_json::to_string_pretty(&spec.value)
                .map_err(|e| CliError::io(format!("Failed to serialize component spec: {e}")))?
        );

        Ok(())
    }
}
