//! CLI command handlers for uxpmkit.
//!
//! Each command is a small args struct with an `execute` method; the
//! binary entry point builds these from parsed flags and dispatches.

pub mod common;
pub mod component;
pub mod import;
pub mod search;
pub mod theme;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use component::{ListComponentsArgs, ShowComponentArgs};
pub use import::ImportColorsArgs;
pub use search::SearchArgs;
pub use theme::{ListThemesArgs, ShowThemeArgs};
