//! uxpmkit - search and inspect UXPM design reference assets.
//!
//! A single flag-dispatched entry point over the asset tree: free-text
//! search, theme store inspection, component spec inspection, and the
//! CSV palette importer.

use clap::Parser;
use std::path::PathBuf;

use uxpmkit::cli::{
    CliError, CliResult, ImportColorsArgs, ListComponentsArgs, ListThemesArgs, SearchArgs,
    ShowComponentArgs, ShowThemeArgs,
};
use uxpmkit::constants::{APP_BINARY_NAME, DEFAULT_MAX_FILES, DEFAULT_MAX_HITS};

/// Search and inspect UXPM design reference assets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Free-text search query over the asset tree
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Root directory of the skill assets
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Maximum line hits reported per matched file
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_HITS)]
    max_hits: usize,

    /// Stop searching after this many matched files
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_FILES)]
    max_files: usize,

    /// List theme names in the theme store
    #[arg(long)]
    list_themes: bool,

    /// Print a theme from the store as JSON
    #[arg(long, value_name = "NAME")]
    show_theme: Option<String>,

    /// Narrow --show-theme output to a single token
    #[arg(long, value_name = "NAME", requires = "show_theme")]
    token: Option<String>,

    /// List component spec keys
    #[arg(long)]
    list_components: bool,

    /// Print a component spec as JSON
    #[arg(long, value_name = "NAME")]
    show_component: Option<String>,

    /// Import product color palettes from CSV into the theme store
    #[arg(long)]
    import_colors: bool,

    /// CSV file for --import-colors (default: <root>/data/product-colors.csv)
    #[arg(long, value_name = "PATH", requires = "import_colors")]
    colors_csv: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = dispatch(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}

/// Routes the parsed flags to a command, in fixed precedence order.
fn dispatch(cli: &Cli) -> CliResult<()> {
    if cli.list_themes {
        return ListThemesArgs {
            root: cli.root.clone(),
        }
        .execute();
    }

    if let Some(name) = &cli.show_theme {
        return ShowThemeArgs {
            root: cli.root.clone(),
            name: name.clone(),
            token: cli.token.clone(),
        }
        .execute();
    }

    if cli.list_components {
        return ListComponentsArgs {
            root: cli.root.clone(),
        }
        .execute();
    }

    if let Some(name) = &cli.show_component {
        return ShowComponentArgs {
            root: cli.root.clone(),
            name: name.clone(),
        }
        .execute();
    }

    if cli.import_colors {
        return ImportColorsArgs {
            root: cli.root.clone(),
            colors_csv: cli.colors_csv.clone(),
        }
        .execute();
    }

    if let Some(query) = &cli.query {
        return SearchArgs {
            query: query.clone(),
            root: cli.root.clone(),
            max_hits: cli.max_hits,
            max_files: cli.max_files,
        }
        .execute();
    }

    Err(CliError::validation(format!(
        "No command given. Provide a search query or one of the inspection flags; \
         see '{APP_BINARY_NAME} --help'"
    )))
}
