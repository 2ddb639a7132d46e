//! Product color palette CSV parsing.
//!
//! The CSV is header-driven; fields are looked up by column name so
//! column order does not matter. Rows missing a column read as empty
//! strings rather than being rejected. Rows sharing the same 6-tuple of
//! hex colors (case-insensitive) are deduplicated, first occurrence wins.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Column header for the product label.
const COL_PRODUCT_TYPE: &str = "Product Type";
/// Column header for the primary color.
const COL_PRIMARY: &str = "Primary (Hex)";
/// Column header for the secondary color.
const COL_SECONDARY: &str = "Secondary (Hex)";
/// Column header for the call-to-action color.
const COL_CTA: &str = "CTA (Hex)";
/// Column header for the background color.
const COL_BACKGROUND: &str = "Background (Hex)";
/// Column header for the text color.
const COL_TEXT: &str = "Text (Hex)";
/// Column header for the border color.
const COL_BORDER: &str = "Border (Hex)";

/// One palette row from the product colors CSV.
///
/// Hex fields are kept as raw strings here; conversion and validation
/// happen during import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    /// Product label the palette was sourced from.
    pub product_type: String,
    /// Primary brand color hex.
    pub primary: String,
    /// Secondary brand color hex.
    pub secondary: String,
    /// Call-to-action color hex.
    pub cta: String,
    /// Background color hex.
    pub background: String,
    /// Text color hex.
    pub text: String,
    /// Border color hex.
    pub border: String,
}

impl PaletteRow {
    /// Dedup identity: the upper-cased 6-tuple of hex fields.
    #[must_use]
    pub fn identity(&self) -> String {
        [
            &self.primary,
            &self.secondary,
            &self.cta,
            &self.background,
            &self.text,
            &self.border,
        ]
        .iter()
        .map(|field| field.to_uppercase())
        .collect::<Vec<_>>()
        .join("|")
    }
}

/// Reads the CSV and returns unique palettes in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record cannot be read.
pub fn read_unique_palettes(path: &Path) -> Result<Vec<PaletteRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context(format!("Failed to open colors CSV: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    let column = |name: &str| headers.iter().position(|header| header == name);

    let product_type = column(COL_PRODUCT_TYPE);
    let primary = column(COL_PRIMARY);
    let secondary = column(COL_SECONDARY);
    let cta = column(COL_CTA);
    let background = column(COL_BACKGROUND);
    let text = column(COL_TEXT);
    let border = column(COL_BORDER);

    let mut seen = HashSet::new();
    let mut palettes = Vec::new();

    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let field = |index: Option<usize>| -> String {
            index
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let row = PaletteRow {
            product_type: field(product_type),
            primary: field(primary),
            secondary: field(secondary),
            cta: field(cta),
            background: field(background),
            text: field(text),
            border: field(border),
        };

        if seen.insert(row.identity()) {
            palettes.push(row);
        }
    }

    Ok(palettes)
}
