//! CSV-to-theme import: palette classification, token derivation, and
//! merge into the theme store.
//!
//! Each unique palette is classified dark or light by the relative
//! luminance of its background, named after its sanitized product label,
//! and expanded into a fixed token set. Existing theme names are never
//! overwritten. The store is rewritten once, atomically, after all
//! palettes have been processed, so a failed conversion leaves the store
//! untouched.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::{
    DARK_GLASS_ALPHA, DARK_LUMINANCE_THRESHOLD, DARK_SURFACE_ALT_BLEND, DARK_SURFACE_BLEND,
    DARK_THEME_PREFIX, DEFAULT_LABEL, LIGHT_GLASS_ALPHA, LIGHT_SURFACE_ALT_BLEND,
    LIGHT_THEME_PREFIX, OVERLAY_ALPHA, TEXT_SECONDARY_BLEND,
};
use crate::models::{ColorToken, RgbColor, Theme, ThemeStore};
use crate::parser::palette_csv::{self, PaletteRow};

/// Overlay color for light themes: a translucent dark navy.
const LIGHT_OVERLAY: RgbColor = RgbColor::new(15, 23, 42);

/// Counts reported after an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Unique palettes found in the CSV after dedup.
    pub unique_palettes: usize,
    /// Themes actually added to the store.
    pub themes_added: usize,
    /// Total themes in the store after the merge.
    pub total_themes: usize,
    /// Generated names that already existed and were left untouched.
    pub skipped: Vec<String>,
}

/// Imports unique palettes from `csv_path` into the store at `store_path`.
///
/// # Errors
///
/// Returns an error if the CSV or store cannot be read, a hex field fails
/// to convert, or the store cannot be written back.
pub fn import_palettes(csv_path: &Path, store_path: &Path) -> Result<ImportSummary> {
    let palettes = palette_csv::read_unique_palettes(csv_path)?;
    let mut store = ThemeStore::load(store_path)?;

    let mut themes_added = 0;
    let mut skipped = Vec::new();

    for row in &palettes {
        let background = RgbColor::from_hex(&row.background).context(format!(
            "Invalid background color for product '{}'",
            row.product_type
        ))?;
        let is_dark = background.relative_luminance() < DARK_LUMINANCE_THRESHOLD;

        let name = theme_name(is_dark, &row.product_type);
        if store.contains(&name) {
            skipped.push(name);
            continue;
        }

        let tokens = build_tokens(row, is_dark)?;
        let description = describe(row, is_dark)?;
        store.insert(name, Theme { description, tokens });
        themes_added += 1;
    }

    store.save(store_path)?;

    Ok(ImportSummary {
        unique_palettes: palettes.len(),
        themes_added,
        total_themes: store.len(),
        skipped,
    })
}

/// Builds the generated theme name from the mode tag and product label.
#[must_use]
pub fn theme_name(is_dark: bool, product_label: &str) -> String {
    let prefix = if is_dark {
        DARK_THEME_PREFIX
    } else {
        LIGHT_THEME_PREFIX
    };
    format!("{prefix}{}", sanitize_label(product_label))
}

/// Sanitizes a product label into an identifier.
///
/// Runs of non-alphanumeric characters collapse into a single underscore,
/// leading and trailing separators are trimmed, and an empty result falls
/// back to the default label.
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    let mut sanitized = String::with_capacity(label.len());
    let mut pending_separator = false;

    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !sanitized.is_empty() {
                sanitized.push('_');
            }
            sanitized.push(ch);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if sanitized.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        sanitized
    }
}

/// Derives the full token set for one palette.
fn build_tokens(row: &PaletteRow, is_dark: bool) -> Result<BTreeMap<String, ColorToken>> {
    let primary = parse_field(&row.primary, "primary", row)?;
    let secondary = parse_field(&row.secondary, "secondary", row)?;
    let cta = parse_field(&row.cta, "CTA", row)?;
    let background = parse_field(&row.background, "background", row)?;
    let text = parse_field(&row.text, "text", row)?;
    let border = parse_field(&row.border, "border", row)?;

    let mut tokens = BTreeMap::new();
    tokens.insert("Primary".to_string(), ColorToken::opaque(primary));
    tokens.insert("Secondary".to_string(), ColorToken::opaque(secondary));
    tokens.insert("CTA".to_string(), ColorToken::opaque(cta));
    tokens.insert("Bg".to_string(), ColorToken::opaque(background));
    tokens.insert("TextPrimary".to_string(), ColorToken::opaque(text));
    tokens.insert("Border".to_string(), ColorToken::opaque(border));
    tokens.insert(
        "TextSecondary".to_string(),
        ColorToken::opaque(text.blend_toward(background, TEXT_SECONDARY_BLEND)),
    );

    if is_dark {
        tokens.insert(
            "Surface".to_string(),
            ColorToken::opaque(background.blend_toward(RgbColor::WHITE, DARK_SURFACE_BLEND)),
        );
        tokens.insert(
            "SurfaceAlt".to_string(),
            ColorToken::opaque(background.blend_toward(RgbColor::WHITE, DARK_SURFACE_ALT_BLEND)),
        );
        tokens.insert(
            "Glass".to_string(),
            ColorToken::new(RgbColor::WHITE, DARK_GLASS_ALPHA),
        );
        tokens.insert(
            "Overlay".to_string(),
            ColorToken::new(RgbColor::BLACK, OVERLAY_ALPHA),
        );
    } else {
        tokens.insert("Surface".to_string(), ColorToken::opaque(RgbColor::WHITE));
        tokens.insert(
            "SurfaceAlt".to_string(),
            ColorToken::opaque(background.blend_toward(border, LIGHT_SURFACE_ALT_BLEND)),
        );
        tokens.insert(
            "Glass".to_string(),
            ColorToken::new(RgbColor::WHITE, LIGHT_GLASS_ALPHA),
        );
        tokens.insert(
            "Overlay".to_string(),
            ColorToken::new(LIGHT_OVERLAY, OVERLAY_ALPHA),
        );
    }

    Ok(tokens)
}

/// Parses one hex field, naming the field and product on failure.
fn parse_field(hex: &str, field: &str, row: &PaletteRow) -> Result<RgbColor> {
    RgbColor::from_hex(hex).context(format!(
        "Invalid {field} color for product '{}'",
        row.product_type
    ))
}

/// Human-readable provenance citing the label and three headline colors.
fn describe(row: &PaletteRow, is_dark: bool) -> Result<String> {
    let mode = if is_dark { "dark" } else { "light" };
    let primary = RgbColor::from_hex(&row.primary)?;
    let cta = RgbColor::from_hex(&row.cta)?;
    let background = RgbColor::from_hex(&row.background)?;
    Ok(format!(
        "Imported {mode} theme from the \"{}\" product palette (primary {}, CTA {}, background {})",
        row.product_type,
        primary.to_hex(),
        cta.to_hex(),
        background.to_hex()
    ))
}
