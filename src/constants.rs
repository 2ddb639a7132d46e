//! Application-wide constants.
//!
//! This module defines the asset tree layout, search defaults, and the
//! fixed color policy used by the palette importer. The luminance
//! threshold and blend ratios are given policy values, not derived.

/// The binary name of the application (used in command examples and hints).
pub const APP_BINARY_NAME: &str = "uxpmkit";

/// Relative path of the theme token store under the asset root.
pub const THEMES_FILE: &str = "themes/themes.json";

/// Preferred component spec directory under the asset root (flat .md/.json files).
pub const COMPONENTS_DIR: &str = "components";

/// Legacy component spec directory under the asset root.
pub const LEGACY_COMPONENTS_DIR: &str = "components-legacy";

/// Filename prefix required for specs in the legacy directory.
pub const LEGACY_COMPONENT_PREFIX: &str = "component-";

/// Default CSV path for `--import-colors`, relative to the asset root.
pub const DEFAULT_COLORS_CSV: &str = "data/product-colors.csv";

/// File extensions treated as searchable text.
pub const SEARCH_EXTENSIONS: [&str; 3] = ["md", "json", "txt"];

/// Default cap on line hits reported per matched file.
pub const DEFAULT_MAX_HITS: usize = 30;

/// Default cap on matched files per search.
pub const DEFAULT_MAX_FILES: usize = 80;

/// Name prefix for themes generated from dark palettes.
pub const DARK_THEME_PREFIX: &str = "UXPM_Dark_";

/// Name prefix for themes generated from light palettes.
pub const LIGHT_THEME_PREFIX: &str = "UXPM_Light_";

/// Fallback product label when sanitizing leaves nothing usable.
pub const DEFAULT_LABEL: &str = "Theme";

/// Backgrounds below this relative luminance classify as dark.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.22;

/// Dark themes: background blended toward white for the Surface token.
pub const DARK_SURFACE_BLEND: f64 = 0.06;

/// Dark themes: background blended toward white for the SurfaceAlt token.
pub const DARK_SURFACE_ALT_BLEND: f64 = 0.10;

/// Both modes: text blended toward background for the TextSecondary token.
pub const TEXT_SECONDARY_BLEND: f64 = 0.22;

/// Light themes: background blended toward border for the SurfaceAlt token.
pub const LIGHT_SURFACE_ALT_BLEND: f64 = 0.55;

/// Alpha of the translucent white Glass token in dark themes.
pub const DARK_GLASS_ALPHA: f64 = 0.08;

/// Alpha of the translucent white Glass token in light themes.
pub const LIGHT_GLASS_ALPHA: f64 = 0.65;

/// Alpha of the Overlay token in both modes.
pub const OVERLAY_ALPHA: f64 = 0.65;
