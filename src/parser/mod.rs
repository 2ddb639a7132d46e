//! Parsers for the asset file formats: CSV palettes and component specs.

pub mod component_spec;
pub mod palette_csv;

pub use component_spec::load_component_specs;
pub use palette_csv::{read_unique_palettes, PaletteRow};
