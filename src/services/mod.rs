//! Services: the search scanner and the palette import pipeline.

pub mod search;
pub mod theme_import;

pub use search::{search_assets, FileMatch, LineHit, SearchLimits, SearchResults};
pub use theme_import::{import_palettes, ImportSummary};
