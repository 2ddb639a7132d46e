//! Data models for colors, themes, and component specs.

pub mod color;
pub mod component;
pub mod theme;

pub use color::{ColorToken, RgbColor};
pub use component::ComponentSpec;
pub use theme::{Theme, ThemeStore};
