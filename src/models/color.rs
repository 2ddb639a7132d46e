//! Color handling: hex parsing, sRGB luminance, blending, and theme tokens.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and formatting back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the channels scaled to the unit interval `[0, 1]`.
    #[must_use]
    pub fn to_unit(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Relative luminance per the sRGB linearization formula.
    ///
    /// Channels are linearized piecewise (`c/12.92` below the knee,
    /// `((c+0.055)/1.055)^2.4` above) and weighted 0.2126/0.7152/0.0722.
    /// Pure black yields 0.0, pure white 1.0.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let [r, g, b] = self.to_unit();
        0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
    }

    /// Linearly blends this color toward `other` by ratio `t`.
    ///
    /// `t` is clamped to `[0, 1]`; 0.0 returns `self`, 1.0 returns `other`.
    /// Blending happens per channel in gamma space with rounding.
    #[must_use]
    pub fn blend_toward(&self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) * (1.0 - t) + f64::from(b) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// sRGB piecewise linearization of a single unit-interval channel.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}

/// A named color value as persisted in the theme store.
///
/// Carries both the uppercase hex form and the normalized RGBA channels.
/// Tokens are derived once from a color plus alpha and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Uppercase "#RRGGBB" hex string.
    pub hex: String,
    /// Normalized `[r, g, b, a]` channels in `[0, 1]`, rounded to 4 decimals.
    pub rgba: [f64; 4],
}

impl ColorToken {
    /// Builds a token from a color and an alpha value (clamped to `[0, 1]`).
    #[must_use]
    pub fn new(color: RgbColor, alpha: f64) -> Self {
        let [r, g, b] = color.to_unit();
        Self {
            hex: color.to_hex(),
            rgba: [
                round4(r),
                round4(g),
                round4(b),
                round4(alpha.clamp(0.0, 1.0)),
            ],
        }
    }

    /// Builds a fully opaque token from a color.
    #[must_use]
    pub fn opaque(color: RgbColor) -> Self {
        Self::new(color, 1.0)
    }

    /// Parses a hex string and builds a token at the given alpha.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex string is invalid.
    pub fn from_hex(hex: &str, alpha: f64) -> Result<Self> {
        Ok(Self::new(RgbColor::from_hex(hex)?, alpha))
    }

    /// Reconstructs the `RgbColor` from the normalized channels.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbColor::new(
            channel(self.rgba[0]),
            channel(self.rgba[1]),
            channel(self.rgba[2]),
        )
    }

    /// The token's alpha channel.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.rgba[3]
    }
}

/// Rounds to 4 decimal places for stable, readable JSON output.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
