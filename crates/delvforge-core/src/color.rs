//! Color parsing and opacity variants.
//!
//! Palette shades are parsed with `csscolorparser`, which understands named
//! colors, every hex form and the functional notations. Parsing is only
//! fatal through [`parse_color`]; the variant expander recovers from a bad
//! shade by falling back to a `color-mix()` expression.
//!
//! ```rust
//! use delvforge_core::color::{color_variants, parse_color};
//! use delvforge_core::config::TokenTable;
//!
//! let rgba = parse_color("#ff0000").unwrap();
//! assert_eq!(rgba.with_alpha(0.5).to_css(), "rgba(255,0,0,0.5)");
//!
//! let mut shades = TokenTable::new();
//! shades.insert("500".into(), "#ff0000".into());
//! let table = color_variants(&shades, "text-red");
//! assert_eq!(table.len(), 10);
//! ```

use csscolorparser::Color;
use tracing::warn;

use crate::config::{TokenTable, TokenValue};
use crate::engine::UtilityTable;
use crate::error::ColorError;

/// Opacity steps generated per shade, in percent.
pub const OPACITY_STEPS: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// An 8-bit RGB color with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with its alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parses any CSS color string.
pub fn parse_color(input: &str) -> Result<Rgba, ColorError> {
    let color: Color = input.trim().parse().map_err(|e: csscolorparser::ParseColorError| {
        ColorError {
            value: input.to_string(),
            message: e.to_string(),
        }
    })?;
    let [r, g, b, a] = color.to_rgba8();
    Ok(Rgba::new(r, g, b, f64::from(a) / 255.0))
}

/// `color` at `percent` opacity.
///
/// Falls back to `color-mix(in srgb, <color> <percent>%, transparent)` when
/// `color` does not parse.
pub fn with_opacity(color: &str, percent: u8) -> String {
    match parse_color(color) {
        Ok(rgba) => rgba.with_alpha(f64::from(percent) / 100.0).to_css(),
        Err(_) => mix_with_transparent(color, percent),
    }
}

fn mix_with_transparent(color: &str, percent: u8) -> String {
    format!("color-mix(in srgb, {color} {percent}%, transparent)")
}

/// Expands a shade table into solid and opacity utility entries.
///
/// Each shade yields `<prefix>-<shade>` with the stored value, followed by
/// `<prefix>-<shade>/<n>` for every step in [`OPACITY_STEPS`]. A shade that is
/// not a valid color keeps its literal solid value; its opacity entries use
/// `color-mix()` and one warning is logged for it.
pub fn color_variants(shades: &TokenTable, prefix: &str) -> UtilityTable {
    let mut table = UtilityTable::new();

    for (shade, value) in shades {
        let value = match value {
            TokenValue::Group(_) => continue,
            other => other.to_raw().unwrap_or_default(),
        };
        table.insert(format!("{prefix}-{shade}"), value.as_str());

        match parse_color(&value) {
            Ok(rgba) => {
                for percent in OPACITY_STEPS {
                    let alpha = f64::from(percent) / 100.0;
                    table.insert(
                        format!("{prefix}-{shade}/{percent}"),
                        rgba.with_alpha(alpha).to_css(),
                    );
                }
            }
            Err(err) => {
                warn!(shade = %shade, prefix, %err, "falling back to color-mix for opacity variants");
                for percent in OPACITY_STEPS {
                    table.insert(
                        format!("{prefix}-{shade}/{percent}"),
                        mix_with_transparent(&value, percent),
                    );
                }
            }
        }
    }

    table
}
