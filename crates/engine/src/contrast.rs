//! Foreground text color selection for swatch backgrounds.
//!
//! A weighted channel sum stands in for perceived brightness. This is a
//! readability heuristic only, not a WCAG contrast ratio.

use crate::hex::{HexColor, RgbColor, rgb_to_hex};

/// Dark ink used on bright swatches.
pub const DARK_INK: HexColor = rgb_to_hex(0x1F, 0x29, 0x33);

/// Light ink used on dark swatches.
pub const LIGHT_INK: HexColor = rgb_to_hex(0xF9, 0xFA, 0xFB);

/// Swatches strictly brighter than this get dark ink.
pub const LUMINANCE_THRESHOLD: f64 = 0.6;

/// Approximate perceived brightness in `[0, 1]`.
pub fn luminance(rgb: RgbColor) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// Picks [`DARK_INK`] or [`LIGHT_INK`] for text drawn over `rgb`.
pub fn readable_text_color(rgb: RgbColor) -> HexColor {
    if luminance(rgb) > LUMINANCE_THRESHOLD { DARK_INK } else { LIGHT_INK }
}
