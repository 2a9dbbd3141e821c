//! # Shadegen Engine
//!
//! Pure color math behind the shade generator: parsing and normalizing hex
//! colors, interpolating shades toward white and black, choosing readable text
//! colors, and assembling labeled palette tiles.
//!
//! Everything here is synchronous and free of shared state, so any function
//! can be called repeatedly and concurrently without coordination.
//!
//! ```
//! use shadegen_engine::{PaletteConfig, build_palette, normalize_hex};
//!
//! let base = normalize_hex("1c902f").expect("valid color");
//! let palette = build_palette(base, &PaletteConfig::default());
//! assert_eq!(palette.lighter_tiles[1].hex.to_string(), "#339B44");
//! assert_eq!(palette.darker_tiles[1].label, "-10%");
//! ```

pub mod contrast;
pub mod export;
pub mod hex;
pub mod palette;
pub mod random;
pub mod shade;

pub use contrast::{DARK_INK, LIGHT_INK, luminance, readable_text_color};
pub use export::{ExportFormat, export_palette};
pub use hex::{HexColor, InvalidColorInput, RgbColor, hex_to_rgb, normalize_hex, rgb_to_hex, sanitize_hex_input};
pub use palette::{
    BASE_LABEL, DEFAULT_STEPS, InvalidStepCount, MAX_STEPS, MIN_STEPS, PaletteConfig, PaletteResult, Tile, build_palette,
    build_tiles,
};
pub use random::{random_color, random_hex};
pub use shade::{Direction, ShadeStep, shade_steps, shades, toward_black, toward_white};

/// Base color shown before the user picks one.
pub const DEFAULT_COLOR: HexColor = rgb_to_hex(0x1C, 0x90, 0x2F);
