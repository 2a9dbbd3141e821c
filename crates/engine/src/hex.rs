//! Hex color parsing, normalization and RGB conversion.
//!
//! Every color that enters the engine goes through [`normalize_hex`], which is
//! total over all strings: garbled or partial text yields `None` instead of an
//! error so callers can simply ignore the keystroke and keep their previous
//! color. Downstream conversion ([`hex_to_rgb`]) is defensive as well and
//! degrades to black rather than failing.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Number of hex digits in a canonical color (`RRGGBB`).
const HEX_DIGITS: usize = 6;

/// Maximum length of the masked text field (`#` plus six digits).
const MAX_INPUT_LEN: usize = HEX_DIGITS + 1;

/// Raised when text does not normalize to a canonical 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color input: {input:?}")]
pub struct InvalidColorInput {
    /// The raw text that was rejected.
    pub input: String,
}

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in R, G, B order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Packs the channels into a 24-bit integer, red in the most significant byte.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Splits the low 24 bits of `value` into R, G, B channels.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// A canonical `#RRGGBB` color.
///
/// The only ways to obtain one are [`normalize_hex`] (or its [`FromStr`]
/// wrapper) and conversion from an [`RgbColor`], so every value displays as
/// `#` followed by exactly six uppercase hex digits. Two colors are equal
/// exactly when their canonical strings are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(RgbColor);

impl HexColor {
    pub const fn from_rgb(rgb: RgbColor) -> Self {
        Self(rgb)
    }

    pub const fn rgb(self) -> RgbColor {
        self.0
    }

    /// The six uppercase digits without the leading `#`.
    pub fn digits(self) -> String {
        format!("{:06X}", self.0.to_u32())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0.to_u32())
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({self})")
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for RgbColor {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl FromStr for HexColor {
    type Err = InvalidColorInput;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        normalize_hex(raw).ok_or_else(|| InvalidColorInput { input: raw.to_string() })
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Normalizes arbitrary text into a canonical [`HexColor`].
///
/// Whitespace, non-hex characters and stray `#` marks are discarded, the
/// remaining digits are prefixed with a single `#`, and anything beyond the
/// sixth digit is dropped. The result is valid only when exactly six digits
/// survive; shorter input (including the empty string) returns `None`.
///
/// ```
/// use shadegen_engine::normalize_hex;
///
/// assert_eq!(normalize_hex(" 1c#90#2f ").unwrap().to_string(), "#1C902F");
/// assert_eq!(normalize_hex("#1C902F99").unwrap().to_string(), "#1C902F");
/// assert!(normalize_hex("#12345").is_none());
/// ```
pub fn normalize_hex(raw: &str) -> Option<HexColor> {
    let mut value: u32 = 0;
    let mut count = 0;
    for digit in raw.chars().filter_map(|c| c.to_digit(16)).take(HEX_DIGITS) {
        value = (value << 4) | digit;
        count += 1;
    }
    (count == HEX_DIGITS).then(|| HexColor(RgbColor::from_u32(value)))
}

/// Decodes `raw` into RGB channels, falling back to black.
///
/// The input is re-normalized first, so lowercase or unprefixed text still
/// decodes. Anything that does not normalize yields `RgbColor::BLACK`; display
/// code relies on this never failing.
pub fn hex_to_rgb(raw: &str) -> RgbColor {
    match normalize_hex(raw) {
        Some(hex) => hex.rgb(),
        None => {
            tracing::trace!(input = raw, "unusable hex color; falling back to black");
            RgbColor::BLACK
        }
    }
}

/// Formats three channels as a canonical color, zero-padded to six digits.
pub const fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor(RgbColor::new(r, g, b))
}

/// Masks live text-field input while the user types.
///
/// Keeps only hex digits and a leading `#`, inserts the `#` when missing,
/// truncates to seven characters and uppercases. Returns an empty string when
/// nothing usable remains. The masked text is what the field shows; it is not
/// necessarily a complete color, so pass it through [`normalize_hex`] before
/// adopting it.
pub fn sanitize_hex_input(raw: &str) -> String {
    if !raw.chars().any(|c| c.is_ascii_hexdigit() || c == '#') {
        return String::new();
    }

    let mut masked = String::with_capacity(MAX_INPUT_LEN);
    masked.push('#');
    masked.extend(
        raw.chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_ascii_uppercase())
            .take(HEX_DIGITS),
    );
    masked
}
