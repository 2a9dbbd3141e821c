//! Text renderings of a palette for copying into other tools.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::palette::PaletteResult;
use crate::shade::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Aligned, human-readable rows.
    #[default]
    Text,
    /// The serialized [`PaletteResult`].
    Json,
    /// CSS custom properties on `:root`.
    Css,
}

/// Renders `palette` in the requested format.
pub fn export_palette(palette: &PaletteResult, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Text => Ok(to_text(palette)),
        ExportFormat::Json => serde_json::to_string_pretty(palette),
        ExportFormat::Css => Ok(to_css(palette)),
    }
}

fn to_text(palette: &PaletteResult) -> String {
    let mut out = String::new();
    for direction in Direction::ALL {
        let heading = match direction {
            Direction::Lighter => "Lighter shades (toward white)",
            Direction::Darker => "Darker shades (toward black)",
        };
        let _ = writeln!(out, "{heading}");
        for tile in palette.tiles(direction) {
            let _ = writeln!(out, "  {:<6} {}  text {}", tile.label, tile.hex, tile.text_color);
        }
    }
    out
}

fn to_css(palette: &PaletteResult) -> String {
    let mut out = String::from(":root {\n");
    let _ = writeln!(out, "  --shade-base: {};", palette.base);
    for direction in Direction::ALL {
        for tile in palette.tiles(direction).iter().filter(|tile| !tile.is_base()) {
            let percent = tile.label.trim_start_matches(direction.sign()).trim_end_matches('%');
            let _ = writeln!(out, "  --shade-{}-{percent}: {};", direction.as_str(), tile.hex);
        }
    }
    out.push_str("}\n");
    out
}
