//! Palette assembly: labeled, ordered tiles for both shade directions.
//!
//! Building a palette is a pure function of the base color and the step
//! counts. Nothing is cached; callers replace their tile lists wholesale
//! whenever the base color changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contrast::readable_text_color;
use crate::hex::{HexColor, rgb_to_hex};
use crate::shade::{Direction, shade_steps, shades};

/// Default number of steps per direction.
pub const DEFAULT_STEPS: u32 = 10;

/// Smallest step count that produces at least one variant.
pub const MIN_STEPS: u32 = 2;

/// Largest accepted step count; beyond this percent labels start repeating.
pub const MAX_STEPS: u32 = 100;

/// Label of the leading tile in each row.
pub const BASE_LABEL: &str = "Base";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{direction} step count must be between {MIN_STEPS} and {MAX_STEPS}, got {value}")]
pub struct InvalidStepCount {
    pub direction: Direction,
    pub value: u32,
}

/// Step counts for each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    light_steps: u32,
    dark_steps: u32,
}

impl PaletteConfig {
    pub fn new(light_steps: u32, dark_steps: u32) -> Result<Self, InvalidStepCount> {
        Ok(Self {
            light_steps: validate_steps(Direction::Lighter, light_steps)?,
            dark_steps: validate_steps(Direction::Darker, dark_steps)?,
        })
    }

    /// Same step count for both directions.
    pub fn uniform(steps: u32) -> Result<Self, InvalidStepCount> {
        Self::new(steps, steps)
    }

    pub fn light_steps(&self) -> u32 {
        self.light_steps
    }

    pub fn dark_steps(&self) -> u32 {
        self.dark_steps
    }

    pub fn steps(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Lighter => self.light_steps,
            Direction::Darker => self.dark_steps,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            light_steps: DEFAULT_STEPS,
            dark_steps: DEFAULT_STEPS,
        }
    }
}

fn validate_steps(direction: Direction, value: u32) -> Result<u32, InvalidStepCount> {
    if (MIN_STEPS..=MAX_STEPS).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidStepCount { direction, value })
    }
}

/// A single displayable palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub hex: HexColor,
    pub label: String,
    pub direction: Direction,
    /// Foreground chosen for this tile's own background.
    pub text_color: HexColor,
}

impl Tile {
    fn new(hex: HexColor, label: String, direction: Direction) -> Self {
        Self {
            hex,
            label,
            direction,
            text_color: readable_text_color(hex.rgb()),
        }
    }

    pub fn is_base(&self) -> bool {
        self.label == BASE_LABEL
    }
}

/// Both tile rows for one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResult {
    pub base: HexColor,
    pub lighter_tiles: Vec<Tile>,
    pub darker_tiles: Vec<Tile>,
}

impl PaletteResult {
    pub fn tiles(&self, direction: Direction) -> &[Tile] {
        match direction {
            Direction::Lighter => &self.lighter_tiles,
            Direction::Darker => &self.darker_tiles,
        }
    }
}

/// Builds one row: the base tile followed by `steps - 1` variants ordered by
/// increasing distance from the base.
pub fn build_tiles(base: HexColor, steps: u32, direction: Direction) -> Vec<Tile> {
    let variants = shades(base.rgb(), steps, direction);
    let mut tiles = Vec::with_capacity(variants.len() + 1);
    tiles.push(Tile::new(base, BASE_LABEL.to_string(), direction));
    for (step, rgb) in shade_steps(steps).zip(variants) {
        let label = format!("{}{}%", direction.sign(), step.percent());
        tiles.push(Tile::new(rgb_to_hex(rgb.r, rgb.g, rgb.b), label, direction));
    }
    tiles
}

/// Builds both rows for `base`.
pub fn build_palette(base: HexColor, config: &PaletteConfig) -> PaletteResult {
    PaletteResult {
        base,
        lighter_tiles: build_tiles(base, config.light_steps, Direction::Lighter),
        darker_tiles: build_tiles(base, config.dark_steps, Direction::Darker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{DARK_INK, LIGHT_INK};

    fn base() -> HexColor {
        "#1C902F".parse().unwrap()
    }

    #[test]
    fn base_tile_leads_each_row() {
        let palette = build_palette(base(), &PaletteConfig::default());
        for direction in Direction::ALL {
            let first = &palette.tiles(direction)[0];
            assert_eq!(first.hex, base());
            assert_eq!(first.label, "Base");
            assert_eq!(first.direction, direction);
            assert!(first.is_base());
            assert_eq!(first.text_color, LIGHT_INK);
        }
    }

    #[test]
    fn labels_carry_sign_and_percent() {
        let palette = build_palette(base(), &PaletteConfig::default());
        let lighter: Vec<_> = palette.lighter_tiles.iter().map(|t| t.label.as_str()).collect();
        let darker: Vec<_> = palette.darker_tiles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(lighter, ["Base", "+10%", "+20%", "+30%", "+40%", "+50%", "+60%", "+70%", "+80%", "+90%"]);
        assert_eq!(darker, ["Base", "-10%", "-20%", "-30%", "-40%", "-50%", "-60%", "-70%", "-80%", "-90%"]);
    }

    #[test]
    fn text_color_follows_each_tile() {
        let palette = build_palette(base(), &PaletteConfig::default());
        let inks: Vec<_> = palette.lighter_tiles.iter().map(|t| t.text_color).collect();
        assert_eq!(&inks[..4], [LIGHT_INK; 4]);
        assert_eq!(&inks[4..], [DARK_INK; 6]);
        assert!(palette.darker_tiles.iter().all(|t| t.text_color == LIGHT_INK));
    }

    #[test]
    fn step_counts_are_independent() {
        let config = PaletteConfig::new(3, 6).unwrap();
        let palette = build_palette(base(), &config);
        assert_eq!(palette.lighter_tiles.len(), 3);
        assert_eq!(palette.darker_tiles.len(), 6);
        assert_eq!(palette.lighter_tiles[1].label, "+33%");
        assert_eq!(palette.darker_tiles[1].label, "-17%");
    }

    #[test]
    fn config_rejects_out_of_range_steps() {
        assert_eq!(
            PaletteConfig::new(1, 10).unwrap_err(),
            InvalidStepCount {
                direction: Direction::Lighter,
                value: 1
            }
        );
        assert!(PaletteConfig::new(10, 0).is_err());
        assert!(PaletteConfig::uniform(MAX_STEPS + 1).is_err());
        assert!(PaletteConfig::uniform(MIN_STEPS).is_ok());
        assert_eq!(
            PaletteConfig::new(10, 101).unwrap_err().to_string(),
            "darker step count must be between 2 and 100, got 101"
        );
    }

    #[test]
    fn tiny_step_counts_only_yield_base() {
        assert_eq!(build_tiles(base(), 1, Direction::Lighter).len(), 1);
        assert_eq!(build_tiles(base(), 0, Direction::Darker).len(), 1);
    }

    #[test]
    fn building_is_deterministic() {
        let config = PaletteConfig::new(7, 9).unwrap();
        assert_eq!(build_palette(base(), &config), build_palette(base(), &config));
    }
}
