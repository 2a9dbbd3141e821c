//! Linear shade interpolation toward white and black.
//!
//! Blending happens per channel in plain sRGB space with no gamma correction.
//! Each channel is rounded on its own (half away from zero); channels are never
//! rounded jointly or renormalized.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::RgbColor;

/// Which end of the scale a shade sequence moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward white.
    Lighter,
    /// Toward black.
    Darker,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Lighter, Direction::Darker];

    /// Sign used in tile labels (`+10%` / `-10%`).
    pub fn sign(self) -> char {
        match self {
            Direction::Lighter => '+',
            Direction::Darker => '-',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Lighter => "lighter",
            Direction::Darker => "darker",
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Lighter => Direction::Darker,
            Direction::Darker => Direction::Lighter,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interpolation position `index / steps`, with `1 <= index < steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeStep {
    pub index: u32,
    pub steps: u32,
}

impl ShadeStep {
    /// Unrounded blend factor.
    pub fn factor(self) -> f64 {
        self.index as f64 / self.steps as f64
    }

    /// Integer percentage shown in labels, rounded independently of any
    /// channel rounding.
    pub fn percent(self) -> u32 {
        (self.factor() * 100.0).round() as u32
    }
}

/// Iterates the non-base steps `1..steps` in increasing order.
///
/// `steps` of 0 or 1 yields nothing.
pub fn shade_steps(steps: u32) -> impl Iterator<Item = ShadeStep> {
    (1..steps).map(move |index| ShadeStep { index, steps })
}

/// Produces `steps - 1` variants of `base`, each closer to white than the last.
pub fn toward_white(base: RgbColor, steps: u32) -> Vec<RgbColor> {
    shade_steps(steps)
        .map(|step| map_channels(base, |c| blend_toward_white(c, step.factor())))
        .collect()
}

/// Produces `steps - 1` variants of `base`, each closer to black than the last.
pub fn toward_black(base: RgbColor, steps: u32) -> Vec<RgbColor> {
    shade_steps(steps)
        .map(|step| map_channels(base, |c| blend_toward_black(c, step.factor())))
        .collect()
}

/// Dispatches to [`toward_white`] or [`toward_black`].
pub fn shades(base: RgbColor, steps: u32, direction: Direction) -> Vec<RgbColor> {
    match direction {
        Direction::Lighter => toward_white(base, steps),
        Direction::Darker => toward_black(base, steps),
    }
}

fn map_channels(rgb: RgbColor, f: impl Fn(u8) -> u8) -> RgbColor {
    RgbColor::new(f(rgb.r), f(rgb.g), f(rgb.b))
}

fn blend_toward_white(channel: u8, factor: f64) -> u8 {
    let c = f64::from(channel);
    clamp_channel((c + (255.0 - c) * factor).round())
}

fn blend_toward_black(channel: u8, factor: f64) -> u8 {
    let c = f64::from(channel);
    clamp_channel((c * (1.0 - factor)).round())
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::rgb_to_hex;

    const BASE: RgbColor = RgbColor::new(28, 144, 47);

    fn as_hex(colors: &[RgbColor]) -> Vec<String> {
        colors.iter().map(|c| rgb_to_hex(c.r, c.g, c.b).to_string()).collect()
    }

    #[test]
    fn first_lighter_variant_rounds_each_channel() {
        // R: round(28 + 227 * 0.1) = round(50.7) = 51
        // G: round(144 + 111 * 0.1) = round(155.1) = 155
        // B: round(47 + 208 * 0.1) = round(67.8) = 68
        let lighter = toward_white(BASE, 10);
        assert_eq!(lighter[0], RgbColor::new(51, 155, 68));
    }

    #[test]
    fn lighter_sequence_for_default_color() {
        assert_eq!(
            as_hex(&toward_white(BASE, 10)),
            vec![
                "#339B44", "#49A659", "#60B16D", "#77BC82", "#8EC897", "#A4D3AC", "#BBDEC1", "#D2E9D5", "#E8F4EA",
            ]
        );
    }

    #[test]
    fn darker_sequence_for_default_color() {
        assert_eq!(
            as_hex(&toward_black(BASE, 10)),
            vec![
                "#19822A", "#167326", "#146521", "#11561C", "#0E4818", "#0B3A13", "#082B0E", "#061D09", "#030E05",
            ]
        );
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 0 + 255 * 0.5 = 127.5 and 255 * 0.5 = 127.5 both round up.
        assert_eq!(toward_white(RgbColor::BLACK, 4)[1], RgbColor::new(128, 128, 128));
        assert_eq!(toward_black(RgbColor::WHITE, 4)[1], RgbColor::new(128, 128, 128));
        assert_eq!(as_hex(&toward_white(RgbColor::BLACK, 4)), vec!["#404040", "#808080", "#BFBFBF"]);
        assert_eq!(as_hex(&toward_black(RgbColor::WHITE, 4)), vec!["#BFBFBF", "#808080", "#404040"]);
    }

    #[test]
    fn sequence_length_is_steps_minus_one() {
        for steps in 0u32..=16 {
            let expected = steps.saturating_sub(1) as usize;
            assert_eq!(toward_white(BASE, steps).len(), expected, "steps = {steps}");
            assert_eq!(toward_black(BASE, steps).len(), expected, "steps = {steps}");
        }
    }

    #[test]
    fn channels_move_monotonically() {
        for base in [BASE, RgbColor::BLACK, RgbColor::WHITE, RgbColor::new(200, 3, 127)] {
            for steps in [2, 3, 7, 10, 33] {
                let lighter = toward_white(base, steps);
                let mut prev = base;
                for next in &lighter {
                    for (a, b) in prev.channels().into_iter().zip(next.channels()) {
                        assert!(b >= a, "{base:?} steps={steps}: {prev:?} -> {next:?}");
                    }
                    prev = *next;
                }

                let darker = toward_black(base, steps);
                let mut prev = base;
                for next in &darker {
                    for (a, b) in prev.channels().into_iter().zip(next.channels()) {
                        assert!(b <= a, "{base:?} steps={steps}: {prev:?} -> {next:?}");
                    }
                    prev = *next;
                }
            }
        }
    }

    #[test]
    fn extremes_stay_fixed() {
        assert!(toward_white(RgbColor::WHITE, 10).iter().all(|c| *c == RgbColor::WHITE));
        assert!(toward_black(RgbColor::BLACK, 10).iter().all(|c| *c == RgbColor::BLACK));
    }

    #[test]
    fn step_percent_rounds_independently() {
        let percents = |steps| shade_steps(steps).map(ShadeStep::percent).collect::<Vec<_>>();
        assert_eq!(percents(10), vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(percents(3), vec![33, 67]);
        assert_eq!(percents(6), vec![17, 33, 50, 67, 83]);
        assert_eq!(percents(7), vec![14, 29, 43, 57, 71, 86]);
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Lighter).unwrap(), "\"lighter\"");
        assert_eq!(serde_json::to_string(&Direction::Darker).unwrap(), "\"darker\"");
        assert_eq!(Direction::Lighter.opposite(), Direction::Darker);
    }
}
