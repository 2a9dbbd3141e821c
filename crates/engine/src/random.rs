//! Random base colors.

use rand::Rng;

use crate::hex::{HexColor, RgbColor};

/// Draws six independent, uniformly distributed hex digits.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let value = (0..6).fold(0u32, |acc, _| (acc << 4) | rng.gen_range(0..16u32));
    HexColor::from_rgb(RgbColor::from_u32(value))
}

/// [`random_hex`] using the thread-local generator.
pub fn random_color() -> HexColor {
    random_hex(&mut rand::thread_rng())
}
