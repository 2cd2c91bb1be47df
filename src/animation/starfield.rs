//! Starfield animation
//!
//! Sparse stars fade in and out on a black sky. Which pixels are stars is
//! decided by hashing the coordinate together with the current twinkle
//! epoch, so no per-pixel state is kept between frames.

use super::{ANIMATION_NAME_STARFIELD, Animation, Frame};
use crate::{
    color::{Hsv, OFF},
    math8::{scale8, triangle8},
};

/// Lifetime of one generation of stars
const TWINKLE_PERIOD_MS: u32 = 2_048;
/// One pixel in `DENSITY` is a star in each generation
const DENSITY: u32 = 12;
/// Peak brightness range of a single star
const MIN_PEAK: u8 = 160;
const PEAK_SPREAD: u32 = 96;
/// Stars stay close to white
const MAX_SATURATION: u32 = 64;

/// Starfield animation
#[derive(Debug, Clone)]
pub struct StarfieldAnimation {
    name: &'static str,
}

impl Default for StarfieldAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl StarfieldAnimation {
    pub const fn new() -> Self {
        Self {
            name: ANIMATION_NAME_STARFIELD,
        }
    }

    /// Override the display name
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Color of the star at `(x, y)`, or `None` for empty sky
    ///
    /// At the very start of each generation every star is fully dark.
    #[allow(clippy::cast_possible_truncation)]
    pub fn star_at(x: u8, y: u8, millis: u32) -> Option<Hsv> {
        let epoch = millis / TWINKLE_PERIOD_MS;
        let seed = Self::hash((u64::from(epoch) << 16) | (u64::from(y) << 8) | u64::from(x));
        if seed % DENSITY != 0 {
            return None;
        }

        // 0-255 progress through the current generation
        let phase = ((millis % TWINKLE_PERIOD_MS) * 256 / TWINKLE_PERIOD_MS) as u8;
        let peak = MIN_PEAK + ((seed >> 8) % PEAK_SPREAD) as u8;

        Some(Hsv {
            hue: (seed >> 16) as u8,
            sat: ((seed >> 24) % MAX_SATURATION) as u8,
            val: scale8(triangle8(phase), peak),
        })
    }

    /// SplitMix64-style mixing folded down to u32
    #[inline]
    const fn hash(x: u64) -> u32 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }
}

impl Animation for StarfieldAnimation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn setup(&mut self, frame: &mut Frame<'_>) {
        frame.grid_mut().clear();
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let layout = frame.layout();
        let millis = frame.millis();
        let grid = frame.grid_mut();

        for y in 0..layout.rows() {
            for x in 0..layout.cols() {
                match Self::star_at(x, y, millis) {
                    Some(star) => grid.set_hsv(x, y, star),
                    None => grid.set(x, y, OFF),
                }
            }
        }
    }
}
