//! Faux TV animation
//!
//! A diagonally drifting hue field that looks like a badly tuned television.
//! Every frame is a pure function of the clock reading: nothing is carried
//! over between frames, so two renders at the same millisecond are
//! identical.
//!
//! Based on the `XYMatrix` demo by Mark Kriegsman (`FastLED`).

use super::{ANIMATION_NAME_FAUX_TV, Animation, Frame};
use crate::{color::Hsv, layout::MatrixLayout, math8::cos16};

/// `ms >> 16` gives one base hue step every ~65.5 s
const START_HUE_SHIFT: u32 = 16;

// Angular speeds of the row/column oscillators (cos16 units per ms)
const ROW_FREQUENCY: u32 = 27;
const COL_FREQUENCY: u32 = 39;

// Total hue spread across the matrix at full amplitude
const ROW_SPREAD: i32 = 350;
const COL_SPREAD: i32 = 310;

/// Per-frame drift parameters of the hue field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueWave {
    /// Hue before the first row step
    pub start_hue: u8,
    /// Hue step from one row to the next
    pub row_delta: i8,
    /// Hue step from one column to the next
    pub col_delta: i8,
}

impl HueWave {
    /// Derive the wave parameters for a clock reading
    #[allow(clippy::cast_possible_truncation)]
    pub fn at(millis: u32, layout: MatrixLayout) -> Self {
        let row_spread = ROW_SPREAD / i32::from(layout.cols().max(1));
        let col_spread = COL_SPREAD / i32::from(layout.rows().max(1));

        Self {
            start_hue: (millis >> START_HUE_SHIFT) as u8,
            row_delta: Self::oscillate(millis, ROW_FREQUENCY, row_spread),
            col_delta: Self::oscillate(millis, COL_FREQUENCY, col_spread),
        }
    }

    /// Hue of the pixel at `(x, y)`
    ///
    /// Same value the running accumulation in `render` arrives at.
    #[allow(clippy::cast_sign_loss)]
    pub const fn hue(self, x: u8, y: u8) -> u8 {
        let rows = (self.row_delta as u8).wrapping_mul(y.wrapping_add(1));
        let cols = (self.col_delta as u8).wrapping_mul(x.wrapping_add(1));
        self.start_hue.wrapping_add(rows).wrapping_add(cols)
    }

    /// Signed hue step in `-spread..=spread`, following `cos16` of the
    /// scaled clock
    ///
    /// Steps that do not fit an `i8` wrap, which only happens on matrices
    /// with a single row or column.
    #[allow(clippy::cast_possible_truncation)]
    fn oscillate(millis: u32, frequency: u32, spread: i32) -> i8 {
        let angle = millis.wrapping_mul(frequency) as u16;
        let amplitude = i32::from(cos16(angle));
        ((amplitude * spread) / 32768) as i8
    }
}

/// Faux TV animation
#[derive(Debug, Clone)]
pub struct FauxTvAnimation {
    name: &'static str,
}

impl Default for FauxTvAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FauxTvAnimation {
    pub const fn new() -> Self {
        Self {
            name: ANIMATION_NAME_FAUX_TV,
        }
    }

    /// Override the display name
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl Animation for FauxTvAnimation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let layout = frame.layout();
        let wave = HueWave::at(frame.millis(), layout);
        let grid = frame.grid_mut();

        // Running sums, so the drift compounds from row to row
        let mut row_hue = wave.start_hue;
        for y in 0..layout.rows() {
            row_hue = row_hue.wrapping_add_signed(wave.row_delta);
            let mut pixel_hue = row_hue;
            for x in 0..layout.cols() {
                pixel_hue = pixel_hue.wrapping_add_signed(wave.col_delta);
                grid.set_hsv(
                    x,
                    y,
                    Hsv {
                        hue: pixel_hue,
                        sat: 255,
                        val: 255,
                    },
                );
            }
        }
    }
}
