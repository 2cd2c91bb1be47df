//! Shared pixel buffer viewed through a [`MatrixLayout`].

use crate::color::{Hsv, OFF, Rgb, hsv2rgb};
use crate::layout::MatrixLayout;

/// Error returned when a buffer cannot back a [`PixelGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The layout has no columns or no rows
    EmptyLayout,
    /// The buffer holds fewer LEDs than the layout addresses
    BufferTooSmall { required: usize, actual: usize },
}

/// Mutable 2D view over a caller-owned LED buffer
///
/// The buffer may be longer than the layout; LEDs past `layout.len()` are
/// never touched.
#[derive(Debug)]
pub struct PixelGrid<'a> {
    layout: MatrixLayout,
    leds: &'a mut [Rgb],
}

impl<'a> PixelGrid<'a> {
    pub fn new(layout: MatrixLayout, leds: &'a mut [Rgb]) -> Result<Self, GridError> {
        if layout.is_empty() {
            return Err(GridError::EmptyLayout);
        }
        if leds.len() < layout.len() {
            return Err(GridError::BufferTooSmall {
                required: layout.len(),
                actual: leds.len(),
            });
        }
        Ok(Self { layout, leds })
    }

    pub const fn layout(&self) -> MatrixLayout {
        self.layout
    }

    /// Set the color of the pixel at `(x, y)`
    #[inline]
    pub fn set(&mut self, x: u8, y: u8, color: Rgb) {
        let index = self.layout.index(x, y);
        self.leds[index] = color;
    }

    /// Set the pixel at `(x, y)` from an HSV color
    #[inline]
    pub fn set_hsv(&mut self, x: u8, y: u8, color: Hsv) {
        self.set(x, y, hsv2rgb(color));
    }

    pub fn get(&self, x: u8, y: u8) -> Rgb {
        self.leds[self.layout.index(x, y)]
    }

    /// Fill every pixel of the matrix with one color
    pub fn fill(&mut self, color: Rgb) {
        for led in self.leds_mut() {
            *led = color;
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// LEDs covered by the layout, in wiring order
    pub fn as_slice(&self) -> &[Rgb] {
        &self.leds[..self.layout.len()]
    }

    fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut self.leds[..self.layout.len()]
    }
}
