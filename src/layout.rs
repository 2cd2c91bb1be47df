//! Pixel addressing for rectangular LED matrices.
//!
//! Maps logical `(x, y)` coordinates to the index of the LED on the physical
//! chain. Animations must always go through [`MatrixLayout::index`] so that a
//! wiring change never touches animation code.

/// Physical wiring of the LED chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// Every row runs left to right
    RowMajor,
    /// Even rows run left to right, odd rows right to left
    Serpentine,
}

/// Geometry and wiring of a fixed-size LED matrix
///
/// ```text
/// Serpentine 3×2:
///   LED0  LED1  LED2
///   LED5  LED4  LED3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLayout {
    cols: u8,
    rows: u8,
    wiring: Wiring,
}

impl MatrixLayout {
    pub const fn new(cols: u8, rows: u8, wiring: Wiring) -> Self {
        Self { cols, rows, wiring }
    }

    pub const fn row_major(cols: u8, rows: u8) -> Self {
        Self::new(cols, rows, Wiring::RowMajor)
    }

    pub const fn serpentine(cols: u8, rows: u8) -> Self {
        Self::new(cols, rows, Wiring::Serpentine)
    }

    pub const fn cols(self) -> u8 {
        self.cols
    }

    pub const fn rows(self) -> u8 {
        self.rows
    }

    pub const fn wiring(self) -> Wiring {
        self.wiring
    }

    /// Number of LEDs in the matrix
    pub const fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Check if the coordinate lies inside the matrix
    pub const fn contains(self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows
    }

    /// Buffer index of the LED at `(x, y)`
    ///
    /// Coordinates outside the matrix are a caller bug: debug builds panic,
    /// release builds clamp to the nearest edge pixel (see
    /// [`Self::clamped_index`]). The result is always `< self.len()` for a
    /// non-empty layout.
    #[inline]
    pub fn index(self, x: u8, y: u8) -> usize {
        debug_assert!(
            self.contains(x, y),
            "pixel coordinate out of matrix bounds"
        );
        self.clamped_index(x, y)
    }

    /// Buffer index of the LED at `(x, y)`, or `None` outside the matrix
    pub const fn checked_index(self, x: u8, y: u8) -> Option<usize> {
        if self.contains(x, y) {
            Some(self.wired_index(x, y))
        } else {
            None
        }
    }

    /// Buffer index with both coordinates clamped to the last column/row
    ///
    /// Returns 0 for an empty layout.
    pub const fn clamped_index(self, x: u8, y: u8) -> usize {
        if self.is_empty() {
            return 0;
        }
        let x = if x < self.cols { x } else { self.cols - 1 };
        let y = if y < self.rows { y } else { self.rows - 1 };
        self.wired_index(x, y)
    }

    const fn wired_index(self, x: u8, y: u8) -> usize {
        let row_start = y as usize * self.cols as usize;
        match self.wiring {
            Wiring::Serpentine if y % 2 == 1 => row_start + (self.cols - 1 - x) as usize,
            _ => row_start + x as usize,
        }
    }
}
