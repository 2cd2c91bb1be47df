//! Millisecond clock sources.
//!
//! Animations never read a global timer; the runner hands them a [`Clock`].

use core::cell::Cell;

use embassy_time::Instant;

/// Monotonic millisecond counter, wrapping at `u32::MAX`
pub trait Clock {
    fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn millis(&self) -> u32 {
        // Truncation gives the wrap-around at 2^32 ms
        Instant::now().as_millis() as u32
    }
}

/// Clock that only moves when told to
///
/// Useful for previews and tests that need exact frame times.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub const fn new(millis: u32) -> Self {
        Self {
            now: Cell::new(millis),
        }
    }

    pub fn set(&self, millis: u32) {
        self.now.set(millis);
    }

    /// Move the clock forward, wrapping at `u32::MAX`
    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}
