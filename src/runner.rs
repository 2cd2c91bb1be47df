//! Frame runner: sequences animation hooks, output and pacing.
//!
//! The runner is portable: it never sleeps itself. Each [`AnimationRunner::tick`]
//! returns how long the caller should wait before the next frame.
//!
//! ```ignore
//! static SWITCHES: SwitchChannel<4> = SwitchChannel::new();
//!
//! let mut runner = AnimationRunner::new(&config, SystemClock, driver, SWITCHES.receiver());
//! let mut leds = [Rgb::default(); 256];
//! loop {
//!     let result = runner.tick(&mut leds)?;
//!     Timer::after(result.sleep_duration).await;
//! }
//! ```

use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::animation::{Animation, AnimationId, AnimationSlot, Frame};
use crate::channel::SwitchReceiver;
use crate::clock::Clock;
use crate::color::Rgb;
use crate::grid::{GridError, PixelGrid};
use crate::layout::MatrixLayout;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Hardware sink for finished frames
pub trait OutputDriver {
    /// Write colors to the LED chain, in wiring order
    fn write(&mut self, colors: &[Rgb]);
}

/// [`OutputDriver`] over any `smart-leds` driver
///
/// Failed writes are counted and otherwise dropped; the next frame
/// overwrites the whole chain anyway.
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the writer refused
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: SmartLedsWrite<Color = Rgb>> OutputDriver for SmartLedsOutput<W> {
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
        }
    }
}

/// Configuration for the runner
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    pub layout: MatrixLayout,
    pub animation: AnimationId,
    pub frame_duration: Duration,
}

impl RunnerConfig {
    pub const fn new(layout: MatrixLayout) -> Self {
        Self {
            layout,
            animation: AnimationId::Null,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

/// Result of a frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// Clock reading at which the next frame is due
    pub next_deadline: u32,
    /// How long to wait until the next frame (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Drives the active animation and flushes frames to the output
pub struct AnimationRunner<'a, O: OutputDriver, C: Clock, const SWITCH_QUEUE_SIZE: usize> {
    // External dependencies and configuration
    output: O,
    clock: C,
    switches: SwitchReceiver<'a, SWITCH_QUEUE_SIZE>,
    layout: MatrixLayout,
    frame_duration: Duration,

    // Internal state
    animation: AnimationSlot,
    needs_setup: bool,
    next_frame: Option<u32>,
}

impl<'a, O: OutputDriver, C: Clock, const SWITCH_QUEUE_SIZE: usize>
    AnimationRunner<'a, O, C, SWITCH_QUEUE_SIZE>
{
    pub fn new(
        config: &RunnerConfig,
        clock: C,
        output: O,
        switches: SwitchReceiver<'a, SWITCH_QUEUE_SIZE>,
    ) -> Self {
        Self {
            output,
            clock,
            switches,
            layout: config.layout,
            frame_duration: config.frame_duration,
            animation: config.animation.to_slot(),
            needs_setup: true,
            next_frame: None,
        }
    }

    /// Process one frame
    ///
    /// Applies the newest pending switch request, runs `setup` if the
    /// animation was just activated, renders into `leds` and writes the
    /// result to the output. Nothing is written when `leds` cannot hold
    /// the matrix.
    pub fn tick(&mut self, leds: &mut [Rgb]) -> Result<FrameResult, GridError> {
        if let Some(id) = self.switches.take_latest() {
            self.switch_to(id);
        }

        let now = self.clock.millis();
        let grid = PixelGrid::new(self.layout, leds)?;
        let mut frame = Frame::new(&self.clock, grid);

        if self.needs_setup {
            #[cfg(feature = "esp32-log")]
            println!("[runner] starting animation '{}'", self.animation.name());
            self.animation.setup(&mut frame);
            self.needs_setup = false;
        }
        self.animation.render(&mut frame);
        self.output.write(frame.grid().as_slice());

        Ok(self.schedule(now))
    }

    /// Make `id` the active animation
    ///
    /// Requesting the animation that is already running does nothing.
    pub fn switch_to(&mut self, id: AnimationId) {
        if self.animation.id() == id {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[runner] switching from '{}' to '{}'",
            self.animation.name(),
            id.as_str()
        );
        self.animation = id.to_slot();
        self.needs_setup = true;
    }

    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Advance the frame deadline
    ///
    /// When more than two frames off schedule (stall, or clock jump) the
    /// deadline restarts from `now` instead of bursting to catch up.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn schedule(&mut self, now: u32) -> FrameResult {
        let frame_ms = self.frame_duration.as_millis() as u32;
        let max_drift = frame_ms.saturating_mul(2);

        let current = match self.next_frame {
            Some(next) if (now.wrapping_sub(next) as i32).unsigned_abs() <= max_drift => next,
            _ => now,
        };
        let next = current.wrapping_add(frame_ms);
        self.next_frame = Some(next);

        let ahead = next.wrapping_sub(now) as i32;
        let sleep_ms = if ahead > 0 { ahead.unsigned_abs() } else { 0 };

        FrameResult {
            next_deadline: next,
            sleep_duration: Duration::from_millis(u64::from(sleep_ms)),
        }
    }
}
