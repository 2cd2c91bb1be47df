#![no_std]

pub mod animation;
pub mod channel;
pub mod clock;
pub mod color;
pub mod grid;
pub mod layout;
pub mod math8;
pub mod runner;

pub use animation::{Animation, AnimationId, AnimationSlot, Frame};
pub use channel::{SwitchChannel, SwitchReceiver, SwitchSender};
pub use clock::{Clock, ManualClock, SystemClock};
pub use grid::{GridError, PixelGrid};
pub use layout::{MatrixLayout, Wiring};
pub use runner::{AnimationRunner, FrameResult, OutputDriver, RunnerConfig, SmartLedsOutput};

pub use color::{Hsv, OFF, Rgb};
pub use embassy_time::Duration;
