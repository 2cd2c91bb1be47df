//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the [`Animation`] trait, and so does the enum,
//! so callers only ever talk to the trait.

mod faux_tv;
mod null;
mod starfield;

pub use faux_tv::{FauxTvAnimation, HueWave};
pub use null::NullAnimation;
pub use starfield::StarfieldAnimation;

use crate::clock::Clock;
use crate::grid::PixelGrid;
use crate::layout::MatrixLayout;

const ANIMATION_NAME_NULL: &str = "null";
const ANIMATION_NAME_FAUX_TV: &str = "fauxtv";
const ANIMATION_NAME_STARFIELD: &str = "starfield";

const ANIMATION_ID_NULL: u8 = 0;
const ANIMATION_ID_FAUX_TV: u8 = 1;
const ANIMATION_ID_STARFIELD: u8 = 2;

/// Everything an animation may touch while drawing one frame
pub struct Frame<'a> {
    clock: &'a dyn Clock,
    grid: PixelGrid<'a>,
}

impl<'a> Frame<'a> {
    pub fn new(clock: &'a dyn Clock, grid: PixelGrid<'a>) -> Self {
        Self { clock, grid }
    }

    /// Current clock reading in milliseconds
    pub fn millis(&self) -> u32 {
        self.clock.millis()
    }

    pub const fn layout(&self) -> MatrixLayout {
        self.grid.layout()
    }

    pub const fn grid(&self) -> &PixelGrid<'a> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut PixelGrid<'a> {
        &mut self.grid
    }
}

pub trait Animation {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Prepare the matrix before the first frame
    ///
    /// Called once each time the animation becomes active.
    fn setup(&mut self, _frame: &mut Frame<'_>) {}

    /// Render a single frame
    ///
    /// Must not block; the frame period is the caller's business.
    fn render(&mut self, frame: &mut Frame<'_>);
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Dark matrix
    Null(NullAnimation),
    /// Diagonally drifting hue noise
    FauxTv(FauxTvAnimation),
    /// Twinkling stars on black
    Starfield(StarfieldAnimation),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Null = ANIMATION_ID_NULL,
    FauxTv = ANIMATION_ID_FAUX_TV,
    Starfield = ANIMATION_ID_STARFIELD,
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::Null(NullAnimation::new())
    }
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_NULL => Self::Null,
            ANIMATION_ID_FAUX_TV => Self::FauxTv,
            ANIMATION_ID_STARFIELD => Self::Starfield,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::Null => AnimationSlot::Null(NullAnimation::new()),
            Self::FauxTv => AnimationSlot::FauxTv(FauxTvAnimation::new()),
            Self::Starfield => AnimationSlot::Starfield(StarfieldAnimation::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => ANIMATION_NAME_NULL,
            Self::FauxTv => ANIMATION_NAME_FAUX_TV,
            Self::Starfield => ANIMATION_NAME_STARFIELD,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_NULL => Some(Self::Null),
            ANIMATION_NAME_FAUX_TV => Some(Self::FauxTv),
            ANIMATION_NAME_STARFIELD => Some(Self::Starfield),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Null(_) => AnimationId::Null,
            Self::FauxTv(_) => AnimationId::FauxTv,
            Self::Starfield(_) => AnimationId::Starfield,
        }
    }
}

impl Animation for AnimationSlot {
    fn name(&self) -> &'static str {
        match self {
            Self::Null(animation) => animation.name(),
            Self::FauxTv(animation) => animation.name(),
            Self::Starfield(animation) => animation.name(),
        }
    }

    fn setup(&mut self, frame: &mut Frame<'_>) {
        match self {
            Self::Null(animation) => animation.setup(frame),
            Self::FauxTv(animation) => animation.setup(frame),
            Self::Starfield(animation) => animation.setup(frame),
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        match self {
            Self::Null(animation) => animation.render(frame),
            Self::FauxTv(animation) => animation.render(frame),
            Self::Starfield(animation) => animation.render(frame),
        }
    }
}
