//! Idle animation: turns the matrix off and keeps it dark.

use super::{ANIMATION_NAME_NULL, Animation, Frame};

#[derive(Debug, Clone)]
pub struct NullAnimation {
    name: &'static str,
}

impl Default for NullAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl NullAnimation {
    pub const fn new() -> Self {
        Self {
            name: ANIMATION_NAME_NULL,
        }
    }

    /// Override the display name
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl Animation for NullAnimation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn setup(&mut self, frame: &mut Frame<'_>) {
        frame.grid_mut().clear();
    }

    fn render(&mut self, _frame: &mut Frame<'_>) {}
}
