//! Per-frame movement input, decoupled from any windowing library.
//!
//! The host engine polls its own events and feeds the raw readings in once
//! per frame via [`InputState::update`]; the controller consumes the axis
//! value and the derived jump-press edge.

/// Snapshot of the inputs the controller consumes this frame.
#[derive(Debug, Default)]
pub struct InputState {
    horizontal: f32,
    jump_held: bool,
    jump_was_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current raw readings. Call exactly once per frame so the
    /// jump edge stays a true one-frame event.
    pub fn update(&mut self, horizontal: f32, jump_held: bool) {
        self.jump_was_held = self.jump_held;
        self.jump_held = jump_held;
        self.horizontal = horizontal.clamp(-1.0, 1.0);
    }

    /// Horizontal axis in [-1, 1].
    pub fn horizontal_axis(&self) -> f32 {
        self.horizontal
    }

    /// True only on the frame the jump button went from released to held.
    pub fn jump_pressed(&self) -> bool {
        self.jump_held && !self.jump_was_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_edge_fires_once_per_press() {
        let mut input = InputState::new();
        input.update(0.0, true);
        assert!(input.jump_pressed());
        input.update(0.0, true);
        assert!(!input.jump_pressed()); // held, not pressed
        input.update(0.0, false);
        assert!(!input.jump_pressed());
        input.update(0.0, true);
        assert!(input.jump_pressed()); // re-press after release
    }

    #[test]
    fn horizontal_axis_is_clamped() {
        let mut input = InputState::new();
        input.update(2.5, false);
        assert_eq!(input.horizontal_axis(), 1.0);
        input.update(-7.0, false);
        assert_eq!(input.horizontal_axis(), -1.0);
    }
}
