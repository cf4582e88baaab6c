//! Shared per-frame facts the movement states read, plus the policy
//! thresholds the transition table is written against.

use crate::anim::{flags, AnimationSink};

// ---------------------------------------------------------------------------
// Policy thresholds (one reconciled set — superseded drafts had several)
// ---------------------------------------------------------------------------

/// Jumps available before a ground touch must replenish the budget:
/// ground jump + one double jump.
pub const MAX_JUMP_COUNT: u8 = 2;

/// Dead zone on vertical velocity: |v| above this counts as rising/falling,
/// inside it the apex rule applies.
pub const VELOCITY_THRESHOLD: f32 = 0.5;

/// Dead zone on the horizontal axis below which input counts as "not moving".
pub const INPUT_THRESHOLD: f32 = 0.1;

/// Vertical speed under which a grounded character counts as settled —
/// used both for the landing jump-budget reset and to qualify ground
/// contact for state transitions.
pub const GROUNDED_VELOCITY_EPSILON: f32 = 0.3;

// ---------------------------------------------------------------------------
// CharacterContext
// ---------------------------------------------------------------------------

/// Per-frame snapshot of a character's physical situation.
///
/// Refreshed by the sampling systems at the start of every frame, before the
/// FSM ticks; during the tick the states treat the facts as read-only and
/// only dispatch animation through the owned sink.
pub struct CharacterContext {
    /// Raw ground-probe contact this frame.
    pub grounded: bool,
    /// Contact reading from the previous frame, for landing-edge detection.
    pub was_grounded: bool,
    /// Seconds left on the landing grace buffer. Armed on the false→true
    /// grounded edge, decays every frame regardless of contact.
    pub grounded_buffer: f32,
    /// Vertical velocity as of this frame's sampling (post jump handling).
    pub vertical_velocity: f32,
    /// Horizontal axis input in [-1, 1].
    pub horizontal_input: f32,
    /// Jumps consumed since the last landing, in [0, MAX_JUMP_COUNT].
    pub jump_count: u8,

    anim: Box<dyn AnimationSink + Send + Sync>,
}

impl CharacterContext {
    pub fn new(anim: Box<dyn AnimationSink + Send + Sync>) -> Self {
        Self {
            grounded: false,
            was_grounded: false,
            grounded_buffer: 0.0,
            vertical_velocity: 0.0,
            horizontal_input: 0.0,
            jump_count: 0,
            anim,
        }
    }

    /// Vertical velocity clearly above the dead zone.
    pub fn rising(&self) -> bool {
        self.vertical_velocity > VELOCITY_THRESHOLD
    }

    /// Vertical velocity clearly below the dead zone.
    pub fn falling(&self) -> bool {
        self.vertical_velocity < -VELOCITY_THRESHOLD
    }

    /// Horizontal input outside its dead zone.
    pub fn moving(&self) -> bool {
        self.horizontal_input.abs() > INPUT_THRESHOLD
    }

    /// Ground contact as the transition policy sees it: raw contact
    /// qualified by near-zero vertical speed or the landing grace buffer.
    /// The buffer smooths over one-frame "still falling" readings right
    /// after touchdown.
    pub fn stable_ground(&self) -> bool {
        self.grounded
            && (self.vertical_velocity.abs() < GROUNDED_VELOCITY_EPSILON
                || self.grounded_buffer > 0.0)
    }

    /// Clear every animator flag, raise `flag`, and play `clip` — the
    /// complete animation side effect of entering a movement state.
    pub fn enter_animation(&mut self, flag: &str, clip: &str) {
        for name in flags::ALL {
            self.anim.set_flag(name, false);
        }
        self.anim.set_flag(flag, true);
        self.anim.play_clip(clip);
    }
}
