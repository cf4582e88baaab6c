//! Seam to the animation playback collaborator.
//!
//! The controller never touches animation assets directly; it issues
//! "play clip" / "set flag" commands through [`AnimationSink`] and the host
//! engine maps them onto its animator.

/// Commands the movement states dispatch on entry.
pub trait AnimationSink {
    /// Play the named animation clip from its start.
    fn play_clip(&mut self, name: &str);

    /// Set a named boolean animator flag.
    fn set_flag(&mut self, name: &str, value: bool);
}

/// Sink that discards every command. Useful for headless simulation.
pub struct NullSink;

impl AnimationSink for NullSink {
    fn play_clip(&mut self, _name: &str) {}

    fn set_flag(&mut self, _name: &str, _value: bool) {}
}

/// Clip names as the animator assets expect them.
pub mod clips {
    pub const IDLE: &str = "PlayerIdle";
    pub const RUNNING: &str = "PlayerRunning";
    pub const JUMP: &str = "PlayerJump";
    pub const FALL: &str = "PlayerFall";
    pub const DOUBLE_JUMP: &str = "PlayerDoubleJump";
}

/// Boolean animator flags, one per movement state. Entering a state clears
/// all of [`ALL`] and raises exactly its own flag.
///
/// [`ALL`]: flags::ALL
pub mod flags {
    pub const IDLE: &str = "isIdle";
    pub const RUNNING: &str = "isRunning";
    pub const JUMPING: &str = "isJumping";
    pub const FALLING: &str = "isFalling";
    pub const DOUBLE_JUMPING: &str = "isDoubleJumping";

    pub const ALL: [&str; 5] = [IDLE, RUNNING, JUMPING, FALLING, DOUBLE_JUMPING];
}
