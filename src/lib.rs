//! 2D platformer character controller.
//!
//! Per-frame movement input and ground-contact sensing drive a character's
//! velocity and a finite-state machine over five movement states: Idle,
//! Running, Jumping, Falling, DoubleJumping. The crate is engine-agnostic —
//! rendering/animation, physics, and raw input polling stay on the host side
//! of three narrow seams:
//!
//! - [`sense::GroundProbe`] answers the per-frame ground overlap query;
//! - [`input::InputState`] carries the horizontal axis and jump edge;
//! - [`anim::AnimationSink`] receives play-clip / set-flag commands.
//!
//! Characters live in a [`hecs::World`]. Spawn one with
//! [`spawn_character`], then call [`update_characters`] once per frame:
//! sampling refreshes each character's context, the machine ticks, and any
//! transition fires its exit/enter side effects before the frame ends.

pub mod anim;
pub mod character;
pub mod components;
pub mod context;
pub mod fsm;
pub mod input;
pub mod sense;
pub mod states;
pub mod systems;

pub use character::{character_status, spawn_character, CharacterParams, CharacterStatus};
pub use components::{Facing, Player, Position, Velocity};
pub use context::CharacterContext;
pub use fsm::{FsmError, State, StateMachine};
pub use states::{MoveState, PlayerFsm};
pub use systems::update_characters;
