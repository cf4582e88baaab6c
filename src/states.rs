//! The five movement states and their transition policy.
//!
//! Each state's `tick` covers all transitions **out** of that state, reading
//! the freshly sampled [`CharacterContext`]. Airborne readings inside the
//! vertical dead zone hold Jumping/DoubleJumping (a stall at the apex is
//! still the ascent) and resolve every other state to Falling. `exit` is
//! deliberately empty throughout: entering a state re-establishes the full
//! animation side effects, so there is nothing to clean up.

use crate::anim::{clips, flags};
use crate::context::{CharacterContext, MAX_JUMP_COUNT};
use crate::fsm::{FsmError, State, StateMachine};

/// Identity of one movement state — the FSM registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveState {
    Idle,
    Running,
    Jumping,
    Falling,
    DoubleJumping,
}

/// The machine driving one character.
pub type PlayerFsm = StateMachine<MoveState, CharacterContext>;

/// Landing resolution shared by every airborne state: back to Running when
/// the stick is deflected, otherwise Idle.
fn landing_state(ctx: &CharacterContext) -> MoveState {
    if ctx.moving() {
        MoveState::Running
    } else {
        MoveState::Idle
    }
}

// ---------------------------------------------------------------------------
// Grounded states
// ---------------------------------------------------------------------------

pub struct Idle;

impl State for Idle {
    type Key = MoveState;
    type Ctx = CharacterContext;

    fn key(&self) -> MoveState {
        MoveState::Idle
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.enter_animation(flags::IDLE, clips::IDLE);
    }

    fn tick(&mut self, ctx: &mut CharacterContext) -> Option<MoveState> {
        if !ctx.stable_ground() {
            if ctx.rising() {
                Some(MoveState::Jumping)
            } else {
                Some(MoveState::Falling)
            }
        } else if ctx.moving() {
            Some(MoveState::Running)
        } else {
            None
        }
    }
}

pub struct Running;

impl State for Running {
    type Key = MoveState;
    type Ctx = CharacterContext;

    fn key(&self) -> MoveState {
        MoveState::Running
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.enter_animation(flags::RUNNING, clips::RUNNING);
    }

    fn tick(&mut self, ctx: &mut CharacterContext) -> Option<MoveState> {
        if !ctx.stable_ground() {
            if ctx.rising() {
                Some(MoveState::Jumping)
            } else {
                Some(MoveState::Falling)
            }
        } else if !ctx.moving() {
            Some(MoveState::Idle)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Airborne states
// ---------------------------------------------------------------------------

pub struct Jumping;

impl State for Jumping {
    type Key = MoveState;
    type Ctx = CharacterContext;

    fn key(&self) -> MoveState {
        MoveState::Jumping
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.enter_animation(flags::JUMPING, clips::JUMP);
    }

    fn tick(&mut self, ctx: &mut CharacterContext) -> Option<MoveState> {
        if ctx.stable_ground() {
            Some(landing_state(ctx))
        } else if ctx.falling() {
            Some(MoveState::Falling)
        } else if ctx.rising() && ctx.jump_count == MAX_JUMP_COUNT {
            Some(MoveState::DoubleJumping)
        } else {
            // Apex dead zone: keep riding the ascent.
            None
        }
    }
}

pub struct Falling;

impl State for Falling {
    type Key = MoveState;
    type Ctx = CharacterContext;

    fn key(&self) -> MoveState {
        MoveState::Falling
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.enter_animation(flags::FALLING, clips::FALL);
    }

    fn tick(&mut self, ctx: &mut CharacterContext) -> Option<MoveState> {
        if ctx.stable_ground() {
            Some(landing_state(ctx))
        } else if ctx.rising() {
            // Upward again mid-fall: a jump fired. Full budget spent means
            // it was the double jump.
            if ctx.jump_count == MAX_JUMP_COUNT {
                Some(MoveState::DoubleJumping)
            } else {
                Some(MoveState::Jumping)
            }
        } else {
            None
        }
    }
}

pub struct DoubleJumping;

impl State for DoubleJumping {
    type Key = MoveState;
    type Ctx = CharacterContext;

    fn key(&self) -> MoveState {
        MoveState::DoubleJumping
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.enter_animation(flags::DOUBLE_JUMPING, clips::DOUBLE_JUMP);
    }

    fn tick(&mut self, ctx: &mut CharacterContext) -> Option<MoveState> {
        if ctx.stable_ground() {
            Some(landing_state(ctx))
        } else if ctx.falling() {
            Some(MoveState::Falling)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------

/// Build a machine with all five movement states registered. The caller
/// still has to `start` it (on [`MoveState::Idle`] for a fresh character).
pub fn build_player_fsm() -> Result<PlayerFsm, FsmError<MoveState>> {
    let mut fsm = PlayerFsm::new();
    fsm.register(Box::new(Idle))?;
    fsm.register(Box::new(Running))?;
    fsm.register(Box::new(Jumping))?;
    fsm.register(Box::new(Falling))?;
    fsm.register(Box::new(DoubleJumping))?;
    Ok(fsm)
}
