//! Character assembly: tuning parameters, entity spawning, and the read
//! surface other game systems query.

use glam::Vec2;
use hecs::{Entity, World};

use crate::anim::AnimationSink;
use crate::components::{Facing, Player, Position, Velocity};
use crate::context::{CharacterContext, MAX_JUMP_COUNT};
use crate::fsm::FsmError;
use crate::sense::LayerMask;
use crate::states::{build_player_fsm, MoveState, PlayerFsm};

/// Tuning for one character. A component, so characters can differ.
pub struct CharacterParams {
    /// Horizontal speed applied directly from the axis value.
    pub move_speed: f32,
    /// Vertical velocity set by a ground jump.
    pub jump_force: f32,
    /// Ground-probe center relative to the entity position (below the feet).
    pub probe_offset: Vec2,
    /// Ground-probe circle radius.
    pub probe_radius: f32,
    /// Layers that count as ground.
    pub ground_layers: LayerMask,
}

impl Default for CharacterParams {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            jump_force: 6.0,
            probe_offset: Vec2::new(0.0, -0.5),
            probe_radius: 0.2,
            ground_layers: LayerMask::ALL,
        }
    }
}

/// Spawn a fully wired character: components, a registered movement FSM
/// started in Idle, and a context bound to the given animation sink.
pub fn spawn_character(
    world: &mut World,
    params: CharacterParams,
    position: Vec2,
    anim: Box<dyn AnimationSink + Send + Sync>,
) -> Result<Entity, FsmError<MoveState>> {
    let mut fsm = build_player_fsm()?;
    let mut ctx = CharacterContext::new(anim);
    fsm.start(MoveState::Idle, &mut ctx)?;

    Ok(world.spawn((
        Player,
        Position(position),
        Velocity(Vec2::ZERO),
        Facing::default(),
        params,
        ctx,
        fsm,
    )))
}

/// Snapshot of the facts other game systems (UI, audio triggers) may query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStatus {
    pub state: MoveState,
    pub facing: Facing,
    pub grounded: bool,
    /// Jumps consumed since the last landing.
    pub jump_count: u8,
    /// Jumps still available before a ground touch is required.
    pub jumps_remaining: u8,
}

/// Read a character's public status. None when `entity` is not a spawned
/// character or its machine has not been started.
pub fn character_status(world: &World, entity: Entity) -> Option<CharacterStatus> {
    let fsm = world.get::<&PlayerFsm>(entity).ok()?;
    let ctx = world.get::<&CharacterContext>(entity).ok()?;
    let facing = world.get::<&Facing>(entity).ok()?;
    Some(CharacterStatus {
        state: fsm.current()?,
        facing: *facing,
        grounded: ctx.grounded,
        jump_count: ctx.jump_count,
        jumps_remaining: MAX_JUMP_COUNT - ctx.jump_count,
    })
}
