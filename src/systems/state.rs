//! Drive each character's movement FSM. Runs after sampling, so states see
//! this frame's context.

use hecs::World;
use log::debug;

use crate::components::Player;
use crate::context::CharacterContext;
use crate::fsm::FsmError;
use crate::states::{MoveState, PlayerFsm};

/// Tick every character's machine once. A state returning a transition
/// request has it applied within the same call, firing exit/enter on the
/// way through.
pub fn player_state_system(world: &mut World) -> Result<(), FsmError<MoveState>> {
    for (_e, (_player, fsm, ctx)) in
        world.query_mut::<(&Player, &mut PlayerFsm, &mut CharacterContext)>()
    {
        if let Some(next) = fsm.tick(ctx)? {
            debug!("player state -> {:?}", next);
        }
    }
    Ok(())
}
