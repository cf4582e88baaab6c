//! Per-frame systems, in the order `update_characters` runs them:
//! ground sensing → input application → FSM tick.

mod sampling;
mod state;


pub use sampling::{
    apply_input_system, ground_sense_system, DOUBLE_JUMP_SCALE, GROUNDED_BUFFER_DURATION,
};
pub use state::player_state_system;

use hecs::World;

use crate::fsm::FsmError;
use crate::input::InputState;
use crate::sense::GroundProbe;
use crate::states::MoveState;

/// Run one controller frame for every character in the world.
///
/// Sampling fully refreshes each [`CharacterContext`] before any machine
/// ticks, so state logic always sees this frame's facts. `dt` is the
/// elapsed frame time in seconds.
///
/// [`CharacterContext`]: crate::context::CharacterContext
pub fn update_characters(
    world: &mut World,
    probe: &dyn GroundProbe,
    input: &InputState,
    dt: f32,
) -> Result<(), FsmError<MoveState>> {
    ground_sense_system(world, probe, dt);
    apply_input_system(world, input);
    player_state_system(world)
}
