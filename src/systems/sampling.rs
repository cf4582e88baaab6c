//! Per-frame refresh of ground contact and movement input.
//!
//! Runs before the FSM tick. Jump handling mutates velocity and the jump
//! budget here, synchronously, so the transition policy already sees the
//! post-jump facts on the same frame.

use hecs::World;
use log::debug;

use crate::character::CharacterParams;
use crate::components::{Facing, Player, Position, Velocity};
use crate::context::{
    CharacterContext, GROUNDED_VELOCITY_EPSILON, INPUT_THRESHOLD, MAX_JUMP_COUNT,
};
use crate::input::InputState;
use crate::sense::GroundProbe;

/// Seconds of grace after touchdown during which contact still qualifies as
/// stable ground for state transitions.
pub const GROUNDED_BUFFER_DURATION: f32 = 0.15;

/// The double jump launches at this fraction of the full jump impulse.
pub const DOUBLE_JUMP_SCALE: f32 = 0.8;

/// Refresh ground contact for every character: landing-edge detection, the
/// grace buffer, and the landing jump-budget reset.
///
/// The budget reset is a physical fact of being settled on the ground — it
/// happens here, independent of whatever state the FSM is in.
pub fn ground_sense_system(world: &mut World, probe: &dyn GroundProbe, dt: f32) {
    for (_e, (_player, ctx, pos, vel, params)) in world.query_mut::<(
        &Player,
        &mut CharacterContext,
        &Position,
        &Velocity,
        &CharacterParams,
    )>() {
        ctx.was_grounded = ctx.grounded;
        let point = pos.0 + params.probe_offset;
        ctx.grounded = probe.is_overlapping(point, params.probe_radius, params.ground_layers);

        if ctx.grounded && !ctx.was_grounded {
            ctx.grounded_buffer = GROUNDED_BUFFER_DURATION;
        }
        // Decays every frame whether or not contact holds.
        if ctx.grounded_buffer > 0.0 {
            ctx.grounded_buffer = (ctx.grounded_buffer - dt).max(0.0);
        }

        if ctx.grounded && vel.0.y.abs() < GROUNDED_VELOCITY_EPSILON {
            ctx.jump_count = 0;
        }

        ctx.vertical_velocity = vel.0.y;
    }
}

/// Apply this frame's input: horizontal velocity, jump presses, facing.
///
/// Horizontal control is never gated on state — the axis drives `velocity.x`
/// every frame, leaving `velocity.y` to gravity and jumps.
pub fn apply_input_system(world: &mut World, input: &InputState) {
    for (_e, (_player, ctx, vel, facing, params)) in world.query_mut::<(
        &Player,
        &mut CharacterContext,
        &mut Velocity,
        &mut Facing,
        &CharacterParams,
    )>() {
        let dir = input.horizontal_axis();
        ctx.horizontal_input = dir;
        vel.0.x = dir * params.move_speed;

        if input.jump_pressed() {
            if ctx.grounded || ctx.jump_count == 0 {
                // First jump. Also fires mid-air while the budget is
                // untouched (walked off a ledge) — intended leniency.
                vel.0.y = params.jump_force;
                ctx.jump_count = 1;
                debug!("jump (grounded={})", ctx.grounded);
            } else if ctx.jump_count < MAX_JUMP_COUNT {
                // Weaker double jump; consumes the rest of the budget.
                vel.0.y = params.jump_force * DOUBLE_JUMP_SCALE;
                ctx.jump_count = MAX_JUMP_COUNT;
                debug!("double jump");
            }
        }

        ctx.vertical_velocity = vel.0.y;

        if dir > INPUT_THRESHOLD {
            *facing = Facing::Right;
        } else if dir < -INPUT_THRESHOLD {
            *facing = Facing::Left;
        }
    }
}
