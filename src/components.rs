//! Components attached to controllable character entities.

use glam::Vec2;

/// Marker: this entity is a player-controlled character.
pub struct Player;

/// World-space position. The ground probe is cast relative to this.
pub struct Position(pub Vec2);

/// Linear velocity in world units per second. This component is the surface
/// shared with the physics collaborator: the controller writes it, the host
/// integrates it.
pub struct Velocity(pub Vec2);

/// Horizontal facing, for sprite flipping and aim. Holds its last value
/// while the axis sits inside the input dead zone — no snap-back to center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
