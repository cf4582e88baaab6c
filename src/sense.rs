//! Seam to the physics collaborator's ground-contact query.

use glam::Vec2;

/// Collision-layer filter for overlap probes. Bit `n` selects layer `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    pub fn layer(n: u32) -> LayerMask {
        LayerMask(1 << n)
    }

    pub fn contains(self, layer: u32) -> bool {
        self.0 & (1 << layer) != 0
    }
}

/// Boolean overlap query answered by the physics engine.
///
/// The controller probes a fixed point below the character's feet once per
/// frame; anything fancier (contact normals, sweeps) stays on the physics
/// side of the seam.
pub trait GroundProbe {
    /// True when any collider on a layer in `mask` overlaps the circle of
    /// `radius` at `point`.
    fn is_overlapping(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool;
}
