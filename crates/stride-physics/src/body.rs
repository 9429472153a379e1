//! Narrow physics seams used by the locomotion layer
//!
//! The locomotion code only ever talks to these two traits, so it can run
//! against rapier in the game and against an in-memory stub in tests.

use glam::Vec3;
use stride_core::Transform;

/// A simulated body the controller can read and command.
///
/// The controller never integrates motion itself; it assigns a velocity or
/// adds an impulse and lets the physics step do the rest.
pub trait PhysicalBody {
    /// Current world transform (feet position and facing)
    fn transform(&self) -> Transform;

    /// Current linear velocity
    fn velocity(&self) -> Vec3;

    /// Replace the linear velocity
    fn set_velocity(&mut self, velocity: Vec3);

    /// Add an instantaneous change in momentum
    fn apply_impulse(&mut self, impulse: Vec3);
}

/// Read-only ray queries against world geometry.
///
/// Implementations must not mutate simulation state.
pub trait SpatialQuery {
    /// Cast a ray and return the closest hit within `max_distance`, if any
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Result of a successful ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray to the hit point
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Surface normal at hit point
    pub normal: Vec3,
}
