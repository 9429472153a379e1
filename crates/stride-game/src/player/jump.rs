//! Grounded jump impulse

use stride_core::axis;
use stride_physics::PhysicalBody;
use tracing::debug;

/// Issues one upward impulse per grounded jump request
#[derive(Debug, Clone, Copy)]
pub struct JumpController {
    pub jump_force: f32,
}

impl JumpController {
    pub fn new(jump_force: f32) -> Self {
        Self { jump_force }
    }

    /// Apply the jump impulse if `requested` while `grounded`.
    ///
    /// Returns whether an impulse was applied. The request is an edge, so a
    /// held key can't fire twice.
    pub fn try_jump<B: PhysicalBody + ?Sized>(
        &self,
        requested: bool,
        grounded: bool,
        body: &mut B,
    ) -> bool {
        if !(requested && grounded) {
            return false;
        }

        body.apply_impulse(axis::UP * self.jump_force);
        debug!(force = self.jump_force, "jump");
        true
    }
}
