//! Extra rotation hook run after each committed move

use stride_physics::PhysicalBody;

use super::{Heading, MovementConfig};

/// Rotates the actor toward its input heading after movement is committed.
///
/// Velocity follows the actor's current facing, so this is where turning
/// toward the input direction (or animation-driven turning) plugs in.
pub trait TurnStrategy {
    fn apply_extra_rotation(
        &mut self,
        heading: &Heading,
        config: &MovementConfig,
        body: &mut dyn PhysicalBody,
    );
}

/// Leaves the actor's facing untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTurn;

impl TurnStrategy for NoTurn {
    fn apply_extra_rotation(
        &mut self,
        _heading: &Heading,
        _config: &MovementConfig,
        _body: &mut dyn PhysicalBody,
    ) {
    }
}
