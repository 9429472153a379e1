//! Player locomotion module
//!
//! Ground contact, walk/run speed, camera-relative motion planning and
//! jumping, orchestrated per physics tick by [`LocomotionController`].

mod controller;
mod ground;
mod jump;
mod movement;
mod planner;
mod speed;
mod turning;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{LocomotionController, TickReport};
pub use ground::{GroundContact, GroundSensor, GroundSensorConfig};
pub use jump::JumpController;
pub use movement::MovementConfig;
pub use planner::{project_on_plane, Heading, MotionPlan, MotionPlanner};
pub use speed::SpeedState;
pub use turning::{NoTurn, TurnStrategy};
