//! Stride Game - Character locomotion and camera follow
//!
//! Turns per-frame input and camera orientation into commanded velocity and
//! jump impulses on a physical body, and eases a follow camera after it.

pub mod camera;
pub mod input;
pub mod player;

pub use camera::{CameraBasis, CameraFollower, FollowConfig};
pub use input::{
    InputAction, InputBindings, InputHandler, InputSample, InputSampler, InputSource, InputState,
};
pub use player::{
    GroundContact, GroundSensor, GroundSensorConfig, Heading, JumpController,
    LocomotionController, MotionPlan, MotionPlanner, MovementConfig, NoTurn, SpeedState,
    TickReport, TurnStrategy,
};
