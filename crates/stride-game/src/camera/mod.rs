//! Camera module
//!
//! A smoothing follow camera that eases toward the actor after physics.

mod config;
mod follower;

pub use config::FollowConfig;
pub use follower::{CameraBasis, CameraFollower};
