//! Follow camera configuration

use serde::{Deserialize, Serialize};

/// Follow camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowConfig {
    /// Position easing rate (per second)
    pub movement_smoothness: f32,
    /// Rotation easing rate (per second)
    pub rotation_smoothness: f32,
    /// Whether the camera tracks its target at all
    pub can_follow: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            movement_smoothness: 1.0,
            rotation_smoothness: 1.0,
            can_follow: true,
        }
    }
}
