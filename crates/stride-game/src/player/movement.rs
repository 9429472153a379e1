//! Movement configuration and constants

use serde::{Deserialize, Serialize};

/// Movement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Walking speed in meters per second
    pub walk_speed: f32,
    /// Running speed in meters per second
    pub run_speed: f32,
    /// Upward impulse applied on a grounded jump (N*s)
    pub jump_force: f32,
    /// Turn rate while standing still, degrees per second
    pub stationary_turn_speed: f32,
    /// Turn rate while moving, degrees per second
    pub moving_turn_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.0,
            jump_force: 350.0,
            stationary_turn_speed: 180.0,
            moving_turn_speed: 360.0,
        }
    }
}

impl MovementConfig {
    /// Turn rate in radians per second, blended by how much of the input
    /// pushes forward (0 = turning on the spot, 1 = full stride)
    pub fn turn_rate(&self, forward_amount: f32) -> f32 {
        let t = forward_amount.abs().clamp(0.0, 1.0);
        let degrees = self.stationary_turn_speed
            + (self.moving_turn_speed - self.stationary_turn_speed) * t;
        degrees.to_radians()
    }
}
