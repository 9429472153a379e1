//! Walk/run speed state

use tracing::debug;

use super::MovementConfig;
use crate::input::InputSample;

/// Current movement speed, toggled between walk and run by key edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedState {
    walk_speed: f32,
    run_speed: f32,
    current_speed: f32,
}

impl SpeedState {
    /// Start at walking speed
    pub fn new(walk_speed: f32, run_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            current_speed: walk_speed,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.walk_speed, config.run_speed)
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn is_running(&self) -> bool {
        self.current_speed == self.run_speed && self.run_speed != self.walk_speed
    }

    /// Apply this frame's run edges.
    ///
    /// Pressing run only counts on the ground. Releasing it always drops back
    /// to walking, so a release in mid-air can't leave the actor stuck running.
    pub fn update(&mut self, sample: &InputSample, grounded: bool) -> f32 {
        if sample.run_key_down && grounded {
            self.current_speed = self.run_speed;
            debug!(speed = self.current_speed, "run");
        }

        if sample.run_key_up {
            self.current_speed = self.walk_speed;
            debug!(speed = self.current_speed, "walk");
        }

        self.current_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_down() -> InputSample {
        InputSample {
            run_key_down: true,
            ..Default::default()
        }
    }

    fn run_up() -> InputSample {
        InputSample {
            run_key_up: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_walking() {
        let speed = SpeedState::from_config(&MovementConfig::default());
        assert_eq!(speed.current_speed(), 2.0);
        assert!(!speed.is_running());
    }

    #[test]
    fn test_run_press_needs_ground() {
        let mut speed = SpeedState::new(2.0, 5.0);
        assert_eq!(speed.update(&run_down(), false), 2.0);
        assert_eq!(speed.update(&run_down(), true), 5.0);
        assert!(speed.is_running());
    }

    #[test]
    fn test_release_reverts_even_airborne() {
        let mut speed = SpeedState::new(2.0, 5.0);
        speed.update(&run_down(), true);

        assert_eq!(speed.update(&run_up(), false), 2.0);

        speed.update(&run_down(), true);
        assert_eq!(speed.update(&run_up(), true), 2.0);
    }

    #[test]
    fn test_no_edges_is_idempotent() {
        let mut speed = SpeedState::new(2.0, 5.0);
        let idle = InputSample {
            horizontal: 1.0,
            vertical: -0.5,
            ..Default::default()
        };

        for grounded in [true, false, true, true, false] {
            assert_eq!(speed.update(&idle, grounded), 2.0);
        }

        speed.update(&run_down(), true);
        for grounded in [false, true, false] {
            assert_eq!(speed.update(&idle, grounded), 5.0);
        }
    }

    #[test]
    fn test_press_and_release_in_one_sample_ends_walking() {
        let mut speed = SpeedState::new(2.0, 5.0);
        let both = InputSample {
            run_key_down: true,
            run_key_up: true,
            ..Default::default()
        };
        assert_eq!(speed.update(&both, true), 2.0);
    }
}
