//! Frame clock
//!
//! Splits wall-clock frame deltas into a variable-rate update phase and a
//! fixed-rate physics phase.

use serde::{Deserialize, Serialize};

/// Clock tuning, loaded from the `[time]` settings table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Simulated seconds per real second
    pub time_scale: f32,
    /// Length of one physics step, seconds
    pub fixed_timestep: f32,
    /// Longest frame delta accepted; hitches beyond this are dropped
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 50.0,
            max_delta_time: 0.25,
        }
    }
}

/// Frame clock driving both the update and fixed-update phases.
///
/// Each frame call [`update`](Self::update) once, then run
/// [`fixed_steps`](Self::fixed_steps) physics ticks.
#[derive(Debug, Clone)]
pub struct GameTime {
    pub config: TimeConfig,
    /// Simulated seconds since start
    pub total_time: f64,
    /// This frame's delta after clamping and scaling; zero while paused
    pub delta_time: f32,
    /// This frame's delta after clamping only
    pub unscaled_delta_time: f32,
    pub frame_count: u64,
    pub fixed_step_count: u64,
    pub paused: bool,
    /// Simulated time not yet consumed by a fixed step
    pending: f32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new(TimeConfig::default())
    }
}

impl GameTime {
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            total_time: 0.0,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            frame_count: 0,
            fixed_step_count: 0,
            paused: false,
            pending: 0.0,
        }
    }

    /// Start a new frame that took `raw_delta` real seconds
    pub fn update(&mut self, raw_delta: f32) {
        self.frame_count += 1;
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.delta_time = if self.paused {
            0.0
        } else {
            self.unscaled_delta_time * self.config.time_scale
        };
        self.total_time += f64::from(self.delta_time);
        self.pending += self.delta_time;
    }

    /// Number of physics steps due this frame; consumes the pending time
    pub fn fixed_steps(&mut self) -> u32 {
        let step = self.config.fixed_timestep;
        let mut due = 0;
        while self.pending >= step {
            self.pending -= step;
            due += 1;
        }
        self.fixed_step_count += u64::from(due);
        due
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Negative scales are treated as zero
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}
