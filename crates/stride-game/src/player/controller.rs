//! Third-person locomotion controller
//!
//! Input is read every rendered frame and latched; movement is committed on
//! the fixed physics tick.

use glam::Vec3;
use stride_physics::{PhysicalBody, SpatialQuery};
use tracing::trace;

use super::{
    GroundContact, GroundSensor, GroundSensorConfig, Heading, JumpController, MotionPlan,
    MotionPlanner, MovementConfig, NoTurn, SpeedState, TurnStrategy,
};
use crate::camera::CameraBasis;
use crate::input::{InputSample, InputSampler, InputSource};

/// What a physics tick did to the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Contact probed at the start of the tick
    pub contact: GroundContact,
    /// Speed after applying this tick's run edges
    pub speed: f32,
    /// Whether a jump impulse was applied
    pub jumped: bool,
    /// Velocity written to the body, if any
    pub velocity: Option<Vec3>,
}

/// Drives one actor from input, camera and ground contact
pub struct LocomotionController {
    /// Movement configuration
    pub config: MovementConfig,
    sampler: InputSampler,
    sensor: GroundSensor,
    speed: SpeedState,
    planner: MotionPlanner,
    jump: JumpController,
    turn: Box<dyn TurnStrategy>,
    /// Input gathered since the last physics tick
    pending: InputSample,
    contact: GroundContact,
    heading: Heading,
    last_plan: Option<MotionPlan>,
}

impl LocomotionController {
    /// Create a controller with default configuration
    pub fn new() -> Self {
        Self::with_config(MovementConfig::default(), GroundSensorConfig::default())
    }

    /// Create a controller with custom movement and ground probe settings
    pub fn with_config(config: MovementConfig, sensor: GroundSensorConfig) -> Self {
        Self {
            sampler: InputSampler::new(),
            sensor: GroundSensor::new(sensor),
            speed: SpeedState::from_config(&config),
            planner: MotionPlanner::new(),
            jump: JumpController::new(config.jump_force),
            turn: Box::new(NoTurn),
            pending: InputSample::default(),
            contact: GroundContact::AIRBORNE,
            heading: Heading::default(),
            last_plan: None,
            config,
        }
    }

    /// Replace the rotation hook run after each committed move
    pub fn with_turn_strategy(mut self, turn: Box<dyn TurnStrategy>) -> Self {
        self.turn = turn;
        self
    }

    /// Contact from the most recent tick
    pub fn contact(&self) -> GroundContact {
        self.contact
    }

    pub fn is_grounded(&self) -> bool {
        self.contact.is_grounded
    }

    pub fn current_speed(&self) -> f32 {
        self.speed.current_speed()
    }

    pub fn is_running(&self) -> bool {
        self.speed.is_running()
    }

    /// Heading from the most recent committed move
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Plan from the most recent committed move
    pub fn last_plan(&self) -> Option<&MotionPlan> {
        self.last_plan.as_ref()
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    /// Per-frame phase: sample input and latch its edges.
    ///
    /// Edges stay pending until a physics tick consumes them, so frames that
    /// run without a physics step in between don't lose a press.
    pub fn update(&mut self, input: &impl InputSource) {
        let sample = self.sampler.sample(input);
        trace!(h = sample.horizontal, v = sample.vertical, "input");
        self.pending.merge(sample);
    }

    /// Fixed-rate phase: probe, apply speed edges, move, jump.
    pub fn fixed_update<W>(&mut self, body: &mut W, camera: Option<&dyn CameraBasis>) -> TickReport
    where
        W: PhysicalBody + SpatialQuery,
    {
        let transform = body.transform();
        self.contact = self.sensor.probe(&*body, transform.position);
        let grounded = self.contact.is_grounded;

        // Edges are consumed by the first tick that sees them
        let sample = self.pending;
        self.pending.clear_edges();

        let speed = self.speed.update(&sample, grounded);

        let sensor = self.sensor;
        let plan = if sample.has_movement() {
            self.planner
                .plan(&sample, camera, &transform, speed, |position| {
                    sensor.probe(&*body, position)
                })
        } else {
            None
        };

        let mut velocity = None;
        if let Some(plan) = plan {
            body.set_velocity(plan.velocity);
            self.heading = plan.heading;
            self.turn
                .apply_extra_rotation(&plan.heading, &self.config, &mut *body);
            self.last_plan = Some(plan);
            velocity = Some(plan.velocity);
        }

        // After the velocity write, so a moving jump isn't overwritten
        let jumped = self.jump.try_jump(sample.jump_edge, grounded, body);

        trace!(?velocity, grounded, speed, jumped, "locomotion tick");

        TickReport {
            contact: self.contact,
            speed,
            jumped,
            velocity,
        }
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new()
    }
}
