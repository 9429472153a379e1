//! Deterministic frame loop
//!
//! Each frame runs three phases in order: input update, zero or more fixed
//! physics ticks, then the camera's late update.

use glam::{Quat, Vec3};
use stride_core::GameTime;
use stride_game::{CameraFollower, InputState, LocomotionController, TickReport};
use stride_physics::{ActorHandle, ActorShape, PhysicsConfig, PhysicsWorld};
use tracing::warn;

use crate::settings::Settings;

const RAMP_HALF_EXTENTS: Vec3 = Vec3::new(2.0, 0.1, 4.0);
const RAMP_CENTER: Vec3 = Vec3::new(6.0, 0.5, -10.0);
const RAMP_ANGLE_DEGREES: f32 = 15.0;

/// Owns the world, the actor and the camera that follows it
pub struct Game {
    pub time: GameTime,
    pub physics: PhysicsWorld,
    pub actor: ActorHandle,
    pub controller: LocomotionController,
    pub camera: CameraFollower,
    last_tick: Option<TickReport>,
}

impl Game {
    /// Build a world with a flat floor and a ramp, and spawn the actor at `spawn`
    pub fn new(settings: &Settings, spawn: Vec3) -> Self {
        let mut physics = PhysicsWorld::with_config(PhysicsConfig {
            gravity: Vec3::new(0.0, settings.physics.gravity, 0.0),
            timestep: settings.time.fixed_timestep,
        });
        physics.create_ground(0.0);
        physics.create_ramp(RAMP_HALF_EXTENTS, RAMP_CENTER, RAMP_ANGLE_DEGREES);

        let shape = ActorShape {
            height: settings.physics.actor_height,
            radius: settings.physics.actor_radius,
            mass: settings.physics.actor_mass,
            ..Default::default()
        };
        let actor = ActorHandle::spawn(&mut physics, spawn, Quat::IDENTITY, &shape);
        physics.refresh_queries();

        let mut camera = CameraFollower::with_config(settings.camera.clone());
        camera.follow(actor.id, actor.transform(&physics));

        Self {
            time: GameTime::new(settings.time.clone()),
            physics,
            actor,
            controller: LocomotionController::with_config(
                settings.movement.clone(),
                settings.ground,
            ),
            camera,
            last_tick: None,
        }
    }

    /// Run one rendered frame of `raw_dt` seconds
    pub fn frame(&mut self, raw_dt: f32, input: &InputState) {
        self.time.update(raw_dt);

        self.controller.update(input);

        for _ in 0..self.time.fixed_steps() {
            self.fixed_update();
        }

        self.late_update();
    }

    fn fixed_update(&mut self) {
        match self.actor.bind(&mut self.physics) {
            Ok(mut body) => {
                let report = self.controller.fixed_update(&mut body, Some(&self.camera));
                self.last_tick = Some(report);
            }
            Err(e) => warn!("Skipping locomotion tick: {}", e),
        }
        self.physics.step();
    }

    fn late_update(&mut self) {
        let target = self.actor.transform(&self.physics);
        self.camera.late_update(target.as_ref(), self.time.delta_time);
    }

    /// Report from the most recent physics tick
    pub fn last_tick(&self) -> Option<TickReport> {
        self.last_tick
    }

    pub fn actor_position(&self) -> Option<Vec3> {
        self.actor.transform(&self.physics).map(|t| t.position)
    }
}
