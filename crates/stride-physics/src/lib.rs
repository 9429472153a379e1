//! Stride Physics - Physics simulation using rapier3d
//!
//! Provides the physics world, the body/query seams the locomotion layer
//! depends on, and the rapier-backed actor body.

mod actor;
mod body;
mod error;

pub use actor::{ActorBody, ActorHandle, ActorShape};
pub use body::{PhysicalBody, RayHit, SpatialQuery};
pub use error::PhysicsError;

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;

/// Friction of static level geometry
const LEVEL_FRICTION: f32 = 0.7;

/// Simulation parameters for a [`PhysicsWorld`]
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Acceleration applied to every dynamic body, m/s^2
    pub gravity: Vec3,
    /// Seconds advanced by each call to [`PhysicsWorld::step`]
    pub timestep: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::NEG_Y * 9.81,
            timestep: 1.0 / 50.0,
        }
    }
}

/// Solver state rapier threads through every step
struct Solver {
    parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd: CCDSolver,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
}

impl Solver {
    fn new(timestep: f32) -> Self {
        let mut parameters = IntegrationParameters::default();
        parameters.dt = timestep;
        Self {
            parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd: CCDSolver::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
        }
    }
}

/// Level geometry, actor bodies and the ray query index over them.
///
/// Rays see the colliders as of the last [`step`](Self::step) or
/// [`refresh_queries`](Self::refresh_queries).
pub struct PhysicsWorld {
    pub config: PhysicsConfig,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    solver: Solver,
    queries: QueryPipeline,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        let solver = Solver::new(config.timestep);
        Self {
            config,
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            solver,
            queries: QueryPipeline::new(),
        }
    }

    /// Advance the simulation by one fixed timestep and re-index the colliders
    pub fn step(&mut self) {
        let g = self.config.gravity;
        let solver = &mut self.solver;
        solver.pipeline.step(
            &vector![g.x, g.y, g.z],
            &solver.parameters,
            &mut solver.islands,
            &mut solver.broad_phase,
            &mut solver.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut solver.impulse_joints,
            &mut solver.multibody_joints,
            &mut solver.ccd,
            None,
            &(),
            &(),
        );

        self.refresh_queries();
    }

    /// Re-index the colliders for ray queries.
    ///
    /// Needed after adding geometry if rays must see it before the first step.
    pub fn refresh_queries(&mut self) {
        self.queries.update(&self.colliders);
    }

    /// Insert a collider that belongs to no body (level geometry)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.colliders.insert(collider)
    }

    /// Insert a body and attach `collider` to it
    pub fn add_dynamic_body(
        &mut self,
        body: RigidBody,
        collider: Collider,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = self.bodies.insert(body);
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);
        (body, collider)
    }

    /// Remove a body together with its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        let solver = &mut self.solver;
        self.bodies.remove(
            handle,
            &mut solver.islands,
            &mut self.colliders,
            &mut solver.impulse_joints,
            &mut solver.multibody_joints,
            true,
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }

    /// Closest hit along a ray, with the surface normal at the hit point.
    ///
    /// `direction` is expected to be unit length so `distance` is in metres.
    pub fn raycast_detailed(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<RayHit> {
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            vector![direction.x, direction.y, direction.z],
        );

        let (_, hit) = self.queries.cast_ray_and_get_normal(
            &self.bodies,
            &self.colliders,
            &ray,
            max_distance,
            true,
            filter,
        )?;
        let n = hit.normal;
        Some(RayHit {
            distance: hit.time_of_impact,
            point: origin + direction * hit.time_of_impact,
            normal: Vec3::new(n.x, n.y, n.z),
        })
    }

    /// Infinite horizontal floor at height `y`
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let up = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let floor = ColliderBuilder::halfspace(up)
            .translation(vector![0.0, y, 0.0])
            .friction(LEVEL_FRICTION)
            .restitution(0.0)
            .build();
        self.add_static_collider(floor)
    }

    /// Slab tilted about the X axis by `angle_degrees`, for slope walking
    pub fn create_ramp(
        &mut self,
        half_extents: Vec3,
        position: Vec3,
        angle_degrees: f32,
    ) -> ColliderHandle {
        let slab = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .rotation(vector![angle_degrees.to_radians(), 0.0, 0.0])
            .friction(LEVEL_FRICTION)
            .build();
        self.add_static_collider(slab)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuery for PhysicsWorld {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.raycast_detailed(origin, direction, max_distance, QueryFilter::default())
    }
}
