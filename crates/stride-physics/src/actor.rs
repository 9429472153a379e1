//! Rapier-backed actor body
//!
//! The actor is a dynamic rigid body with locked rotations and a capsule
//! collider. The body translation is the actor's feet position, sunk slightly
//! below the capsule's rounded bottom so a short downward ground probe from
//! the feet still reaches the surface when the capsule rests on a slope.

use glam::{Quat, Vec3};
use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion};
use rapier3d::prelude::*;
use stride_core::{EntityId, Transform};
use tracing::debug;

use crate::{PhysicalBody, PhysicsError, PhysicsWorld, RayHit, SpatialQuery};

/// Actor capsule and mass configuration
#[derive(Debug, Clone)]
pub struct ActorShape {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Total mass in kilograms (default: 70)
    pub mass: f32,
    /// Surface friction, combined with the ground by taking the smaller
    /// value (default: 0.7, enough to stand still on ramps)
    pub friction: f32,
    /// How far the feet sit below the capsule's lowest point (default: 0.05).
    ///
    /// On a slope of angle `a` the rounded bottom lifts the feet by
    /// `radius * (1 / cos(a) - 1)`; the sink keeps them at or under the surface.
    pub foot_sink: f32,
}

impl Default for ActorShape {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            mass: 70.0,
            friction: 0.7,
            foot_sink: 0.05,
        }
    }
}

/// Stable handles to an actor living in a [`PhysicsWorld`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorHandle {
    /// Actor identity
    pub id: EntityId,
    /// The actor's rigid body
    pub body: RigidBodyHandle,
    /// The actor's capsule collider
    pub collider: ColliderHandle,
}

impl ActorHandle {
    /// Spawn an actor with its feet at `position`
    pub fn spawn(
        world: &mut PhysicsWorld,
        position: Vec3,
        rotation: Quat,
        shape: &ActorShape,
    ) -> Self {
        let rigid_body = RigidBodyBuilder::dynamic()
            .position(to_isometry(position, rotation))
            .lock_rotations()
            .build();

        let half_height = (shape.height - 2.0 * shape.radius) / 2.0;
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), shape.radius)
            .translation(vector![0.0, shape.height / 2.0 + shape.foot_sink, 0.0])
            .mass(shape.mass)
            .friction(shape.friction)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .restitution(0.0)
            .build();

        let (body, collider) = world.add_dynamic_body(rigid_body, collider);
        let handle = Self {
            id: EntityId::new(),
            body,
            collider,
        };
        debug!(id = ?handle.id, ?position, "spawned actor");
        handle
    }

    /// Remove the actor's body and collider from the world
    pub fn despawn(self, world: &mut PhysicsWorld) {
        world.remove_rigid_body(self.body);
        debug!(id = ?self.id, "despawned actor");
    }

    /// Read the actor's transform, if it still exists
    pub fn transform(&self, world: &PhysicsWorld) -> Option<Transform> {
        world.get_rigid_body(self.body).map(body_transform)
    }

    /// Move the actor's feet to `position` and clear its velocity
    pub fn teleport(&self, world: &mut PhysicsWorld, position: Vec3) -> Result<(), PhysicsError> {
        let body = world
            .get_rigid_body_mut(self.body)
            .ok_or(PhysicsError::MissingBody(self.id))?;
        body.set_translation(vector![position.x, position.y, position.z], true);
        body.set_linvel(vector![0.0, 0.0, 0.0], true);
        Ok(())
    }

    /// Borrow the world as this actor's body and ground query
    pub fn bind<'w>(&self, world: &'w mut PhysicsWorld) -> Result<ActorBody<'w>, PhysicsError> {
        if world.get_rigid_body(self.body).is_none() {
            return Err(PhysicsError::MissingBody(self.id));
        }
        if world.get_collider(self.collider).is_none() {
            return Err(PhysicsError::MissingCollider(self.id));
        }
        Ok(ActorBody {
            world,
            handle: *self,
        })
    }
}

/// An actor bound to a mutable world for the duration of one physics tick
pub struct ActorBody<'w> {
    world: &'w mut PhysicsWorld,
    handle: ActorHandle,
}

impl ActorBody<'_> {
    fn rigid_body(&self) -> Option<&RigidBody> {
        self.world.get_rigid_body(self.handle.body)
    }
}

impl PhysicalBody for ActorBody<'_> {
    fn transform(&self) -> Transform {
        self.rigid_body().map(body_transform).unwrap_or_default()
    }

    fn velocity(&self) -> Vec3 {
        self.rigid_body()
            .map(|body| {
                let v = body.linvel();
                Vec3::new(v.x, v.y, v.z)
            })
            .unwrap_or(Vec3::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle.body) {
            body.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle.body) {
            body.apply_impulse(vector![impulse.x, impulse.y, impulse.z], true);
        }
    }
}

impl SpatialQuery for ActorBody<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        // The probe starts inside the actor's own capsule
        let filter = QueryFilter::default().exclude_rigid_body(self.handle.body);
        self.world
            .raycast_detailed(origin, direction, max_distance, filter)
    }
}

fn to_isometry(position: Vec3, rotation: Quat) -> Isometry3<f32> {
    let rotation = UnitQuaternion::from_quaternion(Quaternion::new(
        rotation.w, rotation.x, rotation.y, rotation.z,
    ));
    Isometry3::from_parts(Translation3::new(position.x, position.y, position.z), rotation)
}

fn body_transform(body: &RigidBody) -> Transform {
    let t = body.translation();
    let r = body.rotation();
    Transform::from_position_rotation(
        Vec3::new(t.x, t.y, t.z),
        Quat::from_xyzw(r.i, r.j, r.k, r.w),
    )
}
