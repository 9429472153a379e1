//! In-memory body and ground for locomotion tests

use std::cell::Cell;

use glam::{Quat, Vec3};
use stride_core::Transform;
use stride_physics::{PhysicalBody, RayHit, SpatialQuery};

/// A body standing over an optional infinite floor at a fixed height.
///
/// The floor reports `normal` regardless of where the ray lands, which is
/// enough to stand in for a slope under the feet.
#[derive(Debug, Default)]
pub(crate) struct StubBody {
    pub transform: Transform,
    pub velocity: Vec3,
    pub impulses: Vec<Vec3>,
    pub velocity_writes: usize,
    pub ground: Option<(f32, Vec3)>,
    pub probes: Cell<usize>,
}

impl StubBody {
    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn on_ground(normal: Vec3) -> Self {
        Self::with_ground_at(0.0, normal)
    }

    pub fn with_ground_at(height: f32, normal: Vec3) -> Self {
        Self {
            ground: Some((height, normal)),
            ..Self::default()
        }
    }

    pub fn facing(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn lift_off(&mut self) {
        self.ground = None;
    }
}

impl PhysicalBody for StubBody {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
        self.velocity_writes += 1;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
    }
}

impl SpatialQuery for StubBody {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.probes.set(self.probes.get() + 1);

        let (height, normal) = self.ground?;
        if direction.y >= 0.0 {
            return None;
        }
        let distance = (origin.y - height) / -direction.y;
        if !(0.0..=max_distance).contains(&distance) {
            return None;
        }
        Some(RayHit {
            distance,
            point: origin + direction * distance,
            normal,
        })
    }
}
