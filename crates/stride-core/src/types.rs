//! Core types used throughout Stride

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World axes. Right-handed, Y up, facing down negative Z.
pub mod axis {
    use glam::Vec3;

    pub const UP: Vec3 = Vec3::Y;
    pub const FORWARD: Vec3 = Vec3::NEG_Z;
    pub const RIGHT: Vec3 = Vec3::X;
}

/// Unique identifier for actors and other simulated objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Rigid transform: position plus orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * axis::FORWARD
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.rotation * axis::RIGHT
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * axis::UP
    }

    /// Rotate a local-space direction into world space
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// Rotate a world-space direction into this transform's local space.
    ///
    /// Length is preserved; position does not participate.
    pub fn inverse_transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation.inverse() * direction
    }

    /// Interpolate between two transforms.
    ///
    /// Position and rotation use separate factors; both are clamped to `[0, 1]`
    /// so large `dt * smoothness` products land on `b` instead of overshooting.
    pub fn lerp(a: &Transform, b: &Transform, position_t: f32, rotation_t: f32) -> Transform {
        let position_t = position_t.clamp(0.0, 1.0);
        let rotation_t = rotation_t.clamp(0.0, 1.0);
        Transform {
            position: a.position.lerp(b.position, position_t),
            rotation: a.rotation.lerp(b.rotation, rotation_t),
        }
    }
}
