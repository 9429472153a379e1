//! Downward ground probe

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stride_core::axis;
use stride_physics::SpatialQuery;

/// Ground probe configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundSensorConfig {
    /// Height above the feet the ray starts from
    pub probe_offset: f32,
    /// Maximum ray length
    pub check_distance: f32,
}

impl Default for GroundSensorConfig {
    fn default() -> Self {
        Self {
            probe_offset: 0.1,
            check_distance: 0.1,
        }
    }
}

/// Ground state for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub is_grounded: bool,
    /// Unit surface normal; world up whenever not grounded
    pub surface_normal: Vec3,
}

impl GroundContact {
    /// No ground under the actor
    pub const AIRBORNE: GroundContact = GroundContact {
        is_grounded: false,
        surface_normal: axis::UP,
    };

    /// Standing on a surface with the given normal
    pub fn grounded(surface_normal: Vec3) -> Self {
        Self {
            is_grounded: true,
            surface_normal: surface_normal.try_normalize().unwrap_or(axis::UP),
        }
    }
}

impl Default for GroundContact {
    fn default() -> Self {
        Self::AIRBORNE
    }
}

/// Casts a short ray down from just above the actor's feet
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundSensor {
    pub config: GroundSensorConfig,
}

impl GroundSensor {
    pub fn new(config: GroundSensorConfig) -> Self {
        Self { config }
    }

    /// Probe for ground under `position` (the actor's feet).
    ///
    /// A miss is a normal outcome and yields [`GroundContact::AIRBORNE`].
    pub fn probe<Q: SpatialQuery + ?Sized>(&self, query: &Q, position: Vec3) -> GroundContact {
        let origin = position + axis::UP * self.config.probe_offset;
        match query.cast_ray(origin, -axis::UP, self.config.check_distance) {
            Some(hit) => GroundContact::grounded(hit.normal),
            None => GroundContact::AIRBORNE,
        }
    }

    /// Start and end of the probe ray, for debug line drawing
    pub fn debug_segment(&self, position: Vec3) -> (Vec3, Vec3) {
        let start = position + axis::UP * self.config.probe_offset;
        (start, start - axis::UP * self.config.check_distance)
    }
}
