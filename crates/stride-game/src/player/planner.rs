//! Camera-relative motion planning
//!
//! Input axes are turned into a world-space direction (relative to the camera
//! when there is one), converted into the actor's local frame and flattened
//! onto the ground. The commanded velocity itself follows the actor's facing;
//! the planned direction feeds heading telemetry and the turning hook.

use glam::Vec3;
use stride_core::{axis, Transform};

use super::GroundContact;
use crate::camera::CameraBasis;
use crate::input::InputSample;

/// Squared length below which a direction is treated as zero
const MIN_DIRECTION_LENGTH_SQUARED: f32 = 1e-10;

/// Heading scalars for turning and animation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Heading {
    /// Angle from world forward to the input direction, radians, positive to the right
    pub turn_angle: f32,
    /// Input component along world forward
    pub forward_amount: f32,
}

impl Heading {
    /// Measure `direction` against the world forward/right axes
    pub fn from_direction(direction: Vec3) -> Self {
        let forward_amount = direction.dot(axis::FORWARD);
        Self {
            turn_angle: direction.dot(axis::RIGHT).atan2(forward_amount),
            forward_amount,
        }
    }
}

/// Everything the planner derived for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPlan {
    /// Desired direction in world space, before clamping
    pub world_direction: Vec3,
    /// Clamped direction in the actor's local frame
    pub local_direction: Vec3,
    /// Local direction with the ground-normal component removed
    pub projected_direction: Vec3,
    /// Ground contact sampled right before projection
    pub contact: GroundContact,
    pub heading: Heading,
    /// Velocity to assign to the body
    pub velocity: Vec3,
}

/// Remove the component of `vector` along `normal`.
///
/// A zero normal leaves the vector unchanged.
pub fn project_on_plane(vector: Vec3, normal: Vec3) -> Vec3 {
    let length_squared = normal.length_squared();
    if length_squared <= f32::EPSILON {
        return vector;
    }
    vector - normal * (vector.dot(normal) / length_squared)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MotionPlanner;

impl MotionPlanner {
    pub fn new() -> Self {
        Self
    }

    /// World-space direction requested by the axes.
    ///
    /// With a camera, forward is the camera's forward flattened onto the
    /// horizontal plane; without one, the world axes are used.
    pub fn desired_direction(&self, sample: &InputSample, camera: Option<&dyn CameraBasis>) -> Vec3 {
        match camera {
            Some(camera) => {
                let forward = camera.forward();
                let flat = Vec3::new(forward.x, 0.0, forward.z);
                // A camera looking straight up or down has no usable forward
                let flat_forward = if flat.length_squared() > MIN_DIRECTION_LENGTH_SQUARED {
                    flat.normalize()
                } else {
                    Vec3::ZERO
                };
                sample.vertical * flat_forward + sample.horizontal * camera.right()
            }
            None => sample.vertical * axis::FORWARD + sample.horizontal * axis::RIGHT,
        }
    }

    /// Plan this tick's movement.
    ///
    /// Returns `None` when the axes produce no direction; the caller then
    /// leaves the body's velocity alone. `probe_ground` is called once, right
    /// before projection, so the freshest contact shapes the slope.
    pub fn plan<F>(
        &self,
        sample: &InputSample,
        camera: Option<&dyn CameraBasis>,
        transform: &Transform,
        current_speed: f32,
        probe_ground: F,
    ) -> Option<MotionPlan>
    where
        F: FnOnce(Vec3) -> GroundContact,
    {
        let world_direction = self.desired_direction(sample, camera);
        if world_direction.length_squared() == 0.0 {
            return None;
        }

        // Direction only: diagonals don't move faster
        let mut direction = world_direction;
        if direction.length() > 1.0 {
            direction = direction.normalize();
        }

        let local_direction = transform.inverse_transform_direction(direction);
        let contact = probe_ground(transform.position);
        let projected_direction = project_on_plane(local_direction, contact.surface_normal);

        // Measured on the unclamped world direction, before the local-space
        // conversion above.
        let heading = Heading::from_direction(world_direction);

        Some(MotionPlan {
            world_direction,
            local_direction,
            projected_direction,
            contact,
            heading,
            velocity: transform.forward() * current_speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn axes(horizontal: f32, vertical: f32) -> InputSample {
        InputSample {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    fn flat_ground(_: Vec3) -> GroundContact {
        GroundContact::grounded(Vec3::Y)
    }

    #[test]
    fn test_forward_without_camera_walks_along_facing() {
        let planner = MotionPlanner::new();
        let transform = Transform::default();

        let plan = planner
            .plan(&axes(0.0, 1.0), None, &transform, 2.0, flat_ground)
            .expect("forward input plans a move");

        assert!((plan.velocity - transform.forward() * 2.0).length() < 1e-6);
        assert!((plan.world_direction - Vec3::NEG_Z).length() < 1e-6);
        assert!(plan.heading.turn_angle.abs() < 1e-6);
        assert!((plan.heading.forward_amount - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_axes_plan_nothing() {
        let planner = MotionPlanner::new();
        let mut probed = false;
        let plan = planner.plan(&axes(0.0, 0.0), None, &Transform::default(), 2.0, |_| {
            probed = true;
            GroundContact::AIRBORNE
        });
        assert!(plan.is_none());
        assert!(!probed);
    }

    #[test]
    fn test_camera_forward_is_flattened() {
        // Camera yawed a quarter turn right and pitched down 30 degrees
        let camera = Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_y(-FRAC_PI_2) * Quat::from_rotation_x(-30.0_f32.to_radians()),
        );
        let planner = MotionPlanner::new();

        let direction = planner.desired_direction(&axes(0.0, 1.0), Some(&camera));
        assert!((direction - Vec3::X).length() < 1e-5);

        let direction = planner.desired_direction(&axes(1.0, 0.0), Some(&camera));
        assert!((direction - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_camera_looking_straight_down_ignores_vertical_axis() {
        let camera = Transform::from_position_rotation(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2));
        let planner = MotionPlanner::new();

        let plan = planner.plan(&axes(0.0, 1.0), Some(&camera), &Transform::default(), 2.0, flat_ground);
        assert!(plan.is_none());
    }

    #[test]
    fn test_diagonal_is_clamped_to_unit() {
        let planner = MotionPlanner::new();
        let plan = planner
            .plan(&axes(1.0, 1.0), None, &Transform::default(), 2.0, flat_ground)
            .expect("diagonal plans a move");

        assert!((plan.local_direction.length() - 1.0).abs() < 1e-5);
        assert!((plan.world_direction.length() - 2.0_f32.sqrt()).abs() < 1e-5);
        assert!((plan.heading.turn_angle - FRAC_PI_4).abs() < 1e-5);
        // Heading uses the unclamped direction
        assert!((plan.heading.forward_amount - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_partial_input_is_not_boosted() {
        let planner = MotionPlanner::new();
        let plan = planner
            .plan(&axes(0.0, 0.5), None, &Transform::default(), 2.0, flat_ground)
            .expect("half input plans a move");
        assert!((plan.local_direction.length() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_local_direction_follows_actor_rotation() {
        // Actor faces world -X; pushing world forward (-Z) is to its right
        let transform = Transform::from_position_rotation(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        let planner = MotionPlanner::new();

        let plan = planner
            .plan(&axes(0.0, 1.0), None, &transform, 3.0, flat_ground)
            .expect("forward input plans a move");

        assert!((plan.local_direction - Vec3::X).length() < 1e-5);
        assert!((plan.velocity - Vec3::NEG_X * 3.0).length() < 1e-5);
    }

    #[test]
    fn test_projection_is_orthogonal_to_slope() {
        let planner = MotionPlanner::new();
        let normals = [
            Vec3::new(0.0, 1.0, 0.3),
            Vec3::new(0.4, 1.0, -0.2),
            Vec3::new(-0.7, 0.7, 0.0),
            Vec3::new(0.0, 0.2, 1.0),
        ];
        let inputs = [axes(0.0, 1.0), axes(1.0, 0.0), axes(-0.6, 0.8), axes(1.0, -1.0)];

        for normal in normals {
            for input in &inputs {
                let plan = planner
                    .plan(input, None, &Transform::default(), 2.0, |_| {
                        GroundContact::grounded(normal)
                    })
                    .expect("non-zero input plans a move");
                let dot = plan.projected_direction.dot(plan.contact.surface_normal);
                assert!(dot.abs() < 1e-5, "dot {dot} for normal {normal:?}");
            }
        }
    }

    #[test]
    fn test_project_on_plane() {
        let projected = project_on_plane(Vec3::new(1.0, 1.0, 0.0), Vec3::Y * 2.0);
        assert!((projected - Vec3::X).length() < 1e-6);

        let unchanged = project_on_plane(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(unchanged, Vec3::new(1.0, 2.0, 3.0));
    }
}
