//! Smoothing follow camera

use glam::Vec3;
use stride_core::{EntityId, Transform};

use super::FollowConfig;

/// Directional basis of an observing viewpoint.
///
/// The motion planner only needs forward and right to make input
/// camera-relative.
pub trait CameraBasis {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

impl CameraBasis for Transform {
    fn forward(&self) -> Vec3 {
        Transform::forward(self)
    }

    fn right(&self) -> Vec3 {
        Transform::right(self)
    }
}

/// Camera rig that eases its transform toward a target every late phase
#[derive(Debug, Clone)]
pub struct CameraFollower {
    /// Configuration
    pub config: FollowConfig,
    /// Current camera transform
    pub transform: Transform,
    /// Actor being followed; the rig never mutates it
    pub target: Option<EntityId>,
}

impl CameraFollower {
    /// Create a follower at the origin with no target
    pub fn new() -> Self {
        Self::with_config(FollowConfig::default())
    }

    /// Create a follower with custom config
    pub fn with_config(config: FollowConfig) -> Self {
        Self {
            config,
            transform: Transform::default(),
            target: None,
        }
    }

    /// Start following `target`, optionally snapping onto `target_transform`
    pub fn follow(&mut self, target: EntityId, target_transform: Option<Transform>) {
        self.target = Some(target);
        if let Some(transform) = target_transform {
            self.transform = transform;
        }
    }

    pub fn set_can_follow(&mut self, can_follow: bool) {
        self.config.can_follow = can_follow;
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Late phase: ease toward the target's transform.
    ///
    /// The interpolation factors are `dt * smoothness`, clamped to `[0, 1]`.
    /// Does nothing when following is disabled, no target is set, or the
    /// target's transform could not be resolved.
    pub fn late_update(&mut self, target_transform: Option<&Transform>, dt: f32) {
        if !self.config.can_follow || self.target.is_none() {
            return;
        }
        let Some(target) = target_transform else {
            return;
        };

        self.transform = Transform::lerp(
            &self.transform,
            target,
            dt * self.config.movement_smoothness,
            dt * self.config.rotation_smoothness,
        );
    }
}

impl Default for CameraFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraBasis for CameraFollower {
    fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    fn right(&self) -> Vec3 {
        self.transform.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn following(config: FollowConfig) -> CameraFollower {
        let mut camera = CameraFollower::with_config(config);
        camera.follow(EntityId::new(), None);
        camera
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut camera = following(FollowConfig::default());
        let target = Transform::from_position(Vec3::new(10.0, 2.0, -6.0));

        let mut last_distance = camera.position().distance(target.position);
        for _ in 0..600 {
            camera.late_update(Some(&target), 1.0 / 60.0);
            let distance = camera.position().distance(target.position);
            assert!(distance <= last_distance);
            last_distance = distance;
        }
        assert!(last_distance < 0.01);
    }

    #[test]
    fn test_large_factor_lands_on_target() {
        let mut camera = following(FollowConfig {
            movement_smoothness: 50.0,
            rotation_smoothness: 50.0,
            can_follow: true,
        });
        let target = Transform::from_position_rotation(
            Vec3::new(3.0, 0.0, 4.0),
            Quat::from_rotation_y(1.2),
        );

        camera.late_update(Some(&target), 0.1);
        assert!(camera.position().distance(target.position) < 1e-5);
        assert!(camera.transform.rotation.dot(target.rotation).abs() > 0.9999);

        // Stays put once there
        camera.late_update(Some(&target), 0.1);
        assert!(camera.position().distance(target.position) < 1e-5);
    }

    #[test]
    fn test_disabled_or_untargeted_does_nothing() {
        let target = Transform::from_position(Vec3::new(5.0, 0.0, 0.0));

        let mut camera = CameraFollower::new();
        camera.late_update(Some(&target), 0.5);
        assert_eq!(camera.position(), Vec3::ZERO);

        let mut camera = following(FollowConfig::default());
        camera.set_can_follow(false);
        camera.late_update(Some(&target), 0.5);
        assert_eq!(camera.position(), Vec3::ZERO);

        camera.set_can_follow(true);
        camera.late_update(None, 0.5);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_basis_matches_transform() {
        let mut camera = CameraFollower::new();
        camera.transform.rotation = Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2);
        assert!((CameraBasis::forward(&camera) - Vec3::X).length() < 1e-5);
        assert!((CameraBasis::right(&camera) - Vec3::Z).length() < 1e-5);
    }
}
