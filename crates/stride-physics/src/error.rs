use stride_core::EntityId;

/// Errors that can occur when binding an actor to the physics world.
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    #[error("rigid body for actor {0:?} is not in the physics world")]
    MissingBody(EntityId),

    #[error("collider for actor {0:?} is not in the physics world")]
    MissingCollider(EntityId),
}
