//! Read-only pose snapshot of the chase target.
//!
//! Controllers never hold a reference into the ECS world; the sync layer
//! samples the target's transform once per tick and hands the controllers
//! this plain value type.

use bevy::prelude::Transform;
use glam::{Quat, Vec3};
use serde::Serialize;

/// Position, orientation, and forward axis of the target for one tick.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TargetPose {
    /// World-space position of the target.
    pub position: Vec3,
    /// World-space orientation of the target.
    pub rotation: Quat,
    /// Unit forward axis the target is travelling along.
    pub forward: Vec3,
}

impl TargetPose {
    /// Builds a pose with an explicit forward axis.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat, forward: Vec3) -> Self {
        Self {
            position,
            rotation,
            forward,
        }
    }

    /// Samples a pose from a Bevy [`Transform`].
    #[must_use]
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
            forward: transform.forward().as_vec3(),
        }
    }
}
