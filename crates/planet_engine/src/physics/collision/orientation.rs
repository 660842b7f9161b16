//! Rigid poses used as entity state and as samples along a motion path

use crate::foundation::math::{utils, Quat, Vec3};

/// Position + rotation of an entity at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationState {
    /// World-space position
    pub position: Vec3,
    /// World-space rotation
    pub rotation: Quat,
}

impl OrientationState {
    /// Create a pose
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Unrotated pose at `position`
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::identity())
    }

    /// Blend two poses: position lerp, rotation component-wise lerp.
    ///
    /// The rotation blend is deliberately not a slerp, see
    /// [`utils::lerp_rotation`].
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: utils::lerp_vec3(&self.position, &other.position, t),
            rotation: utils::lerp_rotation(&self.rotation, &other.rotation, t),
        }
    }
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::at(Vec3::zeros())
    }
}
