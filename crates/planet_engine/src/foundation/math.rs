//! Math utilities and types
//!
//! Provides the fundamental math types used by the collision, motion and
//! picking code. Everything is `f32` and Y-up right-handed.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// World axes
pub mod axes {
    use super::Vec3;

    /// Positive X
    pub fn x() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }

    /// Positive Y (up)
    pub fn y() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    /// Positive Z
    pub fn z() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    /// All three world axes in X, Y, Z order
    pub fn all() -> [Vec3; 3] {
        [x(), y(), z()]
    }
}

/// Math utility functions
pub mod utils {
    use super::{axes, Quat, Quaternion, Vec3};

    /// Component-wise linear interpolation of two vectors
    pub fn lerp_vec3(a: &Vec3, b: &Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }

    /// Component-wise blend of two rotations.
    ///
    /// This is a plain lerp of the four quaternion coordinates, not a
    /// spherical interpolation and without hemisphere correction. The blend
    /// is renormalized so it can still be used as a rotation; if the blend
    /// collapses to (near) zero the start rotation is returned.
    pub fn lerp_rotation(a: &Quat, b: &Quat, t: f32) -> Quat {
        let blended: Quaternion<f32> = a.quaternion().lerp(b.quaternion(), t);
        Quat::try_new(blended, 1.0e-6).unwrap_or(*a)
    }

    /// Shortest-arc rotation taking `start` onto `dest`.
    ///
    /// Both inputs are normalized first. Antiparallel vectors have no unique
    /// axis, so any axis perpendicular to `start` is used for a half turn.
    pub fn rotation_between(start: &Vec3, dest: &Vec3) -> Quat {
        let (Some(start), Some(dest)) = (start.try_normalize(1.0e-6), dest.try_normalize(1.0e-6))
        else {
            return Quat::identity();
        };

        let cos_theta = start.dot(&dest);

        if cos_theta < -1.0 + 0.001 {
            let mut rotation_axis = axes::z().cross(&start);
            if rotation_axis.norm_squared() < 0.01 {
                rotation_axis = axes::x().cross(&start);
            }
            let rotation_axis = nalgebra::Unit::new_normalize(rotation_axis);
            return Quat::from_axis_angle(&rotation_axis, std::f32::consts::PI);
        }

        let rotation_axis = start.cross(&dest);
        let s = ((1.0 + cos_theta) * 2.0).sqrt();
        let invs = 1.0 / s;

        Quat::new_normalize(Quaternion::new(
            s * 0.5,
            rotation_axis.x * invs,
            rotation_axis.y * invs,
            rotation_axis.z * invs,
        ))
    }
}

/// Build a translation * rotation * scale model matrix
pub fn model_matrix(position: &Vec3, rotation: &Quat, scale: &Vec3) -> Mat4 {
    Mat4::new_translation(position)
        * rotation.to_homogeneous()
        * Mat4::new_nonuniform_scaling(scale)
}
