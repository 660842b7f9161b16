//! Ray versus world-space box using the slab method
//!
//! Intersection method from Real-Time Rendering and Essential Mathematics
//! for Games: clip the ray's parametric interval against the pair of planes
//! bounding each world axis in turn.

use crate::config::PhysicsConfig;
use crate::foundation::math::{axes, Mat4, Vec3};
use super::primitives::{BoundingBox, Ray};

/// Slab-method ray test with its tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabTest {
    /// Below this `|dot(direction, axis)|` the ray is parallel to the slab
    pub parallel_epsilon: f32,
    /// Initial far end of the ray interval
    pub max_distance: f32,
}

impl SlabTest {
    /// Build a test from the physics configuration
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            parallel_epsilon: config.parallel_epsilon,
            max_distance: config.ray_max_distance,
        }
    }

    /// Intersect a ray with a box already in world space.
    ///
    /// Returns the distance to the entry point, or `0.0` when the origin is
    /// inside the box. A box inverted on all three axes is never hit; a
    /// partially inverted one is still run through the slabs.
    pub fn intersect(&self, world_box: &BoundingBox, ray_origin: &Vec3, ray_direction: &Vec3) -> Option<f32> {
        // Should be max >= min, so if min is bigger than max everywhere there is nothing to hit
        if world_box.is_fully_inverted() {
            log::trace!("Slab test skipped: box {world_box:?} is inverted on every axis");
            return None;
        }

        let mut t_min = 0.0_f32;
        let mut t_max = self.max_distance;
        let delta = -ray_origin;

        for (i, axis) in axes::all().iter().enumerate() {
            let e = axis.dot(&delta);
            let f = ray_direction.dot(axis);
            let (slab_min, slab_max) = (world_box.min[i], world_box.max[i]);

            if f.abs() > self.parallel_epsilon {
                let mut t1 = (e + slab_min) / f;
                let mut t2 = (e + slab_max) / f;

                // t1 is the near plane
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                t_max = t_max.min(t2);
                t_min = t_min.max(t1);

                // Far is closer than near: no intersection
                if t_max < t_min {
                    return None;
                }
            } else if e + slab_min > 0.0 || e + slab_max < 0.0 {
                // Parallel to this slab and starting outside it
                return None;
            }
        }

        Some(t_min)
    }

    /// Move `local_box`'s corners by `model` and intersect the result
    pub fn intersect_transformed(&self, local_box: &BoundingBox, model: &Mat4, ray: &Ray) -> Option<f32> {
        let world_box = local_box.transform_corners(model);
        self.intersect(&world_box, &ray.origin, &ray.direction)
    }
}

impl Default for SlabTest {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}
