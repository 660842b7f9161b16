//! Primitive collision shapes
//!
//! Rays and axis-aligned boxes. Boxes are stored in MODEL SPACE and only
//! moved into world space for the duration of a single test.

use crate::foundation::collections::EntityId;
use crate::foundation::math::{Mat4, Point3, Vec3};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized by [`Ray::new`])
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// A zero direction is kept as-is; such a ray is parallel to every slab
    /// and only "hits" boxes that contain its origin.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize(f32::EPSILON).unwrap_or(direction),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a scene-wide ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The entity that was hit
    pub entity: EntityId,
    /// The distance from the ray origin to the entry point
    pub distance: f32,
    /// The entry point in world space
    pub point: Vec3,
}

/// Axis-aligned box in an entity's own model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a box from its two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box centered at `center` with the given half extents
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// A cube of the given half extent centered on the model origin
    pub fn cube(half_extent: f32) -> Self {
        Self::from_center_extents(Vec3::zeros(), Vec3::repeat(half_extent))
    }

    /// `min <= max` on every axis, with no NaN components
    pub fn is_valid(&self) -> bool {
        (0..3).all(|i| self.min[i] <= self.max[i])
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size of the box on each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this box contains a point (boundary included)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Transform the `min` and `max` corners by `matrix`.
    ///
    /// Only the two stored corners are moved, so a rotating matrix can
    /// leave the result partially or fully inverted. Callers decide how to
    /// treat that.
    pub fn transform_corners(&self, matrix: &Mat4) -> Self {
        let min = matrix.transform_point(&Point3::from(self.min));
        let max = matrix.transform_point(&Point3::from(self.max));
        Self {
            min: min.coords,
            max: max.coords,
        }
    }

    /// Inverted on all three axes at once
    pub fn is_fully_inverted(&self) -> bool {
        (0..3).all(|i| self.max[i] < self.min[i])
    }
}
