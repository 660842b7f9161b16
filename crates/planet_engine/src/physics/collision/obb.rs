//! Oriented bounding boxes and the separating axis test
//!
//! An [`OrientedBoundingBox`] is a model-space [`BoundingBox`] carried into
//! world space by an [`OrientationState`]. It is rebuilt for every query
//! because entity poses change every frame.

use crate::foundation::math::{axes, Vec3};
use super::orientation::OrientationState;
use super::primitives::BoundingBox;

/// Cross products shorter than this (squared) come from near-parallel edges
/// and cannot separate anything the face axes would not.
const DEGENERATE_AXIS_EPSILON: f32 = 1.0e-6;

/// Slack added to the summed projected radii so that boxes touching within
/// floating-point noise still count as overlapping.
const OVERLAP_TOLERANCE: f32 = 1.0e-5;

/// A box with arbitrary rotation in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundingBox {
    center: Vec3,
    axes: [Vec3; 3],
    half_extents: Vec3,
    empty: bool,
}

impl OrientedBoundingBox {
    /// Place `bbox` at `state`
    ///
    /// An invalid box (some `min > max`) yields an empty volume that
    /// overlaps nothing.
    pub fn new(bbox: &BoundingBox, state: &OrientationState) -> Self {
        let rotation = state.rotation;
        Self {
            center: state.position + rotation * bbox.center(),
            axes: axes::all().map(|axis| rotation * axis),
            half_extents: bbox.half_extents(),
            empty: !bbox.is_valid(),
        }
    }

    /// World-space center
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit local axes in world space
    pub fn axes(&self) -> &[Vec3; 3] {
        &self.axes
    }

    /// Half-size along each local axis
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Whether this volume came from an invalid box
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Radius of this box's shadow on `axis` (which must be unit length)
    fn projected_radius(&self, axis: &Vec3) -> f32 {
        self.axes
            .iter()
            .zip(self.half_extents.iter())
            .map(|(local, half)| half * local.dot(axis).abs())
            .sum()
    }

    /// `false` when `axis` separates the two boxes
    fn overlap_on_axis(&self, other: &Self, axis: &Vec3) -> bool {
        let distance = (other.center - self.center).dot(axis).abs();
        distance <= self.projected_radius(axis) + other.projected_radius(axis) + OVERLAP_TOLERANCE
    }

    /// Separating axis test over the 15 candidate axes: both boxes' three
    /// face normals and the nine pairwise edge cross products.
    ///
    /// The predicate is symmetric in its operands.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }

        // Test 1-6: face normals of both boxes
        for axis in self.axes.iter().chain(other.axes.iter()) {
            if !self.overlap_on_axis(other, axis) {
                return false;
            }
        }

        // Test 7-15: edge-edge cross products
        for a in &self.axes {
            for b in &other.axes {
                let cross = a.cross(b);
                let length_squared = cross.norm_squared();
                if length_squared < DEGENERATE_AXIS_EPSILON {
                    continue;
                }
                let axis = cross / length_squared.sqrt();
                if !self.overlap_on_axis(other, &axis) {
                    return false;
                }
            }
        }

        // No separating axis found
        true
    }
}
