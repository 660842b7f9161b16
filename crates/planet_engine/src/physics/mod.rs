//! Physics module for collision detection and picking
//!
//! Binary collision detection between oriented boxes (instantaneous and
//! swept) and ray-hit distance reporting. There is no broad phase and no
//! collision response.

pub mod collision;

pub use collision::{
    BoundingBox,
    OrientationState,
    OrientedBoundingBox,
    PathSampler,
    Ray,
    RayHit,
    SlabTest,
};
