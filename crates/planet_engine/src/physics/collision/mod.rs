//! Narrow-phase collision geometry
//!
//! Shapes are stored in model space and moved into world space on demand
//! during a test; nothing here caches world-space data between frames.
//!
//! # Module Organization
//!
//! - [`primitives`] - Rays and model-space bounding boxes
//! - [`orientation`] - Rigid poses ([`OrientationState`])
//! - [`obb`] - Oriented boxes and the separating axis test
//! - [`sweep`] - Pose sampling along a motion path
//! - [`slab`] - Ray versus world-space box (slab method)

pub mod primitives;
pub mod orientation;
pub mod obb;
pub mod sweep;
pub mod slab;

// Re-export commonly used types
pub use primitives::{BoundingBox, Ray, RayHit};
pub use orientation::OrientationState;
pub use obb::OrientedBoundingBox;
pub use sweep::PathSampler;
pub use slab::SlabTest;
