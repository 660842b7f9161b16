//! # Planet Engine
//!
//! Collision, motion and picking core of a real-time planet scene engine.
//!
//! ## Features
//!
//! - **Oriented boxes**: separating axis test over all 15 candidate axes
//! - **Swept collision**: pose sampling along a motion path
//! - **Picking**: slab-method ray test against an entity's transformed box
//! - **Scene ownership**: entities live in a generational arena
//!
//! ## Quick Start
//!
//! ```rust
//! use planet_engine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let target = scene.spawn(
//!     Entity::new(EntityType(1)).with_bounding_box(BoundingBox::cube(1.0)),
//! );
//! scene.update(1.0 / 60.0);
//!
//! let hit = scene.pick(&Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)));
//! assert_eq!(hit.map(|hit| hit.entity), Some(target));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PhysicsConfig},
        foundation::{
            collections::EntityId,
            math::{Mat4, Quat, Vec3},
        },
        physics::{BoundingBox, OrientationState, OrientedBoundingBox, Ray, RayHit},
        scene::{Entity, EntityType, Scene, SceneError},
    };
}
