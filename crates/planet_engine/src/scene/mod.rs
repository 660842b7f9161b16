//! Scene management
//!
//! The scene owns entities and runs the per-tick pipeline:
//!
//! ```text
//! Motion model (Entity::update)
//!      ↓
//! Collision queries (swept / instantaneous OBB tests)
//!      ↓
//! Picking queries (slab test), issued independently by input
//! ```

mod entity;
mod scene_manager;

#[cfg(test)]
mod tests;

pub use entity::{Entity, EntityType};
pub use scene_manager::{Scene, SceneError};
