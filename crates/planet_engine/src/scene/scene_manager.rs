//! Scene - owner of every entity
//!
//! The scene holds entities in a generational arena. Everything else
//! (input, UI, placement logic) refers to them through [`EntityId`]
//! handles, which go stale rather than dangle once the entity is removed.
//!
//! One tick runs the motion model for every entity, then refreshes their
//! model matrices. Collision and picking queries only borrow entities for
//! the duration of the query.

use crate::config::PhysicsConfig;
use crate::foundation::collections::{EntityId, EntityMap};
use crate::foundation::math::Vec3;
use crate::physics::collision::{OrientationState, Ray, RayHit, SlabTest};
use super::entity::Entity;

/// Scene errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The handle names an entity that has been removed
    #[error("Entity {0:?} is no longer in the scene")]
    StaleEntity(EntityId),
}

/// Owner of all entities plus the physics tunables they run with
#[derive(Debug, Default)]
pub struct Scene {
    config: PhysicsConfig,
    entities: EntityMap<Entity>,
}

impl Scene {
    /// Create an empty scene with default physics settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with custom physics settings
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            config,
            entities: EntityMap::with_key(),
        }
    }

    /// Physics settings in use
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Add an entity, taking ownership of it
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        log::debug!("Spawned {id:?} ({} entities)", self.entities.len());
        id
    }

    /// Remove an entity, handing it back
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(id);
        if removed.is_some() {
            log::debug!("Despawned {id:?} ({} entities)", self.entities.len());
        }
        removed
    }

    /// Whether `id` still names a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Look up an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity mutably
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Look up an entity, failing on a stale handle
    pub fn entity(&self, id: EntityId) -> Result<&Entity, SceneError> {
        self.entities.get(id).ok_or(SceneError::StaleEntity(id))
    }

    /// Look up an entity mutably, failing on a stale handle
    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, SceneError> {
        self.entities.get_mut(id).ok_or(SceneError::StaleEntity(id))
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over live entities and their handles
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    /// Advance every entity one tick
    pub fn update(&mut self, delta_time: f32) {
        let ground = self.config.ground_height;
        for entity in self.entities.values_mut() {
            entity.update_with_ground(delta_time, ground);
            entity.refresh_model_matrix();
        }
    }

    /// Start or continue dragging an entity along a pick ray
    pub fn drag(&mut self, id: EntityId, origin: &Vec3, direction: &Vec3) -> Result<(), SceneError> {
        self.entity_mut(id)?.drag(origin, direction);
        Ok(())
    }

    /// Release a dragged entity
    pub fn stop_dragging(&mut self, id: EntityId) -> Result<(), SceneError> {
        self.entity_mut(id)?.stop_dragging();
        Ok(())
    }

    /// Nearest entity whose transformed box the ray hits.
    ///
    /// Entities without a bounding box are not pickable and are skipped.
    /// Ties keep the first entity found.
    pub fn pick(&self, ray: &Ray) -> Option<RayHit> {
        let slab = SlabTest::from_config(&self.config);

        let hit = self
            .entities
            .iter()
            .filter(|(_, entity)| entity.model_bounding_box().is_some())
            .filter_map(|(id, entity)| entity.test_ray_with(&slab, ray).map(|distance| (id, distance)))
            .fold(None, |nearest: Option<(EntityId, f32)>, (id, distance)| match nearest {
                Some((_, best)) if best <= distance => nearest,
                _ => Some((id, distance)),
            })
            .map(|(entity, distance)| RayHit {
                entity,
                distance,
                point: ray.point_at(distance),
            });

        match &hit {
            Some(hit) => log::trace!("Pick hit {:?} at distance {:.2}", hit.entity, hit.distance),
            None => log::trace!("Pick missed"),
        }
        hit
    }

    /// Every other entity `mover` would hit travelling from `from` to `to`.
    ///
    /// Entities without a bounding box are not obstacles and are skipped.
    pub fn path_collisions(
        &self,
        mover: EntityId,
        from: &OrientationState,
        to: &OrientationState,
    ) -> Result<Vec<EntityId>, SceneError> {
        let moving = self.entity(mover)?;
        if moving.model_bounding_box().is_none() {
            log::warn!("{mover:?} has no bounding box; it cannot collide with anything");
            return Ok(Vec::new());
        }

        let samples_per_unit = self.config.samples_per_unit;
        Ok(self
            .entities
            .iter()
            .filter(|(id, entity)| *id != mover && entity.model_bounding_box().is_some())
            .filter(|(_, obstacle)| obstacle.check_path_collision_with(from, to, moving, samples_per_unit))
            .map(|(id, _)| id)
            .collect())
    }

    /// Whether `mover`'s own one-step path is free of other entities
    pub fn can_advance(&self, mover: EntityId) -> Result<bool, SceneError> {
        let [from, to] = self.entity(mover)?.current_path();
        Ok(self.path_collisions(mover, &from, &to)?.is_empty())
    }
}
