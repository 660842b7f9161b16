//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational handle to an entity owned by a [`Scene`](crate::scene::Scene).
    ///
    /// A handle outlives the entity it names: once the entity is despawned
    /// lookups through the old handle return `None`, even if the slot is
    /// reused by a newer entity.
    pub struct EntityId;
}

/// Handle-based map using slot map for stable references
pub type EntityMap<T> = SlotMap<EntityId, T>;
