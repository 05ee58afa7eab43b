//! Entity registry - identity, lifecycle, and tag-based grouping
//!
//! The registry owns every entity in the match. Iteration order is
//! insertion order, which makes the tick fan-out and tag snapshots
//! deterministic. The tag index is kept exactly consistent with each
//! entity's own tag set: a destroyed entity is never reachable from any
//! tag bucket, and removing the last member of a tag drops the bucket.

use crate::core::error::{ArenaError, Result};
use crate::core::types::EntityId;
use crate::ecs::entity::Entity;
use crate::simulation::tick::TickContext;
use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: AHashMap<EntityId, Entity>,
    /// Insertion order for deterministic iteration
    order: Vec<EntityId>,
    /// tag -> member ids, each bucket in registration order
    tags: AHashMap<String, Vec<EntityId>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with a generated id
    pub fn create(&mut self) -> EntityId {
        let id = EntityId::new();
        self.entities.insert(id, Entity::new(id));
        self.order.push(id);
        id
    }

    /// Create an entity with a caller-supplied id; a collision with a
    /// live entity is rejected, never overwritten
    pub fn create_with_id(&mut self, id: EntityId) -> Result<EntityId> {
        if self.entities.contains_key(&id) {
            return Err(ArenaError::DuplicateEntity(id));
        }
        self.entities.insert(id, Entity::new(id));
        self.order.push(id);
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Destroy an entity: run component teardown, drop it from the id
    /// index and from every tag bucket. Returns whether it existed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(mut entity) = self.entities.remove(&id) else {
            return false;
        };
        for tag in entity.tags().to_vec() {
            self.remove_from_tag_index(&tag, id);
        }
        entity.destroy();
        self.order.retain(|e| *e != id);
        true
    }

    /// Tag an entity. Returns false for an unknown entity or an already
    /// present tag.
    pub fn add_tag(&mut self, id: EntityId, tag: &str) -> bool {
        let Some(entity) = self.entities.get_mut(&id) else {
            return false;
        };
        if !entity.add_tag(tag) {
            return false;
        }
        self.tags.entry(tag.to_string()).or_default().push(id);
        true
    }

    /// Untag an entity. Returns false if the entity or tag was absent.
    pub fn remove_tag(&mut self, id: EntityId, tag: &str) -> bool {
        let Some(entity) = self.entities.get_mut(&id) else {
            return false;
        };
        if !entity.remove_tag(tag) {
            return false;
        }
        self.remove_from_tag_index(tag, id);
        true
    }

    fn remove_from_tag_index(&mut self, tag: &str, id: EntityId) {
        if let Some(bucket) = self.tags.get_mut(tag) {
            bucket.retain(|e| *e != id);
            if bucket.is_empty() {
                self.tags.remove(tag);
            }
        }
    }

    /// Snapshot of the ids carrying a tag, in registration order. The
    /// order is stable for tests; callers must not rely on it for
    /// correctness.
    pub fn entities_with_tag(&self, tag: &str) -> Vec<EntityId> {
        self.tags.get(tag).cloned().unwrap_or_default()
    }

    /// Entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Advance every live entity exactly once, in insertion order,
    /// independent of tag membership
    pub fn update(&mut self, dt: f32, ctx: &mut TickContext<'_>) {
        let order = self.order.clone();
        for id in order {
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.update(dt, ctx);
            }
        }
    }

    /// Destroy every entity and empty both indices
    pub fn clear(&mut self) {
        for (_, mut entity) in self.entities.drain() {
            entity.destroy();
        }
        self.order.clear();
        self.tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_explicit_id_rejects_collision() {
        let mut registry = EntityRegistry::new();
        let id = EntityId::new();
        registry.create_with_id(id).unwrap();

        let err = registry.create_with_id(id).unwrap_err();
        assert!(matches!(err, ArenaError::DuplicateEntity(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let registry = EntityRegistry::new();
        assert!(registry.get(EntityId::new()).is_none());
    }

    #[test]
    fn test_remove_reports_existence() {
        let mut registry = EntityRegistry::new();
        let id = registry.create();
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_tag_index_tracks_membership() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        let b = registry.create();

        assert!(registry.add_tag(a, "hero"));
        assert!(registry.add_tag(b, "hero"));
        assert!(!registry.add_tag(a, "hero"));

        assert_eq!(registry.entities_with_tag("hero"), vec![a, b]);

        registry.remove_tag(a, "hero");
        assert_eq!(registry.entities_with_tag("hero"), vec![b]);
    }

    #[test]
    fn test_empty_tag_bucket_is_dropped() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        registry.add_tag(a, "hero");
        registry.remove_tag(a, "hero");

        // No dangling empty bucket: the snapshot is empty either way,
        // but the index entry itself must be gone
        assert!(registry.tags.get("hero").is_none());
    }

    #[test]
    fn test_removed_entity_unreachable_from_tags() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        let b = registry.create();
        registry.add_tag(a, "tower");
        registry.add_tag(b, "tower");

        registry.remove(a);

        assert_eq!(registry.entities_with_tag("tower"), vec![b]);
    }

    #[test]
    fn test_unknown_tag_returns_empty() {
        let registry = EntityRegistry::new();
        assert!(registry.entities_with_tag("ghosts").is_empty());
    }

    #[test]
    fn test_iteration_is_insertion_order() {
        let mut registry = EntityRegistry::new();
        let ids: Vec<EntityId> = (0..5).map(|_| registry.create()).collect();
        let seen: Vec<EntityId> = registry.iter().map(|e| e.id()).collect();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut registry = EntityRegistry::new();
        let a = registry.create();
        registry.add_tag(a, "hero");
        registry.create();

        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.entities_with_tag("hero").is_empty());
        assert!(registry.get(a).is_none());
    }
}
