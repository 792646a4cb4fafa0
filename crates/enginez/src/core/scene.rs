use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec, kept in spawn order.
/// Designed for small entity counts; every query is a linear scan.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID, preserving the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Remove every entity matching `stale` and return them in spawn order.
    /// Adjacent matches are all removed in one pass.
    pub fn prune(&mut self, mut stale: impl FnMut(&Entity) -> bool) -> Vec<Entity> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.entities.len());
        for entity in self.entities.drain(..) {
            if stale(&entity) {
                removed.push(entity);
            } else {
                kept.push(entity);
            }
        }
        self.entities = kept;
        removed
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::EntityKind;
    use crate::components::mask::Mask;
    use crate::core::geometry::Rgb;
    use glam::{IVec2, UVec2};

    fn hostile(id: u32, x: i32) -> Entity {
        let mask = Mask::filled(2, 2, Rgb::BLACK, Rgb::GREEN);
        Entity::new(EntityId(id), EntityKind::Hostile, UVec2::splat(2), 1, mask)
            .unwrap()
            .with_pos(IVec2::new(x, 0))
    }

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        scene.spawn(hostile(1, 10));
        assert_eq!(scene.get(EntityId(1)).unwrap().pos, IVec2::new(10, 0));
        assert!(scene.get(EntityId(2)).is_none());
    }

    #[test]
    fn despawn_keeps_order() {
        let mut scene = Scene::new();
        for id in 1..=3 {
            scene.spawn(hostile(id, 0));
        }
        assert!(scene.despawn(EntityId(1)).is_some());
        assert!(scene.despawn(EntityId(1)).is_none());
        let ids: Vec<_> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn prune_removes_adjacent_matches() {
        let mut scene = Scene::new();
        scene.spawn(hostile(1, -1));
        scene.spawn(hostile(2, -2));
        scene.spawn(hostile(3, 5));
        scene.spawn(hostile(4, -3));
        let removed = scene.prune(|e| e.pos.x < 0);
        let removed: Vec<_> = removed.iter().map(|e| e.id.0).collect();
        assert_eq!(removed, vec![1, 2, 4]);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.iter().next().unwrap().id, EntityId(3));
    }
}
